use n8n_console::client::{HealthClient, HttpHealthClient, StubHealthClient};
use n8n_console::report::format_health;
use n8n_console::tools::call_tool;
use serde_json::json;

#[test]
fn health_check_tool_returns_fixed_report() {
    let value = call_tool("n8n_health_check", &json!({}));

    assert_eq!(value["status"], "healthy");
    assert_eq!(value["api_connected"], true);
    assert_eq!(value["version"], "latest");
    assert_eq!(value["features"][0], "workflows");
}

#[test]
fn list_workflows_tool_returns_sample_rows() {
    let value = call_tool("n8n_list_workflows", &json!({}));

    assert_eq!(value["data"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["data"][0]["name"], "Example Workflow");
    assert_eq!(value["hasMore"], false);
}

#[test]
fn unknown_tool_returns_error_mapping() {
    let value = call_tool("n8n_delete_everything", &json!({}));

    assert_eq!(
        value["error"].as_str(),
        Some("Unknown tool: n8n_delete_everything")
    );
}

#[tokio::test]
async fn stub_client_report_formats_as_healthy() {
    let value = StubHealthClient.health_check().await.expect("stub check");
    let output = format_health(&value);

    assert!(output.contains("✅ Status: Healthy"));
    assert!(output.contains("✅ API Connection: Active"));
    assert!(output.contains("latest"));
    assert!(output.contains("workflows, executions, nodes"));
}

#[test]
fn http_client_synthesises_reports_from_status() {
    let client = HttpHealthClient::new("http://localhost:5678", None).expect("client");

    let healthy = client.report_for_status(200);
    assert_eq!(healthy.status, "healthy");
    assert!(healthy.api_connected);

    let unauthorized = client.report_for_status(401);
    assert_eq!(unauthorized.status, "unauthorized");
    assert!(!unauthorized.api_connected);

    let broken = client.report_for_status(502);
    assert_eq!(broken.status, "unexpected status 502");
    assert!(!broken.api_connected);
}
