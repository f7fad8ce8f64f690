use n8n_console::report::{
    format_error, format_health, format_success, is_connection_error, CONNECTION_HINT,
};
use serde_json::json;

#[test]
fn healthy_report_lists_all_fields() {
    let report = json!({
        "status": "healthy",
        "api_connected": true,
        "version": "1.0",
        "features": ["a", "b"],
    });
    let output = format_health(&report);

    assert!(output.contains("✅ Status: Healthy"));
    assert!(output.contains("✅ API Connection: Active"));
    assert!(output.contains("1.0"));
    assert!(output.contains("a, b"));
}

#[test]
fn degraded_status_uses_warning_marker() {
    let report = json!({
        "status": "degraded",
        "api_connected": false,
    });
    let output = format_health(&report);

    assert!(output.contains("⚠️ Status: degraded"));
    assert!(!output.contains("✅ Status"));
}

#[test]
fn disconnected_report_uses_negative_marker() {
    let report = json!({
        "status": "healthy",
        "api_connected": false,
    });
    let output = format_health(&report);

    assert!(output.contains("❌ API Connection: Unavailable"));
}

#[test]
fn empty_features_emit_no_features_line() {
    let report = json!({
        "status": "healthy",
        "api_connected": true,
        "features": [],
    });
    assert!(!format_health(&report).contains("Features"));

    let report = json!({
        "status": "healthy",
        "api_connected": true,
    });
    assert!(!format_health(&report).contains("Features"));
}

#[test]
fn empty_version_emits_no_version_line() {
    let report = json!({
        "status": "healthy",
        "api_connected": true,
        "version": "",
    });
    assert!(!format_health(&report).contains("Version"));
}

#[test]
fn non_mapping_input_falls_back_to_generic_success() {
    let output = format_health(&json!("all systems go"));

    assert!(output.starts_with("✅"));
    assert!(output.contains("all systems go"));
}

#[test]
fn success_format_pretty_prints_structured_data() {
    let output = format_success("Workflows", &json!({ "hasMore": false }));

    assert!(output.contains("```json"));
    assert!(output.contains("\"hasMore\": false"));
}

#[test]
fn connection_errors_carry_a_remediation_hint() {
    let output = format_error("cannot connect to the n8n server at http://localhost:5678");

    assert!(output.contains("n8n Connection Error"));
    assert!(output.contains(CONNECTION_HINT));
    assert!(!output.contains("Detail"));
}

#[test]
fn generic_errors_carry_the_backtrace_block() {
    let output = format_error("template exploded");

    assert!(output.contains("❌ Error: template exploded"));
    assert!(output.contains("Detail"));
    assert!(!output.contains(CONNECTION_HINT));
}

#[test]
fn connection_marker_matching() {
    assert!(is_connection_error("the n8n server is not responding"));
    assert!(is_connection_error("Connection refused (os error 111)"));
    assert!(is_connection_error("host unreachable"));
    assert!(is_connection_error("request timed out after 10s"));
    assert!(!is_connection_error("template exploded"));
}
