use crate::models::WorkflowSummary;
use serde_json::{json, Value};

/// Named-tool invocation stub. Stands in for the real MCP client; the two
/// tools it answers return fixed sample data.
pub fn call_tool(tool_name: &str, _args: &Value) -> Value {
    match tool_name {
        "n8n_health_check" => json!({
            "status": "healthy",
            "api_connected": true,
            "version": "latest",
            "features": ["workflows", "executions", "nodes"],
        }),
        "n8n_list_workflows" => {
            let rows = vec![
                WorkflowSummary {
                    id: "1".to_string(),
                    name: "Example Workflow".to_string(),
                    active: true,
                },
                WorkflowSummary {
                    id: "2".to_string(),
                    name: "Test API".to_string(),
                    active: false,
                },
            ];
            json!({ "data": rows, "hasMore": false })
        }
        other => json!({ "error": format!("Unknown tool: {other}") }),
    }
}
