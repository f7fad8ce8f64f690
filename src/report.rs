use regex::Regex;
use serde_json::Value;
use std::backtrace::Backtrace;
use std::sync::OnceLock;

pub const CONNECTION_HINT: &str =
    "💡 Hint: make sure the n8n server is running and reachable.";

/// Render a health-check result as a multi-line operator report.
///
/// Mapping inputs get the structured status/connectivity/version/features
/// lines; anything else falls through to the generic success format.
pub fn format_health(value: &Value) -> String {
    let Some(report) = value.as_object() else {
        return format_success("System Status", value);
    };

    let mut output = String::from("🏥 n8n System Status\n\n");

    let status = report
        .get("status")
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    if status == "healthy" {
        output.push_str("✅ Status: Healthy\n");
    } else {
        output.push_str(&format!("⚠️ Status: {status}\n"));
    }

    if report
        .get("api_connected")
        .and_then(Value::as_bool)
        .unwrap_or(false)
    {
        output.push_str("✅ API Connection: Active\n");
    } else {
        output.push_str("❌ API Connection: Unavailable\n");
    }

    if let Some(version) = report
        .get("version")
        .and_then(Value::as_str)
        .filter(|version| !version.is_empty())
    {
        output.push_str(&format!("📦 Version: {version}\n"));
    }

    let features: Vec<&str> = report
        .get("features")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();
    if !features.is_empty() {
        output.push_str(&format!("🎯 Features: {}\n", features.join(", ")));
    }

    output
}

pub fn format_success(title: &str, data: &Value) -> String {
    match data {
        Value::Object(_) | Value::Array(_) => {
            let pretty = serde_json::to_string_pretty(data)
                .unwrap_or_else(|_| data.to_string());
            format!("✅ {title}\n\n```json\n{pretty}\n```")
        }
        Value::String(text) => format!("✅ {title}\n\n{text}"),
        other => format!("✅ {title}\n\n{other}"),
    }
}

/// Convert a failure message into a displayed report. Connection-shaped
/// failures get a remediation hint; everything else carries the backtrace.
pub fn format_error(message: &str) -> String {
    if is_connection_error(message) {
        format!("❌ n8n Connection Error\n\n{message}\n\n{CONNECTION_HINT}")
    } else {
        let trace = Backtrace::force_capture();
        format!("❌ Error: {message}\n\n📍 Detail:\n```\n{trace}\n```")
    }
}

pub fn is_connection_error(message: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| {
        Regex::new(r"(?i)n8n server|connection|connect\b|refused|unreachable|timed out")
            .expect("connection pattern")
    });
    pattern.is_match(message)
}
