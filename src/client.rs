use crate::models::HealthReport;
use crate::tools;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:5678";
pub const API_URL_VAR: &str = "N8N_API_URL";
pub const API_KEY_VAR: &str = "N8N_API_KEY";
pub const CONSOLE_MODE_VAR: &str = "N8N_CONSOLE_MODE";
pub const API_KEY_HEADER: &str = "X-N8N-API-KEY";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub fn workflows_endpoint(base_url: &str) -> String {
    format!("{}/api/v1/workflows", base_url.trim_end_matches('/'))
}

#[async_trait]
pub trait HealthClient: Send + Sync {
    /// Runs one health check and returns the HealthReport-shaped value.
    async fn health_check(&self) -> Result<Value, String>;
}

/// Answers from the named-tool stub instead of the network.
pub struct StubHealthClient;

#[async_trait]
impl HealthClient for StubHealthClient {
    async fn health_check(&self) -> Result<Value, String> {
        Ok(tools::call_tool("n8n_health_check", &json!({})))
    }
}

/// Probes the remote n8n API and synthesises a report from the outcome.
pub struct HttpHealthClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpHealthClient {
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| format!("failed to build http client: {err}"))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn report_for_status(&self, status: u16) -> HealthReport {
        match status {
            200 => HealthReport {
                status: "healthy".to_string(),
                api_connected: true,
                version: None,
                features: vec!["workflows".to_string()],
            },
            401 => HealthReport {
                status: "unauthorized".to_string(),
                api_connected: false,
                version: None,
                features: Vec::new(),
            },
            other => HealthReport {
                status: format!("unexpected status {other}"),
                api_connected: false,
                version: None,
                features: Vec::new(),
            },
        }
    }
}

#[async_trait]
impl HealthClient for HttpHealthClient {
    async fn health_check(&self) -> Result<Value, String> {
        let mut request = self.client.get(workflows_endpoint(&self.base_url));
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await.map_err(|err| {
            if err.is_timeout() {
                format!("request to the n8n server timed out: {err}")
            } else if err.is_connect() {
                format!("cannot connect to the n8n server at {}: {err}", self.base_url)
            } else {
                format!("request to the n8n server failed: {err}")
            }
        })?;

        let report = self.report_for_status(response.status().as_u16());
        serde_json::to_value(&report).map_err(|err| format!("failed to encode report: {err}"))
    }
}

/// Picks the client implementation from the environment: `N8N_CONSOLE_MODE=live`
/// selects the HTTP-backed client, anything else the stub.
pub fn client_from_env() -> Result<Arc<dyn HealthClient>, String> {
    let mode = std::env::var(CONSOLE_MODE_VAR).unwrap_or_default();
    if mode.eq_ignore_ascii_case("live") {
        let base_url =
            std::env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_key = std::env::var(API_KEY_VAR).ok();
        Ok(Arc::new(HttpHealthClient::new(&base_url, api_key)?))
    } else {
        Ok(Arc::new(StubHealthClient))
    }
}
