use crate::client::{workflows_endpoint, API_KEY_HEADER, DEFAULT_API_URL, REQUEST_TIMEOUT};

/// Per-category pass/fail results for the quick-start summary table.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreflightSummary {
    pub runtime_ok: bool,
    pub components_ok: bool,
    pub environment_ok: bool,
    pub connection_ok: bool,
}

#[derive(Debug, Clone)]
pub struct ResolvedEnvironment {
    pub ok: bool,
    pub api_url: String,
    pub api_key: Option<String>,
}

/// Resolves the API URL and key. The URL always resolves (falling back to the
/// default), the check passes only when a key is present.
pub fn resolve_environment(
    api_url: Option<String>,
    api_key: Option<String>,
) -> ResolvedEnvironment {
    let api_url = api_url
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let api_key = api_key.filter(|value| !value.trim().is_empty());
    ResolvedEnvironment {
        ok: api_key.is_some(),
        api_url,
        api_key,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Connected,
    Unauthorized,
    UnexpectedStatus(u16),
    Refused(String),
    Failed(String),
}

impl ProbeOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, ProbeOutcome::Connected)
    }

    pub fn describe(&self) -> String {
        match self {
            ProbeOutcome::Connected => "✅ n8n API connection successful".to_string(),
            ProbeOutcome::Unauthorized => "❌ Invalid API key (401 Unauthorized)".to_string(),
            ProbeOutcome::UnexpectedStatus(status) => {
                format!("⚠️ Unexpected response: {status}")
            }
            ProbeOutcome::Refused(message) => format!("❌ {message} Is n8n running?"),
            ProbeOutcome::Failed(message) => format!("❌ Connection error: {message}"),
        }
    }
}

pub fn classify_status(status: u16) -> ProbeOutcome {
    match status {
        200 => ProbeOutcome::Connected,
        401 => ProbeOutcome::Unauthorized,
        other => ProbeOutcome::UnexpectedStatus(other),
    }
}

/// One GET against the workflows endpoint, 10-second timeout, no retry.
pub async fn probe_api(api_url: &str, api_key: Option<&str>) -> ProbeOutcome {
    let client = match reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build() {
        Ok(client) => client,
        Err(err) => return ProbeOutcome::Failed(format!("failed to build http client: {err}")),
    };

    let mut request = client.get(workflows_endpoint(api_url));
    if let Some(key) = api_key {
        request = request.header(API_KEY_HEADER, key);
    }

    match request.send().await {
        Ok(response) => classify_status(response.status().as_u16()),
        Err(err) if err.is_timeout() => {
            ProbeOutcome::Failed(format!("request timed out: {err}"))
        }
        Err(err) if err.is_connect() => {
            ProbeOutcome::Refused(format!("cannot connect to n8n at {api_url}."))
        }
        Err(err) => ProbeOutcome::Failed(err.to_string()),
    }
}

/// The console needs these two components at runtime; the quick-start loads
/// them once up front so a broken install is reported before launch.
pub fn check_http_component() -> Result<(), String> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map(|_| ())
        .map_err(|err| format!("http client failed to build: {err}"))
}

pub fn check_template_component() -> Result<(), String> {
    crate::views::console::render_console_page().map(|_| ())
}
