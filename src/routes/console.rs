use crate::report;
use crate::routes::AppState;
use crate::views;
use axum::{extract::State, http::StatusCode, response::Html};

pub async fn console_page() -> Result<Html<String>, (StatusCode, String)> {
    views::console::render_console_page()
        .map(Html)
        .map_err(|message| (StatusCode::INTERNAL_SERVER_ERROR, message))
}

/// Both the button click and the page-load script land here. Every failure is
/// converted to a displayed string; nothing propagates past this handler.
pub async fn run_health_check(State(state): State<AppState>) -> String {
    match state.client.health_check().await {
        Ok(value) => report::format_health(&value),
        Err(message) => report::format_error(&message),
    }
}
