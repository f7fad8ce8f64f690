pub mod console;
pub mod health;

use crate::client::{self, HealthClient};
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

pub const BIND_ADDR: &str = "0.0.0.0:7860";

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn HealthClient>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(console::console_page))
        .route("/api/health-check", get(console::run_health_check))
        .route("/health", get(health::health))
        .with_state(state)
}

pub fn default_state() -> Result<AppState, String> {
    Ok(AppState {
        client: client::client_from_env()?,
    })
}

pub async fn serve() -> Result<(), String> {
    let state = default_state()?;
    let app = build_router(state);
    let addr: SocketAddr = BIND_ADDR
        .parse()
        .map_err(|err| format!("invalid bind address: {err}"))?;
    info!("console listening on http://{addr}");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|err| format!("server failed: {err}"))
}
