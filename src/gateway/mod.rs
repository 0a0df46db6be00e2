//! Axum-based HTTP gateway exposing the chat engine as a JSON API.
//!
//! This is the transport a browser chat page would consume; it holds no
//! business logic of its own. All state lives in the shared
//! [`ChatController`] for the lifetime of the process.

mod handlers;

use handlers::{
    handle_actions, handle_chat, handle_health, handle_history, handle_select_action,
};

use crate::config::Config;
use crate::conversation::ChatController;
use crate::error::GatewayError;
use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tracing::info;

/// Maximum request body size (64KB) — prevents memory exhaustion
pub const MAX_BODY_SIZE: usize = 65_536;
/// Request timeout; comfortably above the artificial response delay.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Shared state for all axum handlers
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<ChatController>,
}

/// Chat request body
#[derive(serde::Deserialize)]
pub struct ChatBody {
    pub message: String,
}

/// Run the HTTP gateway.
pub async fn run_gateway(host: &str, port: u16, config: Config) -> Result<(), GatewayError> {
    let addr: SocketAddr =
        format!("{host}:{port}")
            .parse()
            .map_err(|error: std::net::AddrParseError| GatewayError::Addr {
                addr: format!("{host}:{port}"),
                message: error.to_string(),
            })?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| GatewayError::Bind {
            addr: addr.to_string(),
            source,
        })?;

    run_gateway_with_listener(host, listener, config).await
}

/// Run the HTTP gateway from a pre-bound listener. Tests bind an ephemeral
/// port and hand it in here.
pub async fn run_gateway_with_listener(
    host: &str,
    listener: tokio::net::TcpListener,
    config: Config,
) -> Result<(), GatewayError> {
    let actual_port = listener.local_addr()?.port();

    let state = AppState {
        controller: Arc::new(ChatController::from_config(&config.chat)),
    };

    let app = Router::new()
        .route("/health", get(handle_health))
        .route("/api/actions", get(handle_actions))
        .route("/api/actions/{id}", post(handle_select_action))
        .route("/api/history", get(handle_history))
        .route("/api/chat", post(handle_chat))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TimeoutLayer::new(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
        .with_state(state);

    info!("🌐 Gateway listening on {host}:{actual_port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {error}");
    }
}
