//! HTTP transport for MCP using Axum
//!
//! Routes:
//! - GET /sse: MCP Server-Sent Events stream
//! - POST /sse/message: client messages for an SSE session
//! - /mcp: MCP streamable HTTP endpoint
//!
//! Everything else answers 404 `Not found`. Protocol handling for both MCP
//! routes is provided by rmcp; each session gets a clone of the same
//! [`DasServer`].

use axum::{
    http::{HeaderName, StatusCode},
    Router,
};
use rmcp::transport::sse_server::{SseServer, SseServerConfig};
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpServerConfig, StreamableHttpService,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};

use crate::config::HttpConfig;
use crate::error::ProviderError;
use crate::mcp::DasServer;

pub const SSE_PATH: &str = "/sse";
pub const SSE_MESSAGE_PATH: &str = "/sse/message";
pub const MCP_PATH: &str = "/mcp";

/// Session header issued by the streamable HTTP endpoint
const MCP_SESSION_ID_HEADER: HeaderName = HeaderName::from_static("mcp-session-id");

/// Builds the HTTP router
///
/// Returns the router and the cancellation token that stops the SSE
/// sessions. `addr` is only advertised in the SSE configuration; nothing is
/// bound here.
pub fn build_router(server: DasServer, addr: SocketAddr) -> (Router, CancellationToken) {
    let ct = CancellationToken::new();

    let (sse_server, sse_router) = SseServer::new(SseServerConfig {
        bind: addr,
        sse_path: SSE_PATH.to_string(),
        post_path: SSE_MESSAGE_PATH.to_string(),
        ct: ct.clone(),
        sse_keep_alive: None,
    });

    let sse_factory = server.clone();
    sse_server.with_service(move || sse_factory.clone());

    let mcp_service = StreamableHttpService::new(
        move || Ok(server.clone()),
        Arc::new(LocalSessionManager::default()),
        StreamableHttpServerConfig::default(),
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([MCP_SESSION_ID_HEADER]);

    let router = Router::new()
        .nest_service(MCP_PATH, mcp_service)
        .merge(sse_router)
        .fallback(not_found)
        .layer(cors);

    (router, ct)
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

/// Start HTTP server with the MCP endpoints
///
/// Runs until Ctrl+C, then shuts down gracefully and cancels open SSE
/// sessions.
pub async fn start_http_server(server: DasServer, config: HttpConfig) -> Result<(), ProviderError> {
    tracing::info!("Initializing HTTP MCP server...");

    let addr = config.addr;
    let (app, ct) = build_router(server, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("HTTP MCP server listening on {}", addr);
    tracing::info!("  SSE endpoint: GET http://{}{}", addr, SSE_PATH);
    tracing::info!("  SSE messages: POST http://{}{}", addr, SSE_MESSAGE_PATH);
    tracing::info!("  Streamable HTTP endpoint: http://{}{}", addr, MCP_PATH);

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Received shutdown signal (Ctrl+C)");
                let _ = shutdown_tx.send(());
            }
            Err(err) => {
                tracing::error!("Failed to listen for shutdown signal: {}", err);
            }
        }
    });

    let shutdown_ct = ct.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_rx.await.ok();
            tracing::info!("Shutting down HTTP server...");
            shutdown_ct.cancel();
        })
        .await?;

    ct.cancel();
    tracing::info!("Server stopped");
    Ok(())
}
