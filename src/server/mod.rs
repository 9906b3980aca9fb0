//! HTTP surface of the comparison service.
//!
//! `POST /compare` accepts a multipart form with `file1`, `file2` and an
//! optional `sortOrder`; the produced artifacts are served back from
//! `GET /outputs/{id}/{file}`.

pub mod handlers;
pub mod response;

use crate::config::cli::LocalStorage;
use crate::config::toml_config::ServiceConfig;
use crate::core::engine::CompareEngine;
use crate::core::pipeline::ComparePipeline;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::validate_socket_addr;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

pub type ServiceEngine = CompareEngine<ComparePipeline<LocalStorage, ServiceConfig>>;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ServiceEngine>,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        let storage = LocalStorage::new(config.output_path().to_string());
        let pipeline = ComparePipeline::new(storage, config);
        Self {
            engine: Arc::new(CompareEngine::new(pipeline)),
        }
    }
}

pub fn router(config: ServiceConfig) -> Router {
    let body_limit = config.max_upload_bytes();

    Router::new()
        .route("/compare", post(handlers::compare))
        .route("/outputs/:id/:file", get(handlers::download))
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(AppState::new(config))
}

/// 綁定設定中的位址並啟動服務，直到收到 Ctrl-C
pub async fn serve(config: ServiceConfig) -> Result<()> {
    let addr = validate_socket_addr("server.bind_address", config.bind_address())?;
    let listener = TcpListener::bind(addr).await?;
    serve_with_listener(listener, config, shutdown_signal()).await
}

pub async fn serve_with_listener<F>(
    listener: TcpListener,
    config: ServiceConfig,
    shutdown: F,
) -> Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    tracing::info!("🚀 Listening on http://{}", listener.local_addr()?);
    tracing::info!(
        "📁 Artifacts stored under {} (classification: {}, upload limit: {} bytes)",
        config.output_path(),
        config.classification().as_str(),
        config.max_upload_bytes()
    );

    axum::serve(listener, router(config))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
