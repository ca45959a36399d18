//! uigen API /v1: tool server endpoints
//!
//! Two tools are exposed over HTTP, `generate-component` and
//! `list-components`. Both answer with a text envelope and report failures
//! in-band (`isError: true`) rather than through the status code.
pub mod config;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod tools;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use uigen_generator::ComponentGenerator;
use uigen_out::TemplateRenderer;

use crate::config::ServerConfig;
use crate::metrics::Metrics;

/// Shared, immutable server state
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<ComponentGenerator>,
    pub renderer: Arc<TemplateRenderer>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(generator: ComponentGenerator, renderer: TemplateRenderer, metrics: Metrics) -> Self {
        AppState {
            generator: Arc::new(generator),
            renderer: Arc::new(renderer),
            metrics: Arc::new(metrics),
        }
    }

    /// Built-in catalog, templates and response templates
    pub fn builtin() -> anyhow::Result<Self> {
        Ok(Self::new(
            ComponentGenerator::builtin()?,
            TemplateRenderer::builtin()?,
            Metrics::new()?,
        ))
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/v1/health", get(handlers::health))
        .route("/v1/tools", get(handlers::list_tools))
        .route("/v1/tools/generate-component", post(handlers::generate_component))
        .route("/v1/tools/list-components", post(handlers::list_components))
        .route("/metrics", get(handlers::metrics))
        .layer(axum::middleware::from_fn(middleware::request_id))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors())
        .with_state(state)
}

pub async fn run(config: &ServerConfig) -> anyhow::Result<()> {
    let app = create_app(AppState::builtin()?);
    let listener = tokio::net::TcpListener::bind(&config.addr).await?;

    tracing::info!("uigen API listening on {}", config.addr);
    axum::serve(listener, app).await?;
    Ok(())
}
