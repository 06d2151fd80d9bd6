//! Axum HTTP surface: two POST endpoints relaying to the completion service,
//! plus a liveness probe. Permissive CORS for the browser client.

pub mod handlers;

use crate::adapters::openai::OpenAiCompletion;
use crate::core::pipeline::RelayPipeline;
use crate::domain::ports::{CompletionService, ConfigProvider};
use crate::utils::error::Result;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub fn build_router<C>(pipeline: Arc<RelayPipeline<C>>) -> Router
where
    C: CompletionService + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/emoji", post(handlers::emoji::<C>))
        .route("/api/emoji-color", post(handlers::emoji_color::<C>))
        .with_state(pipeline)
        .layer(cors)
}

/// Wires the OpenAI adapter into the pipeline from validated configuration.
/// The credential arrives explicitly; startup has already failed if it is absent.
pub fn build_service(config: &impl ConfigProvider, api_key: &str) -> Router {
    let completion = OpenAiCompletion::new(
        config.api_base(),
        api_key,
        config.request_timeout_seconds(),
    );
    let pipeline = RelayPipeline::new(completion, config.emoji_profile(), config.color_profile());
    build_router(Arc::new(pipeline))
}

pub async fn serve(router: Router, bind_addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("🚀 Listening on {}", bind_addr);
    axum::serve(listener, router).await?;
    Ok(())
}
