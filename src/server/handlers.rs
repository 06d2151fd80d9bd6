use crate::core::pipeline::RelayPipeline;
use crate::domain::ports::CompletionService;
use crate::utils::error::RelayError;
use axum::extract::{Json, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use std::sync::Arc;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

// 顏色端點的回應可以長期快取，同一個 emoji 不會變色
const COLOR_CACHE_CONTROL: &str = "s-maxage=2592000, stale-while-revalidate";

#[derive(Debug, Deserialize)]
pub struct EmojiRequest {
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct ColorRequest {
    pub emoji: String,
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn emoji<C: CompletionService>(
    State(pipeline): State<Arc<RelayPipeline<C>>>,
    Json(request): Json<EmojiRequest>,
) -> std::result::Result<Response, RelayError> {
    tracing::info!("Received request to /api/emoji");
    tracing::debug!("Input prompt: {:?}", request.prompt);

    let result = pipeline.emoji_for_text(&request.prompt).await?;

    tracing::info!("Final emoji to return: {}", result.emoji);
    Ok(([(header::CONTENT_TYPE, TEXT_PLAIN)], result.emoji).into_response())
}

pub async fn emoji_color<C: CompletionService>(
    State(pipeline): State<Arc<RelayPipeline<C>>>,
    Json(request): Json<ColorRequest>,
) -> std::result::Result<Response, RelayError> {
    tracing::info!("Received request to /api/emoji-color");
    tracing::debug!("Input emoji: {:?}", request.emoji);

    let result = pipeline.color_for_emoji(&request.emoji).await?;

    tracing::info!("Final color to return: {}", result.hex);
    Ok((
        [
            (header::CONTENT_TYPE, TEXT_PLAIN),
            (header::CACHE_CONTROL, COLOR_CACHE_CONTROL),
        ],
        result.hex,
    )
        .into_response())
}
