use crate::core::pipeline::ModerationPipeline;
use crate::domain::model::{JobRequest, ResponseEnvelope};
use crate::domain::ports::{ContentFetcher, ContentPublisher, ModerationClassifier};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// `POST /` takes a job request body and replies with the envelope and its status code.
pub fn router<F, C, P>(pipeline: Arc<ModerationPipeline<F, C, P>>) -> Router
where
    F: ContentFetcher + 'static,
    C: ModerationClassifier + 'static,
    P: ContentPublisher + 'static,
{
    Router::new()
        .route("/", post(handle_job::<F, C, P>))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(pipeline)
}

pub async fn serve(router: Router, host: &str, port: u16) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!("🚀 Moderation adapter listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}

async fn handle_job<F, C, P>(
    State(pipeline): State<Arc<ModerationPipeline<F, C, P>>>,
    body: Bytes,
) -> (StatusCode, Json<ResponseEnvelope>)
where
    F: ContentFetcher + 'static,
    C: ModerationClassifier + 'static,
    P: ContentPublisher + 'static,
{
    // 空 body 或非 JSON 一律當作沒有 data
    let request = JobRequest::from_slice(&body);
    let envelope = pipeline.handle(&request).await;

    let status =
        StatusCode::from_u16(envelope.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(envelope))
}

async fn health() -> &'static str {
    "ok"
}
