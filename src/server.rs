use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Path, State, rejection::JsonRejection},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::{
    config::AppConfig,
    error::ServiceError,
    handler::{ServingHandler, TextHandler},
    model::{ModelMetadata, PredictionRecord, RequestRecord},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub handler: Arc<TextHandler>,
}

pub fn build_router(config: Arc<AppConfig>, handler: Arc<TextHandler>) -> Router {
    let body_limit = config.max_body_bytes;
    let state = AppState { config, handler };

    Router::new()
        .route("/health", get(health))
        .route("/metadata", get(metadata))
        .route("/predictions", post(predict))
        .route("/predictions/:model_name", post(predict_named))
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "ok"
}

async fn metadata(State(state): State<AppState>) -> Json<ModelMetadata> {
    Json(state.handler.metadata())
}

async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<Vec<RequestRecord>>, JsonRejection>,
) -> Result<Json<Vec<PredictionRecord>>, ServiceError> {
    run_handler(&state, payload)
}

async fn predict_named(
    State(state): State<AppState>,
    Path(model_name): Path<String>,
    payload: Result<Json<Vec<RequestRecord>>, JsonRejection>,
) -> Result<Json<Vec<PredictionRecord>>, ServiceError> {
    if model_name != state.config.model_name {
        return Err(ServiceError::ModelNotFound(model_name));
    }
    run_handler(&state, payload)
}

fn run_handler(
    state: &AppState,
    payload: Result<Json<Vec<RequestRecord>>, JsonRejection>,
) -> Result<Json<Vec<PredictionRecord>>, ServiceError> {
    let Json(records) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "rejected malformed request");
        ServiceError::BadRequest(rejection.body_text())
    })?;

    let response = state.handler.handle(records).inspect_err(|err| {
        warn!(error = %err, "prediction failed");
    })?;
    Ok(Json(response))
}
