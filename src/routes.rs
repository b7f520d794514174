use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::client::ModelServerClient;
use crate::error::HotelResult;
use crate::extractors::ReviewExtractor;
use crate::prediction::PredictionResult;
use crate::ui::INDEX_HTML;

#[derive(Clone)]
pub struct AppState {
    pub model_client: ModelServerClient,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/health", get(handle_health))
        .route("/api/predict", post(handle_predict_request))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[axum_macros::debug_handler]
async fn handle_predict_request(
    State(state): State<AppState>,
    ReviewExtractor(review): ReviewExtractor,
) -> HotelResult<(StatusCode, Json<PredictionResult>)> {
    let prediction = state.model_client.predict(&review).await?;
    Ok((StatusCode::OK, Json(prediction)))
}

async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn handle_health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
