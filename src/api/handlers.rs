use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::RecommendationResponse;
use crate::services::recommendations;

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Ranked similar-user recommendations for one requester.
///
/// The id in the path is assumed to be already authenticated by the
/// surrounding application; no credentials are checked here. An unknown id
/// yields 404, and an empty list is a normal response for users with no
/// qualifying candidates yet.
pub async fn get_recommendations(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<RecommendationResponse>> {
    let response = recommendations::recommend_users(state.store.clone(), user_id).await?;
    Ok(Json(response))
}
