//! Choice endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::QuestionId;
use crate::http::server::AppState;
use crate::models::ChoiceResponse;

/// GET /choices/{question_id} - list the choices of a question
///
/// Responds 404 when the list would be empty, including for questions that
/// exist but have no choices.
async fn list_choices(
    State(state): State<Arc<AppState>>,
    QuestionId(question_id): QuestionId,
) -> Result<Json<Vec<ChoiceResponse>>, ApiError> {
    let choices = state.store.list_choices(question_id).await?;
    Ok(Json(choices.into_iter().map(ChoiceResponse::from).collect()))
}

/// Choice routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/choices/{question_id}", get(list_choices))
}
