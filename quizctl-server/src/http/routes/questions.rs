//! Question endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::QuestionId;
use crate::http::server::AppState;
use crate::models::{NewQuestion, QuestionResponse};

/// POST /questions/ - create a question with its choices
async fn create_question(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewQuestion>, JsonRejection>,
) -> Result<(StatusCode, Json<QuestionResponse>), ApiError> {
    let Json(new) = payload?;
    let question = state.store.create_question(new).await?;

    tracing::info!(
        question_id = question.id,
        choices = question.choices.len(),
        "question created"
    );
    Ok((StatusCode::CREATED, Json(QuestionResponse::from(question))))
}

/// GET /questions/{question_id} - get a question with its choices
async fn get_question(
    State(state): State<Arc<AppState>>,
    QuestionId(id): QuestionId,
) -> Result<Json<QuestionResponse>, ApiError> {
    let question = state.store.get_question(id).await?;
    Ok(Json(QuestionResponse::from(question)))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions/", post(create_question))
        .route("/questions", post(create_question))
        .route("/questions/{question_id}", get(get_question))
}
