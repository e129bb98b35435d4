// src/handlers/answer.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;
use serde_json::Value;

use crate::{
    error::AppError, grading::grade, models::answer::GuessSubmission, store::AnswerStore,
};

/// Grades a guess against the answer key of today's featured sound test.
///
/// * Each of the four body fields must be a JSON string; anything else is a
///   400 naming the offending field, before any lookup happens.
/// * A missing answer key for the current UTC date is a 500 with a fixed
///   message (there is nothing the client can do differently).
/// * Grading itself is pure; see `crate::grading`.
pub async fn validate_answer(
    State(answer_store): State<Arc<dyn AnswerStore>>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let submission = GuessSubmission::from_body(&body)?;

    let today = Utc::now().date_naive();

    let answer_key = answer_store
        .answer_key_for(today)
        .await?
        .ok_or(AppError::AnswerKeyUnavailable)?;

    let report = grade(answer_key.entries(), &submission);

    Ok(Json(report))
}
