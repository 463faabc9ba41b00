use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;

use crate::{app_state::AppState, auth::AuthenticatedUser, errors::AppError};

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    /// Option indices aligned with question positions; `null` marks a
    /// skipped question, a shorter array leaves the tail unanswered.
    pub answers: Vec<Option<i32>>,
}

#[get("/quizzes")]
pub async fn list_quizzes(
    state: web::Data<AppState>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let summaries = state.quiz_service.list_summaries().await?;
    Ok(HttpResponse::Ok().json(summaries))
}

#[get("/quizzes/{id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<i32>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/quizzes/{id}/submit")]
pub async fn submit_quiz(
    state: web::Data<AppState>,
    id: web::Path<i32>,
    request: web::Json<SubmitRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let result = state
        .quiz_service
        .submit(id.into_inner(), auth.0.id, &request.answers)
        .await?;
    Ok(HttpResponse::Ok().json(result))
}
