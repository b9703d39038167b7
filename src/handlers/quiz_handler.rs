use actix_web::{web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::request::QuizRequest};

pub async fn play_quiz(
    state: web::Data<AppState>,
    request: web::Json<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .quiz_service
        .next_question(request.into_inner())
        .await
        .map_err(|e| e.reclassify(AppError::InternalError))?;
    Ok(HttpResponse::Ok().json(response))
}
