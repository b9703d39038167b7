use actix_web::{web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{CreateQuestionRequest, PageParams, SearchQuestionsRequest},
};

pub async fn get_questions(
    state: web::Data<AppState>,
    query: web::Query<PageParams>,
) -> Result<HttpResponse, AppError> {
    let response = state.question_service.list_questions(query.page()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Any failure, an unknown id included, answers 400.
pub async fn delete_question(
    state: web::Data<AppState>,
    question_id: web::Path<i64>,
    query: web::Query<PageParams>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .question_service
        .delete_question(question_id.into_inner(), query.page())
        .await
        .map_err(|e| e.reclassify(AppError::BadRequest))?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn create_question(
    state: web::Data<AppState>,
    query: web::Query<PageParams>,
    request: web::Json<CreateQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .question_service
        .create_question(request.into_inner(), query.page())
        .await
        .map_err(|e| e.reclassify(AppError::Unprocessable))?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn search_questions(
    state: web::Data<AppState>,
    query: web::Query<PageParams>,
    request: web::Json<SearchQuestionsRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .question_service
        .search_questions(request.into_inner(), query.page())
        .await
        .map_err(|e| e.reclassify(AppError::Unprocessable))?;
    Ok(HttpResponse::Ok().json(response))
}
