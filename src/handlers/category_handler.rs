use actix_web::{web, HttpResponse};

use crate::{app_state::AppState, errors::AppError};

pub async fn get_categories(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let response = state.category_service.list_categories().await?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn get_category_questions(
    state: web::Data<AppState>,
    category_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .question_service
        .questions_in_category(category_id.into_inner())
        .await
        .map_err(|e| match e {
            AppError::NotFound(_) => e,
            other => other.reclassify(AppError::Unprocessable),
        })?;
    Ok(HttpResponse::Ok().json(response))
}
