pub mod category_handler;
pub mod health_handler;
pub mod question_handler;
pub mod quiz_handler;

use actix_web::{error, web, HttpRequest, HttpResponse};

use crate::{app_state::AppState, errors::AppError};

pub use category_handler::{get_categories, get_category_questions};
pub use health_handler::{health_check, health_check_ready};
pub use question_handler::{create_question, delete_question, get_questions, search_questions};
pub use quiz_handler::play_quiz;

/// Registers the API, the extractor error mapping and the JSON fallbacks for
/// unknown paths and unsupported methods.
pub fn configure(state: web::Data<AppState>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(state)
            .app_data(
                web::JsonConfig::default()
                    .content_type_required(false)
                    .error_handler(json_error_handler),
            )
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .service(health_check)
            .service(health_check_ready)
            .service(
                web::resource("/categories")
                    .route(web::get().to(get_categories))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource("/categories/{category_id}/questions")
                    .route(web::get().to(get_category_questions))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource("/questions")
                    .route(web::get().to(get_questions))
                    .route(web::post().to(create_question))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource("/questions/search")
                    .route(web::post().to(search_questions))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource("/questions/{question_id}")
                    .route(web::delete().to(delete_question))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource("/quizzes")
                    .route(web::post().to(play_quiz))
                    .default_service(web::to(method_not_allowed)),
            )
            .default_service(web::to(not_found));
    }
}

async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound(format!("no route for {}", req.path())))
}

async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed(format!(
        "{} {}",
        req.method(),
        req.path()
    )))
}

fn json_error_handler(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected body for {}: {}", req.path(), err);
    AppError::Unprocessable(err.to_string()).into()
}

fn path_error_handler(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    AppError::NotFound(format!("{}: {}", req.path(), err)).into()
}
