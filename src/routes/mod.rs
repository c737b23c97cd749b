use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};

use crate::dto::contents::ErrorDto;
use crate::services::ServiceError;

pub mod contents;

/// Register every JSON API route under `/api/v1`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(json_config())
            .service(contents::create_content)
            .service(contents::list_contents)
            .service(contents::get_content_by_slug)
            .service(contents::get_content)
            .service(contents::update_content)
            .service(contents::delete_content),
    );
}

/// Malformed or incomplete JSON bodies answer 400 with a message body.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = bad_request(&err);
        InternalError::from_response(err, response).into()
    })
}

/// Translate a service failure into an HTTP answer.
pub fn service_error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound(message) => HttpResponse::NotFound().json(ErrorDto { message }),
        ServiceError::Conflict(message) => HttpResponse::Conflict().json(ErrorDto { message }),
        ServiceError::Repository(e) => {
            log::error!("Record store failure: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn bad_request(message: impl ToString) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorDto {
        message: message.to_string(),
    })
}
