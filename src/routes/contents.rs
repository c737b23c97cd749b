use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::contents::{ContentDto, DeletedDto};
use crate::forms::contents::{ContentForm, ContentFormPayload};
use crate::repository::DieselRepository;
use crate::routes::{bad_request, service_error_response};
use crate::services::contents::ContentRecordManager;

#[post("/contents")]
pub async fn create_content(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ContentForm>,
) -> impl Responder {
    let payload: ContentFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return bad_request(e),
    };

    match ContentRecordManager::new(repo.get_ref()).create(payload.into()) {
        Ok(content) => HttpResponse::Created().json(ContentDto::from(content)),
        Err(err) => service_error_response(err),
    }
}

#[get("/contents")]
pub async fn list_contents(repo: web::Data<DieselRepository>) -> impl Responder {
    match ContentRecordManager::new(repo.get_ref()).get_all() {
        Ok(contents) => HttpResponse::Ok().json(
            contents
                .into_iter()
                .map(ContentDto::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => service_error_response(err),
    }
}

#[get("/contents/slug/{slug}")]
pub async fn get_content_by_slug(
    slug: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match ContentRecordManager::new(repo.get_ref()).get_by_slug(&slug) {
        Ok(content) => HttpResponse::Ok().json(ContentDto::from(content)),
        Err(err) => service_error_response(err),
    }
}

#[get("/contents/{content_id}")]
pub async fn get_content(
    content_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match ContentRecordManager::new(repo.get_ref()).get_by_id(content_id.into_inner()) {
        Ok(content) => HttpResponse::Ok().json(ContentDto::from(content)),
        Err(err) => service_error_response(err),
    }
}

#[put("/contents/{content_id}")]
pub async fn update_content(
    content_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ContentForm>,
) -> impl Responder {
    let payload: ContentFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return bad_request(e),
    };

    match ContentRecordManager::new(repo.get_ref()).update(content_id.into_inner(), payload.into())
    {
        Ok(content) => HttpResponse::Ok().json(ContentDto::from(content)),
        Err(err) => service_error_response(err),
    }
}

#[delete("/contents/{content_id}")]
pub async fn delete_content(
    content_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match ContentRecordManager::new(repo.get_ref()).delete(content_id.into_inner()) {
        Ok(deleted) => HttpResponse::Ok().json(DeletedDto { deleted }),
        Err(err) => service_error_response(err),
    }
}
