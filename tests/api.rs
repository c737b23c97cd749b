use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use contents_service::repository::DieselRepository;
use contents_service::routes;
use serde_json::{Value, json};

mod common;

macro_rules! init_app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(DieselRepository::new($test_db.pool())))
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn create_fetch_and_conflict() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/v1/contents")
        .set_json(json!({
            "categoryName": "News",
            "summarizeContent": "S",
            "content": "C"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["slug"], "news");
    assert_eq!(body["categoryName"], "News");
    assert_eq!(body["summarizeContent"], "S");

    let req = test::TestRequest::post()
        .uri("/api/v1/contents")
        .set_json(json!({ "categoryName": "NEWS", "content": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "category name already exists");

    let req = test::TestRequest::get()
        .uri("/api/v1/contents/slug/news")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/v1/contents").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[actix_web::test]
async fn update_and_delete() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    for name in ["News", "Sports"] {
        let req = test::TestRequest::post()
            .uri("/api/v1/contents")
            .set_json(json!({ "categoryName": name }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::put()
        .uri("/api/v1/contents/1")
        .set_json(json!({ "categoryName": "Sports" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::put()
        .uri("/api/v1/contents/1")
        .set_json(json!({ "categoryName": "World News", "content": "body" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["slug"], "world-news");
    assert_eq!(body["content"], "body");

    let req = test::TestRequest::delete()
        .uri("/api/v1/contents/1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "deleted": true }));

    let req = test::TestRequest::get().uri("/api/v1/contents/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "content with id 1 not found");
}

#[actix_web::test]
async fn invalid_input_is_bad_request() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/v1/contents")
        .set_json(json!({ "categoryName": "   " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());

    let req = test::TestRequest::post()
        .uri("/api/v1/contents")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(
        body["message"]
            .as_str()
            .is_some_and(|m| m.contains("categoryName"))
    );

    let req = test::TestRequest::put()
        .uri("/api/v1/contents/1")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());

    let req = test::TestRequest::delete()
        .uri("/api/v1/contents/7")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
