//! API integration tests

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use bookshelf_server::{api, config::AppConfig, AppState};
use reqwest::Client;
use serde_json::{json, Value};
use tower::ServiceExt;

const BASE_URL: &str = "http://localhost:8080";

fn app() -> Router {
    api::router(AppState::new(&AppConfig::default()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, String) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            request = request.header(CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn send_raw(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn dune() -> Value {
    json!({"author": "Herbert", "isbn": "111", "title": "Dune", "pages": 412})
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["shelves"], 4);
    assert_eq!(body["books"], 0);

    send(&app, Method::POST, "/shelves/A-G/111", Some(dune())).await;
    let (_, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap()["books"], 1);
}

#[tokio::test]
async fn test_list_shelves() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/shelves", None).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<String> = serde_json::from_str(&body).unwrap();
    assert_eq!(ids, vec!["A-G", "H-J", "K-T", "U-Z"]);
}

#[tokio::test]
async fn test_book_lifecycle() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/shelves/A-G/111", Some(dune())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, "Success!");

    let (status, body) = send(&app, Method::GET, "/shelves/A-G/111", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), dune());

    let mut patched = dune();
    patched["pages"] = json!(500);
    let (status, _) = send(&app, Method::PATCH, "/shelves/A-G/111", Some(patched.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, "/shelves/A-G/111", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap()["pages"], 500);

    let (status, body) = send(&app, Method::GET, "/shelves/A-G", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!([patched]));

    let (status, body) = send(&app, Method::DELETE, "/shelves/A-G/111", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Deleted!");

    let (status, _) = send(&app, Method::GET, "/shelves/A-G/111", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // listing is unaffected by contents
    let (_, body) = send(&app, Method::GET, "/shelves", None).await;
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!(["A-G", "H-J", "K-T", "U-Z"]));
}

#[tokio::test]
async fn test_get_book_distinguishes_shelf_and_isbn() {
    let app = app();

    let (status, shelf_msg) = send(&app, Method::GET, "/shelves/A-B/111", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, isbn_msg) = send(&app, Method::GET, "/shelves/A-G/111", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(shelf_msg, "Shelf not found: A-B");
    assert_eq!(isbn_msg, "Book not found: 111");
}

#[tokio::test]
async fn test_malformed_shelf_ids() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/shelves/ABCD", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Invalid id (length != 3)");

    let (status, body) = send(&app, Method::GET, "/shelves/A_G", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Invalid id (separator != '-')");
}

#[tokio::test]
async fn test_create_rejects_bad_input() {
    let app = app();

    let (status, _) = send_raw(&app, Method::POST, "/shelves/A-G/111", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/shelves/A-G/111",
        Some(json!({"author": "x", "isbn": "111", "title": "t", "pages": -1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // shelf resolution happens before the body is looked at
    let (status, _) = send_raw(&app, Method::POST, "/shelves/Q-Q/111", "{not json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, Method::GET, "/shelves/A-G", None).await;
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn test_partial_bodies_fill_zero_values() {
    let app = app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/shelves/A-G/1",
        Some(json!({"isbn": "1", "title": "Dune"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&app, Method::GET, "/shelves/A-G/1", None).await;
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({"author": "", "isbn": "1", "title": "Dune", "pages": 0})
    );

    // a partial update still replaces the whole book
    let (status, _) = send(
        &app,
        Method::PATCH,
        "/shelves/A-G/1",
        Some(json!({"isbn": "1", "pages": 412})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/shelves/A-G/1", None).await;
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({"author": "", "isbn": "1", "title": "", "pages": 412})
    );
}

#[tokio::test]
async fn test_page_count_beyond_u32() {
    let app = app();
    let book = json!({"author": "a", "isbn": "2", "title": "t", "pages": 5_000_000_000u64});

    let (status, _) = send(&app, Method::POST, "/shelves/K-T/2", Some(book.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&app, Method::GET, "/shelves/K-T/2", None).await;
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), book);
}

#[tokio::test]
async fn test_create_isbn_mismatch_does_not_insert() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/shelves/K-T/999", Some(dune())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with("ISBN doesn't equal path param"));

    let (_, body) = send(&app, Method::GET, "/shelves/K-T", None).await;
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn test_update_and_delete_missing_book() {
    let app = app();

    let (status, body) = send(&app, Method::PATCH, "/shelves/U-Z/42", Some(dune())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Book not found: 42");

    let (status, body) = send(&app, Method::DELETE, "/shelves/U-Z/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Book not found: 42");

    let (status, body) = send(&app, Method::DELETE, "/shelves/U-X/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Shelf not found: U-X");
}

#[tokio::test]
async fn test_duplicate_isbn_policy() {
    let app = app();
    for _ in 0..2 {
        let (status, _) = send(&app, Method::POST, "/shelves/H-J/111", Some(dune())).await;
        assert_eq!(status, StatusCode::CREATED);
    }
    let (_, body) = send(&app, Method::GET, "/shelves/H-J", None).await;
    assert_eq!(serde_json::from_str::<Vec<Value>>(&body).unwrap().len(), 2);

    let mut config = AppConfig::default();
    config.catalog.reject_duplicate_isbn = true;
    let strict = api::router(AppState::new(&config));

    let (status, _) = send(&strict, Method::POST, "/shelves/H-J/111", Some(dune())).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(&strict, Method::POST, "/shelves/H-J/111", Some(dune())).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    let doc: Value = serde_json::from_str(&body).unwrap();
    assert!(doc["paths"]["/shelves/{id}/{isbn}"].is_object());
}

#[tokio::test]
#[ignore] // Run against a live server with: cargo test -- --ignored
async fn test_live_round_trip() {
    let client = Client::new();

    let shelves: Vec<String> = client
        .get(format!("{}/shelves", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    for shelf in &shelves {
        let isbns: Vec<String> = (0..10).map(|n| format!("live-{}-{}", shelf, n)).collect();

        for isbn in &isbns {
            let response = client
                .post(format!("{}/shelves/{}/{}", BASE_URL, shelf, isbn))
                .json(&json!({"author": "Author", "isbn": isbn, "title": "Title", "pages": 200}))
                .send()
                .await
                .expect("Failed to send request");
            assert_eq!(response.status(), 201);
        }

        for isbn in &isbns {
            let response = client
                .patch(format!("{}/shelves/{}/{}", BASE_URL, shelf, isbn))
                .json(&json!({"author": "rohtuA", "isbn": isbn, "title": "Title", "pages": 200}))
                .send()
                .await
                .expect("Failed to send request");
            assert!(response.status().is_success());

            let body: Value = client
                .get(format!("{}/shelves/{}/{}", BASE_URL, shelf, isbn))
                .send()
                .await
                .expect("Failed to send request")
                .json()
                .await
                .expect("Failed to parse response");
            assert_eq!(body["author"], "rohtuA");
        }

        for isbn in &isbns {
            let response = client
                .delete(format!("{}/shelves/{}/{}", BASE_URL, shelf, isbn))
                .send()
                .await
                .expect("Failed to send request");
            assert!(response.status().is_success());
        }
    }
}
