//! CRUD contract of the `/items` endpoints.

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, StatusCode};
use serde_json::{Value, json};

use crate::helpers::{BrokenStore, TestApp};

const REQUIRED: &str = "Name and description are required";

#[tokio::test]
async fn test_root_serves_welcome_text() {
    let app = TestApp::new();
    let (status, body) = app
        .send(Request::get("/").body(Body::empty()).unwrap())
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        std::str::from_utf8(&body).unwrap(),
        "Welcome to the CRUD application! Use the /items endpoint for CRUD operations."
    );
}

#[tokio::test]
async fn test_create_then_list_example() {
    let app = TestApp::new();

    let (status, created) = app
        .json(
            Method::POST,
            "/items",
            Some(json!({ "name": "Pen", "description": "Blue pen" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created, json!({ "id": 1, "name": "Pen", "description": "Blue pen" }));

    let (status, items) = app.json(Method::GET, "/items", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(items, json!([{ "id": 1, "name": "Pen", "description": "Blue pen" }]));
}

#[tokio::test]
async fn test_create_rejects_incomplete_bodies() {
    let app = TestApp::new();

    for body in [
        json!({}),
        json!({ "name": "Pen" }),
        json!({ "description": "Blue pen" }),
        json!({ "name": "", "description": "Blue pen" }),
        json!({ "name": "Pen", "description": "" }),
        json!({ "name": null, "description": "Blue pen" }),
        json!({ "name": 42, "description": "Blue pen" }),
        json!([]),
    ] {
        let (status, response) = app.json(Method::POST, "/items", Some(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(response, json!({ "error": REQUIRED }), "{body}");
    }

    let (_, items) = app.json(Method::GET, "/items", None).await;
    assert_eq!(items, json!([]));
    assert!(app.notifier.calls().is_empty());
}

#[tokio::test]
async fn test_create_without_json_content_type_is_a_validation_error() {
    let app = TestApp::new();

    let (status, body) = app.json(Method::POST, "/items", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": REQUIRED }));

    let request = Request::post("/items")
        .header(CONTENT_TYPE, "text/plain")
        .body(Body::from(r#"{"name":"Pen","description":"Blue pen"}"#))
        .unwrap();
    let (status, _) = app.send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let app = TestApp::new();
    let request = Request::post("/items")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name": "Pen", "#))
        .unwrap();

    let (status, body) = app.send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        serde_json::from_slice::<Value>(&body).unwrap(),
        json!({ "error": "Malformed JSON body" })
    );
}

#[tokio::test]
async fn test_list_contains_every_created_item() {
    let app = TestApp::new();
    let mut created = Vec::new();
    for i in 0..5 {
        created.push(app.create(&format!("item-{i}"), &format!("desc-{i}")).await);
    }

    let (status, items) = app.json(Method::GET, "/items", None).await;
    assert_eq!(status, StatusCode::OK);
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 5);
    for item in &created {
        assert!(items.contains(item), "{item} missing");
    }
}

#[tokio::test]
async fn test_update_changes_fields_and_keeps_id() {
    let app = TestApp::new();
    let pen = app.create("Pen", "Blue pen").await;
    let cup = app.create("Cup", "Coffee cup").await;

    let (status, updated) = app
        .json(
            Method::PUT,
            "/items/1",
            Some(json!({ "name": "Pencil", "description": "Graphite" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({ "id": 1, "name": "Pencil", "description": "Graphite" }));
    assert_eq!(updated["id"], pen["id"]);

    let (_, items) = app.json(Method::GET, "/items", None).await;
    assert_eq!(items, json!([updated, cup]));
}

#[tokio::test]
async fn test_update_rejects_incomplete_body() {
    let app = TestApp::new();
    app.create("Pen", "Blue pen").await;

    let (status, body) = app
        .json(Method::PUT, "/items/1", Some(json!({ "name": "Pencil" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": REQUIRED }));

    let (_, items) = app.json(Method::GET, "/items", None).await;
    assert_eq!(items, json!([{ "id": 1, "name": "Pen", "description": "Blue pen" }]));
}

#[tokio::test]
async fn test_update_of_unknown_id_returns_null() {
    let app = TestApp::new();
    let (status, body) = app
        .json(
            Method::PUT,
            "/items/404",
            Some(json!({ "name": "Pen", "description": "Blue pen" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_delete_removes_item() {
    let app = TestApp::new();
    let pen = app.create("Pen", "Blue pen").await;
    let cup = app.create("Cup", "Coffee cup").await;

    let (status, deleted) = app.json(Method::DELETE, "/items/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, pen);

    let (_, items) = app.json(Method::GET, "/items", None).await;
    assert_eq!(items, json!([cup]));
}

#[tokio::test]
async fn test_delete_of_unknown_id_returns_null() {
    let app = TestApp::new();
    let (status, body) = app.json(Method::DELETE, "/items/7", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_deleted_ids_are_not_reused() {
    let app = TestApp::new();
    app.create("Pen", "Blue pen").await;
    app.json(Method::DELETE, "/items/1", None).await;

    let again = app.create("Pen", "Blue pen").await;
    assert_eq!(again["id"], 2);
}

#[tokio::test]
async fn test_non_numeric_id_is_rejected() {
    let app = TestApp::new();

    let (status, body) = app.json(Method::DELETE, "/items/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid item id" }));

    let (status, _) = app
        .json(
            Method::PUT,
            "/items/99999999999",
            Some(json!({ "name": "Pen", "description": "Blue pen" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_store_failures_become_generic_500() {
    let app = TestApp::with_store(Arc::new(BrokenStore));
    let expected = json!({ "error": "Internal server error" });
    let fields = json!({ "name": "Pen", "description": "Blue pen" });

    for (method, uri, body) in [
        (Method::POST, "/items", Some(fields.clone())),
        (Method::GET, "/items", None),
        (Method::PUT, "/items/1", Some(fields.clone())),
        (Method::DELETE, "/items/1", None),
    ] {
        let (status, response) = app.json(method.clone(), uri, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{method} {uri}");
        assert_eq!(response, expected, "{method} {uri}");
    }
    assert!(app.notifier.calls().is_empty());
}

#[tokio::test]
async fn test_validation_precedes_store_access() {
    let app = TestApp::with_store(Arc::new(BrokenStore));
    let (status, body) = app.json(Method::POST, "/items", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": REQUIRED }));
}

#[tokio::test]
async fn test_health_reports_store_state() {
    let app = TestApp::new();
    let (status, body) = app.json(Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "up");

    let broken = TestApp::with_store(Arc::new(BrokenStore));
    let (status, body) = broken.json(Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["store"], "down");
}
