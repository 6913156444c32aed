//! Notification side effects of the mutating endpoints.

use axum::http::{Method, StatusCode};
use serde_json::{Value, json};

use itemhub_entity::{Item, ItemAction};

use crate::helpers::{TestApp, unreachable_brevo};

fn item(id: i32, name: &str, description: &str) -> Option<Item> {
    Some(Item {
        id,
        name: name.to_string(),
        description: description.to_string(),
    })
}

#[tokio::test]
async fn test_each_mutation_sends_one_notification() {
    let app = TestApp::new();

    app.create("Pen", "Blue pen").await;
    app.json(
        Method::PUT,
        "/items/1",
        Some(json!({ "name": "Pen", "description": "Red pen" })),
    )
    .await;
    app.json(Method::GET, "/items", None).await;
    app.json(Method::DELETE, "/items/1", None).await;

    assert_eq!(
        app.notifier.calls(),
        vec![
            (ItemAction::Create, item(1, "Pen", "Blue pen")),
            (ItemAction::Update, item(1, "Pen", "Red pen")),
            (ItemAction::Delete, item(1, "Pen", "Red pen")),
        ]
    );
}

#[tokio::test]
async fn test_unmatched_update_and_delete_still_notify() {
    let app = TestApp::new();
    let updated = app
        .json(
            Method::PUT,
            "/items/5",
            Some(json!({ "name": "Pen", "description": "Blue pen" })),
        )
        .await;
    let deleted = app.json(Method::DELETE, "/items/5", None).await;

    assert_eq!(updated, (StatusCode::OK, Value::Null));
    assert_eq!(deleted, (StatusCode::OK, Value::Null));
    assert_eq!(
        app.notifier.calls(),
        vec![(ItemAction::Update, None), (ItemAction::Delete, None)]
    );
}

#[tokio::test]
async fn test_invalid_update_sends_nothing() {
    let app = TestApp::new();
    app.json(Method::PUT, "/items/5", Some(json!({ "name": "Pen" })))
        .await;

    assert!(app.notifier.calls().is_empty());
}

#[tokio::test]
async fn test_email_failure_does_not_change_responses() {
    let healthy = TestApp::new();
    let failing = TestApp::with_notifier(unreachable_brevo().await);

    let steps = [
        (
            Method::POST,
            "/items",
            Some(json!({ "name": "Pen", "description": "Blue pen" })),
        ),
        (
            Method::PUT,
            "/items/1",
            Some(json!({ "name": "Pen", "description": "Red pen" })),
        ),
        (Method::GET, "/items", None),
        (Method::DELETE, "/items/1", None),
        (Method::GET, "/items", None),
    ];

    for (method, uri, body) in steps {
        let expected = healthy.json(method.clone(), uri, body.clone()).await;
        let actual = failing.json(method.clone(), uri, body).await;
        assert_eq!(actual.0, StatusCode::OK, "{method} {uri}");
        assert_eq!(actual, expected, "{method} {uri}");
    }
}
