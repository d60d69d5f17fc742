//! HTTP-level integration tests for the `/api/items` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener, over the in-memory store.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, delete, get, post_json, put_json};
use itemboard_db::store::MemoryItemStore;
use serde_json::json;
use tower::ServiceExt;

async fn create_item(store: &Arc<MemoryItemStore>, name: &str) -> serde_json::Value {
    let app = common::build_test_app(store.clone());
    let response = post_json(
        app,
        "/api/items",
        json!({
            "name": name,
            "imageUrl": format!("http://x/{name}.png"),
            "driveUrl": format!("http://drive/{name}"),
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Create / get
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_returns_201_with_generated_fields() {
    let store = common::new_store();
    let json = create_item(&store, "Doc1").await;

    assert_eq!(json["name"], "Doc1");
    assert_eq!(json["imageUrl"], "http://x/Doc1.png");
    assert_eq!(json["driveUrl"], "http://drive/Doc1");
    assert!(json["id"].is_string());
    assert!(json["createdAt"].is_string());
}

#[tokio::test]
async fn create_then_get_returns_same_item() {
    let store = common::new_store();
    let created = create_item(&store, "Doc1").await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(store);
    let response = get(app, &format!("/api/items/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[tokio::test]
async fn create_trims_whitespace() {
    let store = common::new_store();
    let app = common::build_test_app(store);
    let response = post_json(
        app,
        "/api/items",
        json!({"name": "  Doc1  ", "imageUrl": " http://x/1.png", "driveUrl": "http://drive/1 "}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Doc1");
    assert_eq!(json["imageUrl"], "http://x/1.png");
    assert_eq!(json["driveUrl"], "http://drive/1");
}

#[tokio::test]
async fn create_without_name_returns_400_and_persists_nothing() {
    let store = common::new_store();
    let app = common::build_test_app(store.clone());
    let response = post_json(
        app,
        "/api/items",
        json!({"imageUrl": "http://x/1.png", "driveUrl": "http://drive/1"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "All fields are required");

    let app = common::build_test_app(store);
    let listed = body_json(get(app, "/api/items").await).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn create_with_blank_field_returns_400() {
    let app = common::build_test_app(common::new_store());
    let response = post_json(
        app,
        "/api/items",
        json!({"name": "Doc1", "imageUrl": "   ", "driveUrl": "http://drive/1"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_with_malformed_body_returns_400_envelope() {
    let app = common::build_test_app(common::new_store());
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/items")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn get_unknown_id_returns_404() {
    let app = common::build_test_app(common::new_store());
    let response = get(app, "/api/items/01890a5d-ac96-774b-bcce-b302099a8057").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Item not found");
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn get_malformed_id_returns_404() {
    let app = common::build_test_app(common::new_store());
    let response = get(app, "/api/items/not-an-id").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_returns_newest_first() {
    let store = common::new_store();
    let a = create_item(&store, "A").await;
    let b = create_item(&store, "B").await;

    let app = common::build_test_app(store);
    let response = get(app, "/api/items").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![b["id"].as_str().unwrap(), a["id"].as_str().unwrap()]);
}

#[tokio::test]
async fn list_with_store_offline_returns_500_with_message() {
    let store = common::new_store();
    store.set_available(false);
    let app = common::build_test_app(store);

    let response = get(app, "/api/items").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Error fetching items");
    assert_eq!(json["code"], "INTERNAL_ERROR");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_changes_fields_but_not_id_or_created_at() {
    let store = common::new_store();
    let created = create_item(&store, "Doc1").await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(store);
    let response = put_json(
        app,
        &format!("/api/items/{id}"),
        json!({"name": "Doc1-edited", "imageUrl": "http://x/2.png", "driveUrl": "http://drive/2"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], created["id"]);
    assert_eq!(json["createdAt"], created["createdAt"]);
    assert_eq!(json["name"], "Doc1-edited");
    assert_eq!(json["imageUrl"], "http://x/2.png");
    assert_eq!(json["driveUrl"], "http://drive/2");
}

#[tokio::test]
async fn update_with_partial_body_keeps_other_fields() {
    let store = common::new_store();
    let created = create_item(&store, "Doc1").await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(store);
    let response = put_json(app, &format!("/api/items/{id}"), json!({"name": "Renamed"})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Renamed");
    assert_eq!(json["driveUrl"], created["driveUrl"]);
}

#[tokio::test]
async fn update_with_blank_field_returns_400() {
    let store = common::new_store();
    let created = create_item(&store, "Doc1").await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(store);
    let response = put_json(app, &format!("/api/items/{id}"), json!({"name": " "})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn update_unknown_id_returns_404() {
    let app = common::build_test_app(common::new_store());
    let response = put_json(
        app,
        "/api/items/01890a5d-ac96-774b-bcce-b302099a8057",
        json!({"name": "x", "imageUrl": "http://x", "driveUrl": "http://d"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_returns_confirmation_and_subsequent_get_404s() {
    let store = common::new_store();
    let created = create_item(&store, "Doc1").await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(store.clone());
    let response = delete(app, &format!("/api/items/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Item deleted successfully");
    assert_eq!(json["item"], created);

    let app = common::build_test_app(store);
    let response = get(app, &format!("/api/items/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_id_returns_404() {
    let app = common::build_test_app(common::new_store());
    let response = delete(app, "/api/items/01890a5d-ac96-774b-bcce-b302099a8057").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Full lifecycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_edit_delete_lifecycle() {
    let store = common::new_store();

    let app = common::build_test_app(store.clone());
    let response = post_json(
        app,
        "/api/items",
        json!({"name": "Doc1", "imageUrl": "http://x/1.png", "driveUrl": "http://drive/1"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(store.clone());
    let response = put_json(
        app,
        &format!("/api/items/{id}"),
        json!({"name": "Doc1-edited", "imageUrl": "http://x/1.png", "driveUrl": "http://drive/1"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["name"], "Doc1-edited");
    assert_eq!(updated["id"], id.as_str());

    let app = common::build_test_app(store.clone());
    let response = delete(app, &format!("/api/items/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(store);
    let response = get(app, &format!("/api/items/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
