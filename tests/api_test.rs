//! Integration tests for the HTTP surface.
//!
//! Each test builds the full router over a fresh in-memory SQLite
//! database, so requests exercise the real handlers, services, and
//! store. A single pooled connection keeps the in-memory database
//! alive across the test.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};
use serde_json::{json, Value};
use tower::ServiceExt;

use pizzeria_api::api::{create_router, AppState};
use pizzeria_api::config::Config;
use pizzeria_api::infra::repositories::entities::{pizza, restaurant, restaurant_pizza};
use pizzeria_api::infra::Database;

fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
    }
}

async fn test_app() -> (Router, Arc<Database>) {
    let db = Arc::new(Database::connect(&test_config()).await);
    let state = AppState::from_config(db.clone());
    (create_router(state), db)
}

async fn seed_restaurant(db: &Database, name: &str, address: &str) -> i32 {
    restaurant::ActiveModel {
        name: Set(name.to_string()),
        address: Set(address.to_string()),
        ..Default::default()
    }
    .insert(db.connection())
    .await
    .expect("insert restaurant")
    .id
}

async fn seed_pizza(db: &Database, name: &str, ingredients: &str) -> i32 {
    pizza::ActiveModel {
        name: Set(name.to_string()),
        ingredients: Set(ingredients.to_string()),
        ..Default::default()
    }
    .insert(db.connection())
    .await
    .expect("insert pizza")
    .id
}

async fn seed_offering(db: &Database, restaurant_id: i32, pizza_id: i32, price: f64) -> i32 {
    restaurant_pizza::ActiveModel {
        restaurant_id: Set(restaurant_id),
        pizza_id: Set(pizza_id),
        price: Set(price),
        ..Default::default()
    }
    .insert(db.connection())
    .await
    .expect("insert offering")
    .id
}

async fn count_offerings(db: &Database) -> u64 {
    restaurant_pizza::Entity::find()
        .count(db.connection())
        .await
        .expect("count offerings")
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("send request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("parse json body")
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// =============================================================================
// Restaurant Endpoints
// =============================================================================

#[tokio::test]
async fn test_list_restaurants_empty() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, get("/restaurants")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_list_restaurants_returns_all() {
    let (app, db) = test_app().await;
    seed_restaurant(&db, "Sottocasa NYC", "298 Atlantic Ave").await;
    seed_restaurant(&db, "PizzArte", "69 W 55th St").await;

    let (status, body) = send(&app, get("/restaurants")).await;

    assert_eq!(status, StatusCode::OK);
    let restaurants = body.as_array().expect("array body");
    assert_eq!(restaurants.len(), 2);
    assert_eq!(restaurants[0]["name"], "Sottocasa NYC");
    assert_eq!(restaurants[0]["address"], "298 Atlantic Ave");
    assert!(restaurants[0]["id"].is_number());
    // Summary shape carries no offerings
    assert!(restaurants[0].get("restaurant_pizzas").is_none());
}

#[tokio::test]
async fn test_get_restaurant_unknown_returns_404() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, get("/restaurants/9999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Restaurant not found"}));
}

#[tokio::test]
async fn test_get_restaurant_includes_menu() {
    let (app, db) = test_app().await;
    let r = seed_restaurant(&db, "Sottocasa NYC", "298 Atlantic Ave").await;
    let p1 = seed_pizza(&db, "Emma", "Cheese, Tomato Sauce, Basil").await;
    let p2 = seed_pizza(&db, "Geri", "Cheese, Tomato Sauce, Pepperoni").await;
    let o1 = seed_offering(&db, r, p1, 12.5).await;
    seed_offering(&db, r, p2, 15.0).await;

    let (status, body) = send(&app, get(&format!("/restaurants/{}", r))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], r);
    assert_eq!(body["name"], "Sottocasa NYC");
    assert_eq!(body["address"], "298 Atlantic Ave");

    let menu = body["restaurant_pizzas"].as_array().expect("menu array");
    assert_eq!(menu.len(), 2);

    let first = menu
        .iter()
        .find(|item| item["id"] == o1)
        .expect("first offering present");
    assert_eq!(first["price"], 12.5);
    assert_eq!(first["pizza"]["id"], p1);
    assert_eq!(first["pizza"]["name"], "Emma");
    assert_eq!(first["pizza"]["ingredients"], "Cheese, Tomato Sauce, Basil");
}

#[tokio::test]
async fn test_get_restaurant_without_offerings_has_empty_menu() {
    let (app, db) = test_app().await;
    let r = seed_restaurant(&db, "Kiki's Pizza", "239 16th St").await;

    let (status, body) = send(&app, get(&format!("/restaurants/{}", r))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["restaurant_pizzas"], json!([]));
}

#[tokio::test]
async fn test_delete_restaurant_unknown_returns_404() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, delete("/restaurants/9999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Restaurant not found"}));
}

#[tokio::test]
async fn test_delete_restaurant_removes_its_offerings() {
    let (app, db) = test_app().await;
    let r1 = seed_restaurant(&db, "Sottocasa NYC", "298 Atlantic Ave").await;
    let r2 = seed_restaurant(&db, "PizzArte", "69 W 55th St").await;
    let p = seed_pizza(&db, "Emma", "Cheese, Tomato Sauce, Basil").await;
    seed_offering(&db, r1, p, 12.5).await;
    seed_offering(&db, r1, p, 14.0).await;
    seed_offering(&db, r2, p, 16.0).await;

    let (status, body) = send(&app, delete(&format!("/restaurants/{}", r1))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Restaurant deleted successfully"}));

    // The restaurant is gone
    let (status, _) = send(&app, get(&format!("/restaurants/{}", r1))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Only the other restaurant's offering survives
    assert_eq!(count_offerings(&db).await, 1);
}

// =============================================================================
// Pizza Endpoints
// =============================================================================

#[tokio::test]
async fn test_list_pizzas_empty() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, get("/pizzas")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_list_pizzas_returns_all() {
    let (app, db) = test_app().await;
    let p = seed_pizza(&db, "Emma", "Cheese, Tomato Sauce, Basil").await;
    seed_pizza(&db, "Geri", "Cheese, Tomato Sauce, Pepperoni").await;

    let (status, body) = send(&app, get("/pizzas")).await;

    assert_eq!(status, StatusCode::OK);
    let pizzas = body.as_array().expect("array body");
    assert_eq!(pizzas.len(), 2);
    assert_eq!(pizzas[0]["id"], p);
    assert_eq!(pizzas[0]["name"], "Emma");
    assert_eq!(pizzas[0]["ingredients"], "Cheese, Tomato Sauce, Basil");
}

// =============================================================================
// Offering Endpoint
// =============================================================================

#[tokio::test]
async fn test_create_offering_success() {
    let (app, db) = test_app().await;
    let r = seed_restaurant(&db, "Sottocasa NYC", "298 Atlantic Ave").await;
    let p = seed_pizza(&db, "Emma", "Cheese, Tomato Sauce, Basil").await;

    let (status, body) = send(
        &app,
        post_json(
            "/restaurant_pizzas",
            json!({"restaurant_id": r, "pizza_id": p, "price": 9.99}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_number());
    assert_eq!(body["restaurant_id"], r);
    assert_eq!(body["pizza_id"], p);
    assert_eq!(body["price"], 9.99);
}

#[tokio::test]
async fn test_create_offering_unknown_restaurant_returns_404() {
    let (app, db) = test_app().await;
    let p = seed_pizza(&db, "Emma", "Cheese, Tomato Sauce, Basil").await;

    let (status, body) = send(
        &app,
        post_json(
            "/restaurant_pizzas",
            json!({"restaurant_id": 9999, "pizza_id": p, "price": 9.99}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Restaurant or pizza not found"}));
    assert_eq!(count_offerings(&db).await, 0);
}

#[tokio::test]
async fn test_create_offering_unknown_pizza_returns_404() {
    let (app, db) = test_app().await;
    let r = seed_restaurant(&db, "Sottocasa NYC", "298 Atlantic Ave").await;

    let (status, body) = send(
        &app,
        post_json(
            "/restaurant_pizzas",
            json!({"restaurant_id": r, "pizza_id": 9999, "price": 9.99}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Restaurant or pizza not found"}));
    assert_eq!(count_offerings(&db).await, 0);
}

#[tokio::test]
async fn test_create_offering_negative_price_returns_400() {
    let (app, db) = test_app().await;
    let r = seed_restaurant(&db, "Sottocasa NYC", "298 Atlantic Ave").await;
    let p = seed_pizza(&db, "Emma", "Cheese, Tomato Sauce, Basil").await;

    let (status, body) = send(
        &app,
        post_json(
            "/restaurant_pizzas",
            json!({"restaurant_id": r, "pizza_id": p, "price": -1.0}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "price must not be negative");
    assert_eq!(count_offerings(&db).await, 0);
}

#[tokio::test]
async fn test_create_offering_missing_field_returns_400() {
    let (app, db) = test_app().await;
    let r = seed_restaurant(&db, "Sottocasa NYC", "298 Atlantic Ave").await;

    let (status, body) = send(
        &app,
        post_json("/restaurant_pizzas", json!({"restaurant_id": r})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert_eq!(count_offerings(&db).await, 0);
}

// =============================================================================
// Ambient Endpoints
// =============================================================================

#[tokio::test]
async fn test_root_returns_welcome_message() {
    let (app, _db) = test_app().await;

    let response = app.oneshot(get("/")).await.expect("send request");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let text = String::from_utf8(bytes.to_vec()).expect("utf8 body");
    assert!(text.contains("Pizzeria"));
}

#[tokio::test]
async fn test_health_reports_database_status() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}
