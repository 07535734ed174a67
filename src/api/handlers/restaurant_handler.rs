//! Restaurant handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::AppState;
use crate::domain::{RestaurantMenuResponse, RestaurantResponse};
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// Create restaurant routes
pub fn restaurant_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_restaurants))
        .route("/:id", get(get_restaurant).delete(delete_restaurant))
}

/// List all restaurants
#[utoipa::path(
    get,
    path = "/restaurants",
    tag = "Restaurants",
    responses(
        (status = 200, description = "All restaurants", body = [RestaurantResponse])
    )
)]
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<RestaurantResponse>>> {
    let restaurants = state.restaurant_service.list_restaurants().await?;

    Ok(Json(
        restaurants
            .into_iter()
            .map(RestaurantResponse::from)
            .collect(),
    ))
}

/// Get a restaurant with its menu offerings
#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    tag = "Restaurants",
    params(
        ("id" = i32, Path, description = "Restaurant id")
    ),
    responses(
        (status = 200, description = "Restaurant with its offerings", body = RestaurantMenuResponse),
        (status = 404, description = "Restaurant not found")
    )
)]
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<RestaurantMenuResponse>> {
    let (restaurant, menu) = state.restaurant_service.get_restaurant(id).await?;

    Ok(Json(RestaurantMenuResponse::new(restaurant, menu)))
}

/// Delete a restaurant and its offerings
#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    tag = "Restaurants",
    params(
        ("id" = i32, Path, description = "Restaurant id")
    ),
    responses(
        (status = 200, description = "Restaurant deleted", body = MessageResponse),
        (status = 404, description = "Restaurant not found")
    )
)]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.restaurant_service.delete_restaurant(id).await?;

    Ok(Json(MessageResponse::new("Restaurant deleted successfully")))
}
