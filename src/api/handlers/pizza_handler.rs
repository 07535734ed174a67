//! Pizza handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::AppState;
use crate::domain::PizzaResponse;
use crate::errors::AppResult;

/// Create pizza routes
pub fn pizza_routes() -> Router<AppState> {
    Router::new().route("/", get(list_pizzas))
}

/// List all pizzas
#[utoipa::path(
    get,
    path = "/pizzas",
    tag = "Pizzas",
    responses(
        (status = 200, description = "All pizzas", body = [PizzaResponse])
    )
)]
pub async fn list_pizzas(State(state): State<AppState>) -> AppResult<Json<Vec<PizzaResponse>>> {
    let pizzas = state.pizza_service.list_pizzas().await?;

    Ok(Json(pizzas.into_iter().map(PizzaResponse::from).collect()))
}
