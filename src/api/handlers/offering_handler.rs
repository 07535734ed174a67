//! Offering handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{CreateOffering, OfferingResponse};
use crate::errors::AppResult;

/// Create offering routes
pub fn offering_routes() -> Router<AppState> {
    Router::new().route("/", post(create_offering))
}

/// Create a menu offering for a restaurant
#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    tag = "Offerings",
    request_body = CreateOffering,
    responses(
        (status = 201, description = "Offering created", body = OfferingResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Restaurant or pizza not found")
    )
)]
pub async fn create_offering(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateOffering>,
) -> AppResult<(StatusCode, Json<OfferingResponse>)> {
    let offering = state.offering_service.create_offering(payload).await?;

    Ok((StatusCode::CREATED, Json(OfferingResponse::from(offering))))
}
