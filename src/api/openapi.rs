//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{offering_handler, pizza_handler, restaurant_handler};
use crate::domain::{
    CreateOffering, MenuItemResponse, OfferingResponse, PizzaResponse, RestaurantMenuResponse,
    RestaurantResponse,
};
use crate::types::MessageResponse;

/// OpenAPI documentation for the Pizzeria Catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pizzeria Catalog API",
        version = "0.1.0",
        description = "CRUD catalog of restaurants, pizzas, and priced menu offerings",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5555", description = "Local development server")
    ),
    paths(
        // Restaurant endpoints
        restaurant_handler::list_restaurants,
        restaurant_handler::get_restaurant,
        restaurant_handler::delete_restaurant,
        // Pizza endpoints
        pizza_handler::list_pizzas,
        // Offering endpoints
        offering_handler::create_offering,
    ),
    components(
        schemas(
            RestaurantResponse,
            RestaurantMenuResponse,
            MenuItemResponse,
            PizzaResponse,
            CreateOffering,
            OfferingResponse,
            MessageResponse,
        )
    ),
    tags(
        (name = "Restaurants", description = "Restaurant listing, detail, and deletion"),
        (name = "Pizzas", description = "Pizza catalog"),
        (name = "Offerings", description = "Restaurant menu offerings")
    )
)]
pub struct ApiDoc;
