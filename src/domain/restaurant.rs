//! Restaurant domain entity and wire types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::offering::{MenuItem, MenuItemResponse};

/// Restaurant domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub address: String,
}

/// Restaurant summary response (no offerings)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RestaurantResponse {
    /// Unique restaurant identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Restaurant name
    #[schema(example = "Sottocasa NYC")]
    pub name: String,
    /// Street address
    #[schema(example = "298 Atlantic Ave, Brooklyn, NY 11201")]
    pub address: String,
}

impl From<Restaurant> for RestaurantResponse {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
        }
    }
}

/// Restaurant detail response with its menu offerings
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RestaurantMenuResponse {
    pub id: i32,
    pub name: String,
    pub address: String,
    /// Offerings owned by this restaurant, each with its pizza
    pub restaurant_pizzas: Vec<MenuItemResponse>,
}

impl RestaurantMenuResponse {
    pub fn new(restaurant: Restaurant, menu: Vec<MenuItem>) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
            restaurant_pizzas: menu.into_iter().map(MenuItemResponse::from).collect(),
        }
    }
}
