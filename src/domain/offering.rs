//! Offering domain entity and wire types.
//!
//! An offering links one restaurant and one pizza with a price,
//! modeling "this restaurant sells this pizza at this price". The
//! wire name is `restaurant_pizza`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::pizza::{Pizza, PizzaResponse};

/// Offering domain entity (table `restaurant_pizzas`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offering {
    pub id: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
    pub price: f64,
}

/// An offering joined with the pizza it refers to
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub offering: Offering,
    pub pizza: Pizza,
}

/// Offering creation request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateOffering {
    /// Id of an existing restaurant
    #[schema(example = 1)]
    pub restaurant_id: i32,
    /// Id of an existing pizza
    #[schema(example = 1)]
    pub pizza_id: i32,
    /// Menu price
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    #[schema(example = 9.99)]
    pub price: f64,
}

/// Offering creation response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OfferingResponse {
    /// Unique offering identifier
    #[schema(example = 1)]
    pub id: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
    pub price: f64,
}

impl From<Offering> for OfferingResponse {
    fn from(offering: Offering) -> Self {
        Self {
            id: offering.id,
            restaurant_id: offering.restaurant_id,
            pizza_id: offering.pizza_id,
            price: offering.price,
        }
    }
}

/// Menu entry in the restaurant detail response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MenuItemResponse {
    /// Offering identifier
    pub id: i32,
    /// Menu price
    pub price: f64,
    /// The pizza on offer
    pub pizza: PizzaResponse,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.offering.id,
            price: item.offering.price,
            pizza: PizzaResponse::from(item.pizza),
        }
    }
}
