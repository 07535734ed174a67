//! Pizza domain entity and wire types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Pizza domain entity
///
/// `ingredients` is a free-form list serialized as a single string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pizza {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}

/// Pizza response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PizzaResponse {
    /// Unique pizza identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Pizza name
    #[schema(example = "Emma")]
    pub name: String,
    /// Comma-separated ingredient list
    #[schema(example = "Cheese, Tomato Sauce, Basil")]
    pub ingredients: String,
}

impl From<Pizza> for PizzaResponse {
    fn from(pizza: Pizza) -> Self {
        Self {
            id: pizza.id,
            name: pizza.name,
            ingredients: pizza.ingredients,
        }
    }
}
