//! Domain layer - Core catalog entities
//!
//! This module contains the catalog models that represent business
//! concepts independent of infrastructure concerns, along with the
//! request/response wire types derived from them.

pub mod offering;
pub mod pizza;
pub mod restaurant;

pub use offering::{CreateOffering, MenuItem, MenuItemResponse, Offering, OfferingResponse};
pub use pizza::{Pizza, PizzaResponse};
pub use restaurant::{Restaurant, RestaurantMenuResponse, RestaurantResponse};
