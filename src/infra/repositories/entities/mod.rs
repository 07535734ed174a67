//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
