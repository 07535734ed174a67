//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub mod entities;
mod pizza_repository;
mod restaurant_repository;

pub use pizza_repository::{PizzaRepository, PizzaStore};
pub use restaurant_repository::{RestaurantRepository, RestaurantStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use pizza_repository::MockPizzaRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use restaurant_repository::MockRestaurantRepository;
