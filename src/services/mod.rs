//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion, with repository access and transaction
//! management through the Unit of Work.

pub mod container;
mod offering_service;
mod pizza_service;
mod restaurant_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use offering_service::{OfferingManager, OfferingService};
pub use pizza_service::{PizzaManager, PizzaService};
pub use restaurant_service::{RestaurantManager, RestaurantService};
