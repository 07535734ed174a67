//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and
//! infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{
    OfferingService, PizzaService, RestaurantService, ServiceContainer, Services,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Restaurant service
    pub restaurant_service: Arc<dyn RestaurantService>,
    /// Pizza service
    pub pizza_service: Arc<dyn PizzaService>,
    /// Offering service
    pub offering_service: Arc<dyn OfferingService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a connected database.
    ///
    /// This is the recommended way to create AppState as it wires all
    /// services through the service container.
    pub fn from_config(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());

        Self {
            restaurant_service: container.restaurants(),
            pizza_service: container.pizzas(),
            offering_service: container.offerings(),
            database,
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(
        restaurant_service: Arc<dyn RestaurantService>,
        pizza_service: Arc<dyn PizzaService>,
        offering_service: Arc<dyn OfferingService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            restaurant_service,
            pizza_service,
            offering_service,
            database,
        }
    }
}
