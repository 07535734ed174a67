//! Service Container - Centralized service construction and access.

use std::sync::Arc;

use super::{
    OfferingManager, OfferingService, PizzaManager, PizzaService, RestaurantManager,
    RestaurantService,
};
use crate::infra::Persistence;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
pub trait ServiceContainer: Send + Sync {
    /// Get restaurant service
    fn restaurants(&self) -> Arc<dyn RestaurantService>;

    /// Get pizza service
    fn pizzas(&self) -> Arc<dyn PizzaService>;

    /// Get offering service
    fn offerings(&self) -> Arc<dyn OfferingService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    restaurant_service: Arc<dyn RestaurantService>,
    pizza_service: Arc<dyn PizzaService>,
    offering_service: Arc<dyn OfferingService>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(
        restaurant_service: Arc<dyn RestaurantService>,
        pizza_service: Arc<dyn PizzaService>,
        offering_service: Arc<dyn OfferingService>,
    ) -> Self {
        Self {
            restaurant_service,
            pizza_service,
            offering_service,
        }
    }

    /// Create service container from a database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self {
            restaurant_service: Arc::new(RestaurantManager::new(uow.clone())),
            pizza_service: Arc::new(PizzaManager::new(uow.clone())),
            offering_service: Arc::new(OfferingManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn restaurants(&self) -> Arc<dyn RestaurantService> {
        self.restaurant_service.clone()
    }

    fn pizzas(&self) -> Arc<dyn PizzaService> {
        self.pizza_service.clone()
    }

    fn offerings(&self) -> Arc<dyn OfferingService> {
        self.offering_service.clone()
    }
}
