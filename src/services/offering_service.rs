//! Offering service - creation of restaurant menu offerings.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateOffering, Offering};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Offering use cases.
#[async_trait]
pub trait OfferingService: Send + Sync {
    /// Create an offering linking an existing restaurant and pizza
    async fn create_offering(&self, data: CreateOffering) -> AppResult<Offering>;
}

/// Concrete implementation of [`OfferingService`] using the Unit of Work.
pub struct OfferingManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> OfferingManager<U> {
    /// Create new offering service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> OfferingService for OfferingManager<U> {
    async fn create_offering(&self, data: CreateOffering) -> AppResult<Offering> {
        // Both referenced records must exist before the insert is attempted
        let restaurant = self.uow.restaurants().find_by_id(data.restaurant_id).await?;
        let pizza = self.uow.pizzas().find_by_id(data.pizza_id).await?;

        if restaurant.is_none() || pizza.is_none() {
            return Err(AppError::not_found("Restaurant or pizza not found"));
        }

        self.uow
            .transaction(|ctx| Box::pin(async move { ctx.offerings().insert(data).await }))
            .await
            .map_err(|e| match e {
                // A rejected insert is reported to the client with the
                // store's message, not as a server error
                AppError::Database(err) => AppError::validation(err.to_string()),
                other => other,
            })
    }
}
