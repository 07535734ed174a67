//! Restaurant service - restaurant listing, detail, and deletion.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{MenuItem, Restaurant};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Restaurant use cases.
#[async_trait]
pub trait RestaurantService: Send + Sync {
    /// List all restaurants
    async fn list_restaurants(&self) -> AppResult<Vec<Restaurant>>;

    /// Get a restaurant together with its menu offerings
    async fn get_restaurant(&self, id: i32) -> AppResult<(Restaurant, Vec<MenuItem>)>;

    /// Delete a restaurant and all of its offerings
    async fn delete_restaurant(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of [`RestaurantService`] using the Unit of Work.
pub struct RestaurantManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> RestaurantManager<U> {
    /// Create new restaurant service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> RestaurantService for RestaurantManager<U> {
    async fn list_restaurants(&self) -> AppResult<Vec<Restaurant>> {
        self.uow.restaurants().list().await
    }

    async fn get_restaurant(&self, id: i32) -> AppResult<(Restaurant, Vec<MenuItem>)> {
        self.uow
            .restaurants()
            .find_with_menu(id)
            .await?
            .ok_or_else(|| AppError::not_found("Restaurant not found"))
    }

    async fn delete_restaurant(&self, id: i32) -> AppResult<()> {
        self.uow
            .restaurants()
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Restaurant not found"))?;

        // The restaurant and its offerings go in one transaction; no
        // orphaned offerings survive a partial failure.
        self.uow
            .transaction(|ctx| {
                Box::pin(async move {
                    let removed = ctx.offerings().delete_for_restaurant(id).await?;
                    tracing::debug!("Removed {} offerings for restaurant {}", removed, id);
                    ctx.restaurants().delete(id).await
                })
            })
            .await
    }
}
