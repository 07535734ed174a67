//! Pizza repository - queries over the pizzas table.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use super::entities::pizza;
use crate::domain::Pizza;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read access to pizzas.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PizzaRepository: Send + Sync {
    /// List all pizzas
    async fn list(&self) -> AppResult<Vec<Pizza>>;

    /// Find a pizza by id
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Pizza>>;
}

/// SeaORM-backed implementation of [`PizzaRepository`].
pub struct PizzaStore {
    db: DatabaseConnection,
}

impl PizzaStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PizzaRepository for PizzaStore {
    async fn list(&self) -> AppResult<Vec<Pizza>> {
        let models = pizza::Entity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Pizza::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Pizza>> {
        let model = pizza::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(model.map(Pizza::from))
    }
}
