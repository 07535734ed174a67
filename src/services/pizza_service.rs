//! Pizza service - pizza catalog listing.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Pizza;
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

/// Pizza use cases.
#[async_trait]
pub trait PizzaService: Send + Sync {
    /// List all pizzas
    async fn list_pizzas(&self) -> AppResult<Vec<Pizza>>;
}

/// Concrete implementation of [`PizzaService`] using the Unit of Work.
pub struct PizzaManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> PizzaManager<U> {
    /// Create new pizza service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> PizzaService for PizzaManager<U> {
    async fn list_pizzas(&self) -> AppResult<Vec<Pizza>> {
        self.uow.pizzas().list().await
    }
}
