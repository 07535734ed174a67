//! Unit of Work pattern implementation.
//!
//! Centralizes repository access and manages the transaction lifecycle
//! (begin, commit, rollback) for mutating operations:
//! - Provides the read repositories used outside transactions
//! - Runs closures inside a transaction that commits on success and
//!   rolls back on error

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use std::sync::Arc;

use super::repositories::{PizzaRepository, PizzaStore, RestaurantRepository, RestaurantStore};
use crate::domain::{CreateOffering, Offering};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Note: the generic `transaction` method makes this trait unmockable
/// directly. For testing, mock the repositories or use integration tests.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get restaurant repository
    fn restaurants(&self) -> Arc<dyn RestaurantRepository>;

    /// Get pizza repository
    fn pizzas(&self) -> Arc<dyn PizzaRepository>;

    /// Execute a closure within a transaction.
    ///
    /// The transaction is committed on success and rolled back on error.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// All operations performed through this context are part of the same
/// database transaction. The context borrows the transaction to ensure
/// proper lifetime management.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    /// Create a new transaction context
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Restaurant operations for this transaction
    pub fn restaurants(&self) -> TxRestaurantRepository<'_> {
        TxRestaurantRepository::new(self.txn)
    }

    /// Offering operations for this transaction
    pub fn offerings(&self) -> TxOfferingRepository<'_> {
        TxOfferingRepository::new(self.txn)
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    restaurant_repo: Arc<RestaurantStore>,
    pizza_repo: Arc<PizzaStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        let restaurant_repo = Arc::new(RestaurantStore::new(db.clone()));
        let pizza_repo = Arc::new(PizzaStore::new(db.clone()));
        Self {
            db,
            restaurant_repo,
            pizza_repo,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn restaurants(&self) -> Arc<dyn RestaurantRepository> {
        self.restaurant_repo.clone()
    }

    fn pizzas(&self) -> Arc<dyn PizzaRepository> {
        self.pizza_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        // Begin transaction
        let txn = self.db.begin().await.map_err(AppError::from)?;

        // Create context with borrowed transaction
        let ctx = TransactionContext::new(&txn);

        // Execute the closure
        match f(ctx).await {
            Ok(result) => {
                // Commit on success - txn is owned, so this always works
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                // Rollback on error
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-aware restaurant operations.
pub struct TxRestaurantRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxRestaurantRepository<'a> {
    /// Create new transaction-aware repository
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Delete a restaurant row by id.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        use super::repositories::entities::restaurant::Entity as RestaurantEntity;
        use sea_orm::EntityTrait;

        let result = RestaurantEntity::delete_by_id(id)
            .exec(self.txn)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("Restaurant not found"));
        }

        Ok(())
    }
}

/// Transaction-aware offering operations.
pub struct TxOfferingRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxOfferingRepository<'a> {
    /// Create new transaction-aware repository
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Insert a new offering.
    pub async fn insert(&self, data: CreateOffering) -> AppResult<Offering> {
        use super::repositories::entities::restaurant_pizza::ActiveModel;
        use sea_orm::{ActiveModelTrait, Set};

        let active_model = ActiveModel {
            restaurant_id: Set(data.restaurant_id),
            pizza_id: Set(data.pizza_id),
            price: Set(data.price),
            ..Default::default()
        };

        let model = active_model
            .insert(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(Offering::from(model))
    }

    /// Delete all offerings owned by a restaurant, returning the count
    /// removed.
    pub async fn delete_for_restaurant(&self, restaurant_id: i32) -> AppResult<u64> {
        use super::repositories::entities::restaurant_pizza::{self, Entity as OfferingEntity};
        use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

        let result = OfferingEntity::delete_many()
            .filter(restaurant_pizza::Column::RestaurantId.eq(restaurant_id))
            .exec(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected)
    }
}
