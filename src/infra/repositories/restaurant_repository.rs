//! Restaurant repository - queries over the restaurants table.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, ModelTrait};

use super::entities::{pizza, restaurant, restaurant_pizza};
use crate::domain::{MenuItem, Restaurant};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read access to restaurants.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// List all restaurants
    async fn list(&self) -> AppResult<Vec<Restaurant>>;

    /// Find a restaurant by id
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Restaurant>>;

    /// Find a restaurant together with its menu (offerings joined with
    /// their pizzas)
    async fn find_with_menu(&self, id: i32) -> AppResult<Option<(Restaurant, Vec<MenuItem>)>>;
}

/// SeaORM-backed implementation of [`RestaurantRepository`].
pub struct RestaurantStore {
    db: DatabaseConnection,
}

impl RestaurantStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RestaurantRepository for RestaurantStore {
    async fn list(&self) -> AppResult<Vec<Restaurant>> {
        let models = restaurant::Entity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Restaurant::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Restaurant>> {
        let model = restaurant::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(model.map(Restaurant::from))
    }

    async fn find_with_menu(&self, id: i32) -> AppResult<Option<(Restaurant, Vec<MenuItem>)>> {
        let Some(model) = restaurant::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?
        else {
            return Ok(None);
        };

        let rows = model
            .find_related(restaurant_pizza::Entity)
            .find_also_related(pizza::Entity)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        // The pizza side of the join is non-null by foreign key
        let menu = rows
            .into_iter()
            .filter_map(|(offering, pizza)| {
                pizza.map(|pizza| MenuItem {
                    offering: offering.into(),
                    pizza: pizza.into(),
                })
            })
            .collect();

        Ok(Some((model.into(), menu)))
    }
}
