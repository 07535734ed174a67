//! Service unit tests over mocked repositories.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::predicate::eq;

use pizzeria_api::domain::{CreateOffering, MenuItem, Offering, Pizza, Restaurant};
use pizzeria_api::errors::{AppError, AppResult};
use pizzeria_api::infra::{
    MockPizzaRepository, MockRestaurantRepository, PizzaRepository, RestaurantRepository,
    TransactionContext, UnitOfWork,
};
use pizzeria_api::services::{
    OfferingManager, OfferingService, PizzaManager, PizzaService, RestaurantManager,
    RestaurantService,
};

fn sample_restaurant(id: i32) -> Restaurant {
    Restaurant {
        id,
        name: "Sottocasa NYC".to_string(),
        address: "298 Atlantic Ave, Brooklyn, NY 11201".to_string(),
    }
}

fn sample_pizza(id: i32) -> Pizza {
    Pizza {
        id,
        name: "Emma".to_string(),
        ingredients: "Cheese, Tomato Sauce, Basil".to_string(),
    }
}

fn sample_menu_item(offering_id: i32, restaurant_id: i32, price: f64) -> MenuItem {
    MenuItem {
        offering: Offering {
            id: offering_id,
            restaurant_id,
            pizza_id: 1,
            price,
        },
        pizza: sample_pizza(1),
    }
}

/// Test Unit of Work wrapping mock repositories.
///
/// Transactions are unsupported here; paths that reach them are
/// covered by the integration tests against a real database.
struct TestUnitOfWork {
    restaurant_repo: Arc<MockRestaurantRepository>,
    pizza_repo: Arc<MockPizzaRepository>,
}

impl TestUnitOfWork {
    fn new(restaurant_repo: MockRestaurantRepository, pizza_repo: MockPizzaRepository) -> Self {
        Self {
            restaurant_repo: Arc::new(restaurant_repo),
            pizza_repo: Arc::new(pizza_repo),
        }
    }
}

#[async_trait]
impl UnitOfWork for TestUnitOfWork {
    fn restaurants(&self) -> Arc<dyn RestaurantRepository> {
        self.restaurant_repo.clone()
    }

    fn pizzas(&self) -> Arc<dyn PizzaRepository> {
        self.pizza_repo.clone()
    }

    async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        Err(AppError::internal("Transactions not supported in test mock"))
    }
}

// =============================================================================
// Restaurant Service
// =============================================================================

#[tokio::test]
async fn test_list_restaurants_success() {
    let mut restaurant_repo = MockRestaurantRepository::new();
    restaurant_repo
        .expect_list()
        .returning(|| Ok(vec![sample_restaurant(1), sample_restaurant(2)]));

    let uow = TestUnitOfWork::new(restaurant_repo, MockPizzaRepository::new());
    let service = RestaurantManager::new(Arc::new(uow));
    let result = service.list_restaurants().await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_restaurant_success() {
    let mut restaurant_repo = MockRestaurantRepository::new();
    restaurant_repo
        .expect_find_with_menu()
        .with(eq(1))
        .returning(|id| {
            Ok(Some((
                sample_restaurant(id),
                vec![
                    sample_menu_item(10, id, 12.5),
                    sample_menu_item(11, id, 15.0),
                ],
            )))
        });

    let uow = TestUnitOfWork::new(restaurant_repo, MockPizzaRepository::new());
    let service = RestaurantManager::new(Arc::new(uow));
    let result = service.get_restaurant(1).await;

    assert!(result.is_ok());
    let (restaurant, menu) = result.unwrap();
    assert_eq!(restaurant.id, 1);
    assert_eq!(menu.len(), 2);
    assert_eq!(menu[0].pizza.name, "Emma");
}

#[tokio::test]
async fn test_get_restaurant_not_found() {
    let mut restaurant_repo = MockRestaurantRepository::new();
    restaurant_repo
        .expect_find_with_menu()
        .returning(|_| Ok(None));

    let uow = TestUnitOfWork::new(restaurant_repo, MockPizzaRepository::new());
    let service = RestaurantManager::new(Arc::new(uow));
    let result = service.get_restaurant(42).await;

    let err = result.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(err.to_string(), "Restaurant not found");
}

#[tokio::test]
async fn test_delete_restaurant_not_found() {
    let mut restaurant_repo = MockRestaurantRepository::new();
    restaurant_repo
        .expect_find_by_id()
        .with(eq(42))
        .returning(|_| Ok(None));

    let uow = TestUnitOfWork::new(restaurant_repo, MockPizzaRepository::new());
    let service = RestaurantManager::new(Arc::new(uow));
    let result = service.delete_restaurant(42).await;

    let err = result.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(err.to_string(), "Restaurant not found");
}

// =============================================================================
// Pizza Service
// =============================================================================

#[tokio::test]
async fn test_list_pizzas_success() {
    let mut pizza_repo = MockPizzaRepository::new();
    pizza_repo
        .expect_list()
        .returning(|| Ok(vec![sample_pizza(1), sample_pizza(2)]));

    let uow = TestUnitOfWork::new(MockRestaurantRepository::new(), pizza_repo);
    let service = PizzaManager::new(Arc::new(uow));
    let result = service.list_pizzas().await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().len(), 2);
}

// =============================================================================
// Offering Service
// =============================================================================

#[tokio::test]
async fn test_create_offering_unknown_restaurant() {
    let mut restaurant_repo = MockRestaurantRepository::new();
    restaurant_repo
        .expect_find_by_id()
        .with(eq(42))
        .returning(|_| Ok(None));

    let mut pizza_repo = MockPizzaRepository::new();
    pizza_repo
        .expect_find_by_id()
        .with(eq(1))
        .returning(|id| Ok(Some(sample_pizza(id))));

    let uow = TestUnitOfWork::new(restaurant_repo, pizza_repo);
    let service = OfferingManager::new(Arc::new(uow));
    let result = service
        .create_offering(CreateOffering {
            restaurant_id: 42,
            pizza_id: 1,
            price: 9.99,
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(err.to_string(), "Restaurant or pizza not found");
}

#[tokio::test]
async fn test_create_offering_unknown_pizza() {
    let mut restaurant_repo = MockRestaurantRepository::new();
    restaurant_repo
        .expect_find_by_id()
        .with(eq(1))
        .returning(|id| Ok(Some(sample_restaurant(id))));

    let mut pizza_repo = MockPizzaRepository::new();
    pizza_repo
        .expect_find_by_id()
        .with(eq(42))
        .returning(|_| Ok(None));

    let uow = TestUnitOfWork::new(restaurant_repo, pizza_repo);
    let service = OfferingManager::new(Arc::new(uow));
    let result = service
        .create_offering(CreateOffering {
            restaurant_id: 1,
            pizza_id: 42,
            price: 9.99,
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(err.to_string(), "Restaurant or pizza not found");
}
