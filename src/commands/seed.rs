//! Seed command - Loads a sample catalog into the database.
//!
//! Restaurants and pizzas have no creation endpoints; this command is
//! the provisioning path for both.

use sea_orm::{ActiveModelTrait, Set};

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::repositories::entities::{pizza, restaurant, restaurant_pizza};
use crate::infra::Database;

/// Execute the seed command
pub async fn execute(config: Config) -> AppResult<()> {
    tracing::info!("Seeding sample catalog...");

    let db = Database::connect(&config).await;
    let conn = db.connection();

    let restaurants = [
        ("Sottocasa NYC", "298 Atlantic Ave, Brooklyn, NY 11201"),
        ("PizzArte", "69 W 55th St, New York, NY 10019"),
        ("Kiki's Pizza", "239 16th St, San Francisco, CA 94103"),
    ];

    let mut restaurant_ids = Vec::new();
    for (name, address) in restaurants {
        let model = restaurant::ActiveModel {
            name: Set(name.to_string()),
            address: Set(address.to_string()),
            ..Default::default()
        }
        .insert(conn)
        .await?;
        restaurant_ids.push(model.id);
    }

    let pizzas = [
        ("Emma", "Cheese, Tomato Sauce, Basil"),
        ("Geri", "Cheese, Tomato Sauce, Pepperoni"),
        ("Melanie", "Cheese, Ricotta, Honey, Arugula"),
    ];

    let mut pizza_ids = Vec::new();
    for (name, ingredients) in pizzas {
        let model = pizza::ActiveModel {
            name: Set(name.to_string()),
            ingredients: Set(ingredients.to_string()),
            ..Default::default()
        }
        .insert(conn)
        .await?;
        pizza_ids.push(model.id);
    }

    let offerings = [
        (restaurant_ids[0], pizza_ids[0], 12.5),
        (restaurant_ids[0], pizza_ids[1], 14.0),
        (restaurant_ids[1], pizza_ids[2], 16.0),
        (restaurant_ids[2], pizza_ids[0], 11.0),
    ];

    for (restaurant_id, pizza_id, price) in offerings {
        restaurant_pizza::ActiveModel {
            restaurant_id: Set(restaurant_id),
            pizza_id: Set(pizza_id),
            price: Set(price),
            ..Default::default()
        }
        .insert(conn)
        .await?;
    }

    tracing::info!(
        "Seeded {} restaurants, {} pizzas, {} offerings",
        restaurant_ids.len(),
        pizza_ids.len(),
        offerings.len()
    );

    Ok(())
}
