//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20240101_000001_create_restaurants_and_pizzas;
mod m20240101_000002_create_restaurant_pizzas;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_restaurants_and_pizzas::Migration),
            Box::new(m20240101_000002_create_restaurant_pizzas::Migration),
        ]
    }
}
