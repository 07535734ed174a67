//! Migration: Create the restaurant_pizzas association table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RestaurantPizzas::Table)
                    .col(
                        ColumnDef::new(RestaurantPizzas::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RestaurantPizzas::RestaurantId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RestaurantPizzas::PizzaId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RestaurantPizzas::Price)
                            .double()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_pizzas_restaurant_id")
                            .from(RestaurantPizzas::Table, RestaurantPizzas::RestaurantId)
                            .to(Restaurants::Table, Restaurants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_pizzas_pizza_id")
                            .from(RestaurantPizzas::Table, RestaurantPizzas::PizzaId)
                            .to(Pizzas::Table, Pizzas::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Indexes for the owning side of both relations
        manager
            .create_index(
                Index::create()
                    .name("idx_restaurant_pizzas_restaurant_id")
                    .table(RestaurantPizzas::Table)
                    .col(RestaurantPizzas::RestaurantId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_restaurant_pizzas_pizza_id")
                    .table(RestaurantPizzas::Table)
                    .col(RestaurantPizzas::PizzaId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_restaurant_pizzas_pizza_id")
                    .table(RestaurantPizzas::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_restaurant_pizzas_restaurant_id")
                    .table(RestaurantPizzas::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RestaurantPizzas::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum RestaurantPizzas {
    Table,
    Id,
    RestaurantId,
    PizzaId,
    Price,
}

#[derive(Iden)]
enum Restaurants {
    Table,
    Id,
}

#[derive(Iden)]
enum Pizzas {
    Table,
    Id,
}
