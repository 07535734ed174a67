//! Migration: Create the restaurants and pizzas tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurants::Table)
                    .col(
                        ColumnDef::new(Restaurants::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Restaurants::Name).text().not_null())
                    .col(ColumnDef::new(Restaurants::Address).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Pizzas::Table)
                    .col(
                        ColumnDef::new(Pizzas::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Pizzas::Name).text().not_null())
                    .col(ColumnDef::new(Pizzas::Ingredients).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pizzas::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Restaurants::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Restaurants {
    Table,
    Id,
    Name,
    Address,
}

#[derive(Iden)]
enum Pizzas {
    Table,
    Id,
    Name,
    Ingredients,
}
