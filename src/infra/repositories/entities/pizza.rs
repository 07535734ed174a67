//! Pizza database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Pizza;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pizzas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::restaurant_pizza::Entity")]
    RestaurantPizzas,
}

impl Related<super::restaurant_pizza::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RestaurantPizzas.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Pizza {
    fn from(model: Model) -> Self {
        Pizza {
            id: model.id,
            name: model.name,
            ingredients: model.ingredients,
        }
    }
}
