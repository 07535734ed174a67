//! Restaurant database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Restaurant;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "restaurants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub address: String,
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
impl From<Model> for Restaurant {
    fn from(model: Model) -> Self {
        Restaurant {
            id: model.id,
            name: model.name,
            address: model.address,
        }
    }
}
