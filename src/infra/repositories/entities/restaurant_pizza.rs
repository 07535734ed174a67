//! Offering database entity for SeaORM (table `restaurant_pizzas`).

use sea_orm::entity::prelude::*;

use crate::domain::Offering;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "restaurant_pizzas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::restaurant::Entity",
        from = "Column::RestaurantId",
        to = "super::restaurant::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Restaurant,
    #[sea_orm(
        belongs_to = "super::pizza::Entity",
        from = "Column::PizzaId",
        to = "super::pizza::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Pizza,
}

impl Related<super::restaurant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Restaurant.def()
    }
}

impl Related<super::pizza::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pizza.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Offering {
    fn from(model: Model) -> Self {
        Offering {
            id: model.id,
            restaurant_id: model.restaurant_id,
            pizza_id: model.pizza_id,
            price: model.price,
        }
    }
}
