//! Order line entity - One quantity-of-menu-item row belonging to exactly
//! one order.
//!
//! The composite primary key `(order_id, item_id)` means an item appears at
//! most once per order; repeat orders of the same item raise the quantity.
//! Lines are owned by their order (cascade on delete) and reference a menu
//! item that must pre-exist.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order line database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_lines")]
pub struct Model {
    /// Owning order
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_id: i64,
    /// Referenced menu item
    #[sea_orm(primary_key, auto_increment = false)]
    pub item_id: i64,
    /// Number of units ordered, always positive
    pub quantity: i32,
}

/// Defines relationships between order lines and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each line belongs to one order
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id"
    )]
    Order,
    /// Each line references one menu item
    #[sea_orm(
        belongs_to = "super::menu_item::Entity",
        from = "Column::ItemId",
        to = "super::menu_item::Column::Id"
    )]
    MenuItem,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::menu_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
