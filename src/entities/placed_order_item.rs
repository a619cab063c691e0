//! Placed order item entity - One line of a placed order.
//!
//! Lines carry the item name, quantity, and unit price exactly as submitted;
//! prices are captured at order time, not re-derived from the menu. The
//! composite primary key `(order_id, item_name)` forbids duplicate lines for
//! the same item within one order.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Placed order line database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "placed_order_items")]
pub struct Model {
    /// Owning placed order
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_id: i64,
    /// Item name as submitted
    #[sea_orm(primary_key, auto_increment = false)]
    pub item_name: String,
    /// Number of units ordered, always positive
    pub quantity: i32,
    /// Unit price in dollars as submitted
    pub price: f64,
}

/// Defines relationships between placed order items and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each line belongs to one placed order
    #[sea_orm(
        belongs_to = "super::placed_order::Entity",
        from = "Column::OrderId",
        to = "super::placed_order::Column::Id"
    )]
    PlacedOrder,
}

impl Related<super::placed_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlacedOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
