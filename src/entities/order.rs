//! Order entity - The parent row of a floor order.
//!
//! An order has a type, an optional table reference, and a served flag. The
//! schema couples the first two: `table_id` is non-null exactly when the
//! order is dine-in. Line items live in `order_lines` and are destroyed
//! together with their order.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Order identifier
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    /// How the order was placed
    pub order_type: OrderType,
    /// Table the order is served at; null unless `order_type` is `DineIn`
    pub table_id: Option<i64>,
    /// Whether the order has been served
    pub is_served: bool,
}

/// Order channel, stored as its string value
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum OrderType {
    /// Eaten at a table in the restaurant
    #[sea_orm(string_value = "DineIn")]
    DineIn,
    /// Picked up at the counter
    #[sea_orm(string_value = "TakeOut")]
    TakeOut,
    /// Delivered to an address
    #[sea_orm(string_value = "Online")]
    Online,
}

/// Defines relationships between orders and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Dine-in orders belong to one table
    #[sea_orm(
        belongs_to = "super::dining_table::Entity",
        from = "Column::TableId",
        to = "super::dining_table::Column::Id"
    )]
    DiningTable,
    /// One order owns many order lines
    #[sea_orm(has_many = "super::order_line::Entity")]
    OrderLines,
    /// At most one financial transaction settles an order
    #[sea_orm(has_many = "super::transaction::Entity")]
    Transactions,
}

impl Related<super::dining_table::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiningTable.def()
    }
}

impl Related<super::order_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderLines.def()
    }
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
