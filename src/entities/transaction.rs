//! Transaction entity - The financial record settling an order.
//!
//! At most one transaction exists per order (`order_id` is unique). The
//! schema enforces the cross-field invariant at write time: dine-in rows
//! carry no address, fee, or pickup time; online rows require an address and
//! a delivery fee; take-out rows require a pickup time and nothing else.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Transaction database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Caller-assigned transaction identifier
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    /// When the transaction was recorded
    pub date: DateTimeUtc,
    /// Settled order; unique, at most one transaction per order
    #[sea_orm(unique)]
    pub order_id: i64,
    /// How the order was paid for and fulfilled
    pub transaction_type: TransactionType,
    /// Delivery address, present only for online transactions
    pub address: Option<String>,
    /// Delivery fee in dollars, present only for online transactions
    pub delivery_fee: Option<f64>,
    /// Pickup time label, present only for take-out transactions
    pub pickup_time: Option<String>,
}

/// Transaction channel, stored as its string value
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum TransactionType {
    /// Settled at the table; no delivery or pickup fields
    #[sea_orm(string_value = "DineIn")]
    DineIn,
    /// Delivered; requires address and delivery fee
    #[sea_orm(string_value = "Online")]
    Online,
    /// Collected by the customer; requires a pickup time
    #[sea_orm(string_value = "TakeOut")]
    TakeOut,
}

/// Defines relationships between transactions and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each transaction settles one order
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id"
    )]
    Order,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
