//! Placed order entity - The header row written by the order intake path.
//!
//! Unlike the seeded floor orders, placed orders get a database-generated
//! identifier: the writer inserts the header, reads the id back inside the
//! same transaction, and stamps it on every line item.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Placed order database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "placed_orders")]
pub struct Model {
    /// Database-generated order identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Customer or context label for the order
    pub customer_name: String,
    /// When the order was placed
    pub order_time: DateTimeUtc,
}

/// Defines relationships between placed orders and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One placed order owns many line items
    #[sea_orm(has_many = "super::placed_order_item::Entity")]
    Items,
}

impl Related<super::placed_order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
