//! Dining table entity - The restaurant floor plan.
//!
//! Tables are seeded at initialization; the reservation flag is mutated by
//! reservation workflows outside this crate.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Dining table database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dining_tables")]
pub struct Model {
    /// Caller-assigned table number
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    /// Seat count, always positive
    pub seats: i32,
    /// Whether the table is currently reserved
    pub is_reserved: bool,
}

/// Defines relationships between dining tables and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Dine-in orders reference the table they are served at
    #[sea_orm(has_many = "super::order::Entity")]
    Orders,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
