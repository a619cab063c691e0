//! Menu item entity - One row per item the kitchen can sell.
//!
//! Items carry a caller-assigned id, a price, an inventory count, and a
//! category. The `is_alcoholic`/`season`/`valid_until` columns are
//! independent attributes, not tied to the category: a `Regular` item may
//! leave all three null, while a non-alcoholic `Beverage` sets only
//! `is_alcoholic = false`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Menu item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "menu_items")]
pub struct Model {
    /// Caller-assigned item identifier
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    /// Display name (e.g. "Cheeseburger")
    pub name: String,
    /// Unit price in dollars, always positive
    pub price: f64,
    /// Remaining inventory count, never negative
    pub inventory: i32,
    /// Item category
    pub category: MenuItemCategory,
    /// Whether the item contains alcohol; null when not applicable
    pub is_alcoholic: Option<bool>,
    /// Season label for seasonal items (e.g. "Fall")
    pub season: Option<String>,
    /// Last day a seasonal item may be ordered
    pub valid_until: Option<Date>,
}

/// Menu item category, stored as its string value
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum MenuItemCategory {
    /// Everyday menu item
    #[sea_orm(string_value = "Regular")]
    Regular,
    /// Drink, alcoholic or not
    #[sea_orm(string_value = "Beverage")]
    Beverage,
    /// Limited-time item with a season and expiry
    #[sea_orm(string_value = "Seasonal")]
    Seasonal,
}

/// Defines relationships between menu items and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One menu item appears on many order lines
    #[sea_orm(has_many = "super::order_line::Entity")]
    OrderLines,
}

impl Related<super::order_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderLines.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
