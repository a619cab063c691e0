//! Shared test utilities.
//!
//! Helpers for setting up a fully initialized in-memory database and for
//! building order inputs with sensible defaults.

use crate::{
    core::{
        order::{OrderInput, OrderItemInput},
        schema,
    },
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with the full schema rebuilt and
/// seeded. This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    schema::initialize(&db).await?;
    Ok(db)
}

/// A two-line order for "Alice": one Cheeseburger at 9.99 and one Fries at
/// 3.49, totalling 13.48.
pub fn sample_order() -> OrderInput {
    OrderInput {
        customer_name: "Alice".to_string(),
        order_time: chrono::Utc::now(),
        items: vec![
            OrderItemInput {
                item_name: "Cheeseburger".to_string(),
                quantity: 1,
                price: 9.99,
            },
            OrderItemInput {
                item_name: "Fries".to_string(),
                quantity: 1,
                price: 3.49,
            },
        ],
    }
}

/// An order with custom customer and lines, for tests that need a specific
/// shape.
pub fn custom_order(customer_name: &str, items: Vec<(&str, i32, f64)>) -> OrderInput {
    OrderInput {
        customer_name: customer_name.to_string(),
        order_time: chrono::Utc::now(),
        items: items
            .into_iter()
            .map(|(item_name, quantity, price)| OrderItemInput {
                item_name: item_name.to_string(),
                quantity,
                price,
            })
            .collect(),
    }
}
