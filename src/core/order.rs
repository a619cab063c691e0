//! Order transaction writer - Persists an order as one all-or-nothing unit.
//!
//! [`save_order`] inserts the order header, reads the generated identifier
//! back inside the same transaction, then inserts every line item in input
//! order. Either all rows become visible together on commit, or none do: any
//! storage failure rolls the whole transaction back and surfaces as a single
//! contextualized error. Observers never see a header without its full set
//! of lines, nor lines without a parent header.

use crate::{
    entities::{placed_order, placed_order_item},
    errors::{Error, Result},
};
use sea_orm::{DatabaseConnection, DatabaseTransaction, Set, TransactionTrait, prelude::*};
use tracing::{error, info};

/// A fully-formed order as submitted by the caller.
///
/// Quantities and prices are carried into the store verbatim; the writer
/// does not re-derive prices from the menu or decrement inventory. Prices
/// are captured at order time.
#[derive(Clone, Debug)]
pub struct OrderInput {
    /// Customer or context label for the order
    pub customer_name: String,
    /// When the order was placed
    pub order_time: DateTimeUtc,
    /// Ordered sequence of line items; must be non-empty
    pub items: Vec<OrderItemInput>,
}

/// One line of an order as submitted by the caller.
#[derive(Clone, Debug)]
pub struct OrderItemInput {
    /// Item name as shown to the customer
    pub item_name: String,
    /// Number of units ordered
    pub quantity: i32,
    /// Unit price in dollars at order time
    pub price: f64,
}

impl OrderInput {
    /// Total price of the order: the sum of `quantity * price` over all
    /// line items.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.items
            .iter()
            .map(|item| f64::from(item.quantity) * item.price)
            .sum()
    }
}

/// Persists an order and its line items in a single transaction, returning
/// the database-generated order identifier.
///
/// The header is inserted first and its generated id read back before any
/// line insert, since the lines reference it. If every insert succeeds the
/// transaction commits; if any insert fails, the remaining inserts are
/// skipped, the whole transaction is rolled back, and the store is left
/// exactly as it was before the call.
///
/// # Errors
///
/// * [`Error::EmptyOrder`] when the order has no line items; nothing is
///   written.
/// * [`Error::Connectivity`] when no transaction scope can be opened.
/// * [`Error::OrderPersistence`] when any insert or the commit fails; the
///   transaction has been rolled back. Constraint violations are
///   deterministic and must not be blindly retried.
pub async fn save_order(db: &DatabaseConnection, order: &OrderInput) -> Result<i64> {
    if order.items.is_empty() {
        return Err(Error::EmptyOrder);
    }

    let txn = db
        .begin()
        .await
        .map_err(|source| Error::Connectivity { source })?;

    match insert_order(&txn, order).await {
        Ok(order_id) => {
            txn.commit().await.map_err(|source| Error::OrderPersistence {
                context: "committing order transaction".to_string(),
                source,
            })?;
            info!(
                order_id,
                customer = %order.customer_name,
                lines = order.items.len(),
                "order saved"
            );
            Ok(order_id)
        }
        Err(err) => {
            error!("order persistence failed, rolling back: {err}");
            if let Err(rollback_err) = txn.rollback().await {
                error!("rollback after failed order insert also failed: {rollback_err}");
            }
            Err(err)
        }
    }
}

async fn insert_order(txn: &DatabaseTransaction, order: &OrderInput) -> Result<i64> {
    let header = placed_order::ActiveModel {
        customer_name: Set(order.customer_name.clone()),
        order_time: Set(order.order_time),
        ..Default::default()
    };
    let header = header
        .insert(txn)
        .await
        .map_err(|source| Error::OrderPersistence {
            context: "inserting order header".to_string(),
            source,
        })?;

    for item in &order.items {
        let line = placed_order_item::ActiveModel {
            order_id: Set(header.id),
            item_name: Set(item.item_name.clone()),
            quantity: Set(item.quantity),
            price: Set(item.price),
        };
        line.insert(txn)
            .await
            .map_err(|source| Error::OrderPersistence {
                context: format!("inserting line item '{}'", item.item_name),
                source,
            })?;
    }

    Ok(header.id)
}
