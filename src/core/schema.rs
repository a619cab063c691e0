//! Schema lifecycle manager - Rebuilds the database schema from scratch.
//!
//! [`initialize`] drops every table, recreates the schema with its check and
//! referential constraints, and seeds the fixed demonstration rows, all
//! inside one transaction. It runs once at process start, before anything
//! else touches the database, and any failure is fatal to the caller: the
//! process must not continue against a partially-initialized schema.
//!
//! This is a development seeding operation, not a migration system. Every
//! run destroys all existing data and restores the same seeded state.

use crate::errors::{Error, Result};
use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tracing::{error, info};

/// Drops all tables, most-dependent first, so the destructive phase works
/// regardless of what half-state a previous failed run may have left.
const DROP_TABLES: &str = "
DROP TABLE IF EXISTS transactions;
DROP TABLE IF EXISTS placed_order_items;
DROP TABLE IF EXISTS placed_orders;
DROP TABLE IF EXISTS order_lines;
DROP TABLE IF EXISTS orders;
DROP TABLE IF EXISTS menu_items;
DROP TABLE IF EXISTS dining_tables;
";

/// Creates all tables, least-dependent first. The invariants of the data
/// model live here as declarative constraints: enum checks, the
/// order-type/table coupling, and the transaction-type field coupling.
const CREATE_TABLES: &str = "
CREATE TABLE menu_items (
    id INTEGER PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    price REAL NOT NULL CHECK (price > 0),
    inventory INTEGER NOT NULL CHECK (inventory >= 0),
    category TEXT NOT NULL CHECK (category IN ('Regular', 'Beverage', 'Seasonal')),
    is_alcoholic BOOLEAN NULL,
    season TEXT NULL,
    valid_until DATE NULL
);

CREATE TABLE dining_tables (
    id INTEGER PRIMARY KEY NOT NULL,
    seats INTEGER NOT NULL CHECK (seats > 0),
    is_reserved BOOLEAN NOT NULL DEFAULT FALSE
);

CREATE TABLE orders (
    id INTEGER PRIMARY KEY NOT NULL,
    order_type TEXT NOT NULL CHECK (order_type IN ('DineIn', 'TakeOut', 'Online')),
    table_id INTEGER NULL,
    is_served BOOLEAN NOT NULL DEFAULT FALSE,
    FOREIGN KEY (table_id) REFERENCES dining_tables (id),
    CHECK (
        (order_type IN ('Online', 'TakeOut') AND table_id IS NULL) OR
        (order_type = 'DineIn' AND table_id IS NOT NULL)
    )
);

CREATE TABLE order_lines (
    order_id INTEGER NOT NULL,
    item_id INTEGER NOT NULL,
    quantity INTEGER NOT NULL CHECK (quantity > 0),
    PRIMARY KEY (order_id, item_id),
    FOREIGN KEY (order_id) REFERENCES orders (id) ON DELETE CASCADE,
    FOREIGN KEY (item_id) REFERENCES menu_items (id)
);

CREATE TABLE transactions (
    id INTEGER PRIMARY KEY NOT NULL,
    date TIMESTAMP NOT NULL,
    order_id INTEGER NOT NULL UNIQUE,
    transaction_type TEXT NOT NULL CHECK (transaction_type IN ('DineIn', 'Online', 'TakeOut')),
    address TEXT NULL,
    delivery_fee REAL NULL,
    pickup_time TEXT NULL,
    FOREIGN KEY (order_id) REFERENCES orders (id),
    CHECK (
        (transaction_type = 'DineIn' AND address IS NULL AND delivery_fee IS NULL AND pickup_time IS NULL) OR
        (transaction_type = 'Online' AND address IS NOT NULL AND delivery_fee IS NOT NULL AND pickup_time IS NULL) OR
        (transaction_type = 'TakeOut' AND address IS NULL AND delivery_fee IS NULL AND pickup_time IS NOT NULL)
    )
);

CREATE TABLE placed_orders (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    customer_name TEXT NOT NULL,
    order_time TIMESTAMP NOT NULL
);

CREATE TABLE placed_order_items (
    order_id INTEGER NOT NULL,
    item_name TEXT NOT NULL,
    quantity INTEGER NOT NULL CHECK (quantity > 0),
    price REAL NOT NULL CHECK (price >= 0),
    PRIMARY KEY (order_id, item_name),
    FOREIGN KEY (order_id) REFERENCES placed_orders (id) ON DELETE CASCADE
);
";

/// Fixed demonstration rows: 8 menu items, 4 tables, 6 orders, 12 order
/// lines, 3 transactions.
const SEED_DATA: &str = "
INSERT INTO menu_items (id, name, price, inventory, category, is_alcoholic, season, valid_until) VALUES
(1, 'Cheeseburger', 9.99, 50, 'Regular', NULL, NULL, NULL),
(2, 'Fries', 3.49, 100, 'Regular', NULL, NULL, NULL),
(3, 'Soda', 1.99, 200, 'Beverage', FALSE, NULL, NULL),
(4, 'Craft Beer', 6.50, 75, 'Beverage', TRUE, NULL, NULL),
(5, 'Pumpkin Spice Latte', 5.50, 40, 'Seasonal', FALSE, 'Fall', '2023-11-30'),
(6, 'Caesar Salad', 8.50, 30, 'Regular', NULL, NULL, NULL),
(7, 'Iced Tea', 2.29, 150, 'Beverage', FALSE, NULL, NULL),
(8, 'Winter Stew', 12.95, 25, 'Seasonal', NULL, 'Winter', '2024-03-15');

INSERT INTO dining_tables (id, seats, is_reserved) VALUES
(1, 4, TRUE), (2, 2, FALSE), (3, 6, TRUE), (4, 4, TRUE);

INSERT INTO orders (id, order_type, table_id, is_served) VALUES
(101, 'DineIn', 1, TRUE), (102, 'TakeOut', NULL, TRUE), (103, 'Online', NULL, TRUE),
(104, 'DineIn', 3, TRUE), (105, 'Online', NULL, FALSE), (106, 'DineIn', 4, FALSE);

INSERT INTO order_lines (order_id, item_id, quantity) VALUES
(101, 1, 1), (101, 2, 1), (101, 4, 1), (102, 6, 1), (102, 7, 1),
(103, 1, 2), (103, 3, 2), (104, 8, 1), (104, 3, 1), (105, 5, 1),
(106, 1, 1), (106, 7, 1);

INSERT INTO transactions (id, date, order_id, transaction_type, address, delivery_fee, pickup_time) VALUES
(1001, '2023-10-27 12:15:00', 101, 'DineIn', NULL, NULL, NULL),
(1002, '2023-10-27 12:35:10', 102, 'TakeOut', NULL, NULL, '12:50 PM'),
(1003, '2023-10-27 13:05:00', 103, 'Online', '123 Main St, Anytown', 3.99, NULL);
";

/// Drops, recreates, and seeds the whole schema.
///
/// Referential-integrity checking is disabled for the destructive phase and
/// re-enabled afterwards. Drop, create, and seed all run inside a single
/// transaction, so a failure at any step leaves the store exactly as it was
/// before the call rather than in a half-built state.
///
/// # Errors
///
/// Returns [`Error::SchemaInitialization`] wrapping the driver error on any
/// failure. The caller must treat this as a fatal startup condition; a
/// retry is only sound as a full re-run of the drop/create/seed sequence.
pub async fn initialize(db: &DatabaseConnection) -> Result<()> {
    info!("initializing database schema");

    db.execute_unprepared("PRAGMA foreign_keys = OFF;")
        .await
        .map_err(|source| Error::SchemaInitialization { source })?;

    let txn = db
        .begin()
        .await
        .map_err(|source| Error::SchemaInitialization { source })?;

    match rebuild(&txn).await {
        Ok(()) => {
            txn.commit()
                .await
                .map_err(|source| Error::SchemaInitialization { source })?;
        }
        Err(err) => {
            error!("schema rebuild failed, rolling back: {err}");
            if let Err(rollback_err) = txn.rollback().await {
                error!("rollback after failed schema rebuild also failed: {rollback_err}");
            }
            return Err(err);
        }
    }

    db.execute_unprepared("PRAGMA foreign_keys = ON;")
        .await
        .map_err(|source| Error::SchemaInitialization { source })?;

    info!("database schema rebuilt and seeded");
    Ok(())
}

async fn rebuild(txn: &DatabaseTransaction) -> Result<()> {
    for script in [DROP_TABLES, CREATE_TABLES, SEED_DATA] {
        txn.execute_unprepared(script)
            .await
            .map_err(|source| Error::SchemaInitialization { source })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::{
        DiningTable, MenuItem, MenuItemCategory, Order, OrderLine, OrderType, Transaction,
        TransactionType,
    };
    use crate::test_utils::setup_test_db;
    use sea_orm::{EntityTrait, PaginatorTrait};

    #[tokio::test]
    async fn test_initialize_creates_seeded_state() -> Result<()> {
        let db = setup_test_db().await?;

        assert_eq!(MenuItem::find().count(&db).await?, 8);
        assert_eq!(DiningTable::find().count(&db).await?, 4);
        assert_eq!(Order::find().count(&db).await?, 6);
        assert_eq!(OrderLine::find().count(&db).await?, 12);
        assert_eq!(Transaction::find().count(&db).await?, 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_seeded_rows_decode_into_models() -> Result<()> {
        let db = setup_test_db().await?;

        let latte = MenuItem::find_by_id(5).one(&db).await?.unwrap();
        assert_eq!(latte.name, "Pumpkin Spice Latte");
        assert_eq!(latte.category, MenuItemCategory::Seasonal);
        assert_eq!(latte.is_alcoholic, Some(false));
        assert_eq!(latte.season.as_deref(), Some("Fall"));
        assert!(latte.valid_until.is_some());

        let burger = MenuItem::find_by_id(1).one(&db).await?.unwrap();
        assert_eq!(burger.category, MenuItemCategory::Regular);
        assert_eq!(burger.is_alcoholic, None);
        assert_eq!(burger.season, None);

        let dine_in = Order::find_by_id(101).one(&db).await?.unwrap();
        assert_eq!(dine_in.order_type, OrderType::DineIn);
        assert_eq!(dine_in.table_id, Some(1));
        assert!(dine_in.is_served);

        let online = Order::find_by_id(105).one(&db).await?.unwrap();
        assert_eq!(online.order_type, OrderType::Online);
        assert_eq!(online.table_id, None);
        assert!(!online.is_served);

        let delivery = Transaction::find_by_id(1003).one(&db).await?.unwrap();
        assert_eq!(delivery.transaction_type, TransactionType::Online);
        assert_eq!(delivery.order_id, 103);
        assert_eq!(delivery.address.as_deref(), Some("123 Main St, Anytown"));
        assert_eq!(delivery.delivery_fee, Some(3.99));
        assert_eq!(delivery.pickup_time, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_initialize_twice_resets_to_seed_state() -> Result<()> {
        let db = setup_test_db().await?;

        // Mutate the store between runs; re-initialization must erase it.
        db.execute_unprepared(
            "INSERT INTO dining_tables (id, seats, is_reserved) VALUES (99, 10, FALSE);",
        )
        .await?;
        assert_eq!(DiningTable::find().count(&db).await?, 5);

        initialize(&db).await?;

        assert_eq!(DiningTable::find().count(&db).await?, 4);
        assert!(DiningTable::find_by_id(99).one(&db).await?.is_none());
        assert_eq!(MenuItem::find().count(&db).await?, 8);
        assert_eq!(Order::find().count(&db).await?, 6);
        assert_eq!(OrderLine::find().count(&db).await?, 12);
        assert_eq!(Transaction::find().count(&db).await?, 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_order_type_table_coupling_enforced() -> Result<()> {
        let db = setup_test_db().await?;

        // Online and take-out orders must not reference a table.
        let online_with_table = db
            .execute_unprepared(
                "INSERT INTO orders (id, order_type, table_id, is_served) \
                 VALUES (900, 'Online', 2, FALSE);",
            )
            .await;
        assert!(online_with_table.is_err());

        let takeout_with_table = db
            .execute_unprepared(
                "INSERT INTO orders (id, order_type, table_id, is_served) \
                 VALUES (901, 'TakeOut', 2, FALSE);",
            )
            .await;
        assert!(takeout_with_table.is_err());

        // Dine-in orders must reference a table.
        let dine_in_without_table = db
            .execute_unprepared(
                "INSERT INTO orders (id, order_type, table_id, is_served) \
                 VALUES (902, 'DineIn', NULL, FALSE);",
            )
            .await;
        assert!(dine_in_without_table.is_err());

        // The valid combinations are accepted.
        db.execute_unprepared(
            "INSERT INTO orders (id, order_type, table_id, is_served) \
             VALUES (903, 'DineIn', 2, FALSE);",
        )
        .await?;
        db.execute_unprepared(
            "INSERT INTO orders (id, order_type, table_id, is_served) \
             VALUES (904, 'TakeOut', NULL, FALSE);",
        )
        .await?;

        assert_eq!(Order::find().count(&db).await?, 8);
        Ok(())
    }

    #[tokio::test]
    async fn test_transaction_field_coupling_enforced() -> Result<()> {
        let db = setup_test_db().await?;

        // Online without an address is rejected.
        let online_without_address = db
            .execute_unprepared(
                "INSERT INTO transactions (id, date, order_id, transaction_type, address, delivery_fee, pickup_time) \
                 VALUES (2001, '2023-10-28 09:00:00', 105, 'Online', NULL, 3.99, NULL);",
            )
            .await;
        assert!(online_without_address.is_err());

        // Dine-in with a pickup time is rejected.
        let dine_in_with_pickup = db
            .execute_unprepared(
                "INSERT INTO transactions (id, date, order_id, transaction_type, address, delivery_fee, pickup_time) \
                 VALUES (2002, '2023-10-28 09:00:00', 104, 'DineIn', NULL, NULL, '09:30 AM');",
            )
            .await;
        assert!(dine_in_with_pickup.is_err());

        // Take-out with an address is rejected.
        let takeout_with_address = db
            .execute_unprepared(
                "INSERT INTO transactions (id, date, order_id, transaction_type, address, delivery_fee, pickup_time) \
                 VALUES (2003, '2023-10-28 09:00:00', 106, 'TakeOut', '42 Elm St', NULL, '09:30 AM');",
            )
            .await;
        assert!(takeout_with_address.is_err());

        // Valid rows for each type are accepted.
        db.execute_unprepared(
            "INSERT INTO transactions (id, date, order_id, transaction_type, address, delivery_fee, pickup_time) \
             VALUES (2004, '2023-10-28 09:00:00', 104, 'DineIn', NULL, NULL, NULL);",
        )
        .await?;
        db.execute_unprepared(
            "INSERT INTO transactions (id, date, order_id, transaction_type, address, delivery_fee, pickup_time) \
             VALUES (2005, '2023-10-28 09:05:00', 105, 'Online', '7 Oak Ave', 4.50, NULL);",
        )
        .await?;
        db.execute_unprepared(
            "INSERT INTO transactions (id, date, order_id, transaction_type, address, delivery_fee, pickup_time) \
             VALUES (2006, '2023-10-28 09:10:00', 106, 'TakeOut', NULL, NULL, '09:45 AM');",
        )
        .await?;

        assert_eq!(Transaction::find().count(&db).await?, 6);
        Ok(())
    }

    #[tokio::test]
    async fn test_at_most_one_transaction_per_order() -> Result<()> {
        let db = setup_test_db().await?;

        // Order 101 already has seeded transaction 1001.
        let second_for_same_order = db
            .execute_unprepared(
                "INSERT INTO transactions (id, date, order_id, transaction_type, address, delivery_fee, pickup_time) \
                 VALUES (2007, '2023-10-28 10:00:00', 101, 'DineIn', NULL, NULL, NULL);",
            )
            .await;
        assert!(second_for_same_order.is_err());

        Ok(())
    }

    #[tokio::test]
    async fn test_menu_category_constraint() -> Result<()> {
        let db = setup_test_db().await?;

        let bad_category = db
            .execute_unprepared(
                "INSERT INTO menu_items (id, name, price, inventory, category) \
                 VALUES (9, 'Mystery Dish', 4.99, 10, 'Fusion');",
            )
            .await;
        assert!(bad_category.is_err());

        let negative_inventory = db
            .execute_unprepared(
                "INSERT INTO menu_items (id, name, price, inventory, category) \
                 VALUES (9, 'Soup', 4.99, -1, 'Regular');",
            )
            .await;
        assert!(negative_inventory.is_err());

        Ok(())
    }
}
