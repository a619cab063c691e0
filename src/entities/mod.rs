//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod dining_table;
pub mod menu_item;
pub mod order;
pub mod order_line;
pub mod placed_order;
pub mod placed_order_item;
pub mod transaction;

// Re-export specific types to avoid conflicts
pub use dining_table::{
    Column as DiningTableColumn, Entity as DiningTable, Model as DiningTableModel,
};
pub use menu_item::{
    Column as MenuItemColumn, Entity as MenuItem, MenuItemCategory, Model as MenuItemModel,
};
pub use order::{Column as OrderColumn, Entity as Order, Model as OrderModel, OrderType};
pub use order_line::{Column as OrderLineColumn, Entity as OrderLine, Model as OrderLineModel};
pub use placed_order::{
    Column as PlacedOrderColumn, Entity as PlacedOrder, Model as PlacedOrderModel,
};
pub use placed_order_item::{
    Column as PlacedOrderItemColumn, Entity as PlacedOrderItem, Model as PlacedOrderItemModel,
};
pub use transaction::{
    Column as TransactionColumn, Entity as Transaction, Model as TransactionModel, TransactionType,
};
