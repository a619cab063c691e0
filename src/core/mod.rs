/// Order transaction writer - atomic persistence of an order and its lines
pub mod order;

/// Schema lifecycle manager - drop, recreate, and seed the database schema
pub mod schema;
