//! Unified error types for the order-placement and schema-lifecycle core.
//!
//! Storage-layer failures are caught at the component boundary, wrapped with
//! the operation that was in progress, and re-raised. Nothing is swallowed:
//! a schema rebuild failure is fatal to startup, and an order persistence
//! failure always means the surrounding transaction was rolled back.

use sea_orm::DbErr;
use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Any failure during the drop/create/seed sequence. Always fatal to the
    /// host process; never retried automatically.
    #[error("schema initialization failed: {source}")]
    SchemaInitialization {
        /// Underlying driver error, kept for diagnostics.
        #[source]
        source: DbErr,
    },

    /// Any failure while persisting an order header or line item. The
    /// enclosing transaction has been rolled back by the time this surfaces.
    #[error("order persistence failed while {context}: {source}")]
    OrderPersistence {
        /// The statement that was in progress (e.g. which line item).
        context: String,
        /// Underlying driver error.
        #[source]
        source: DbErr,
    },

    /// Inability to open a connection or a transaction scope at all.
    #[error("database connectivity failure: {source}")]
    Connectivity {
        /// Underlying driver error.
        #[source]
        source: DbErr,
    },

    /// An order with no line items was submitted. Rejected before any
    /// statement is issued.
    #[error("order contains no line items")]
    EmptyOrder,

    /// Configuration error (bad or missing settings).
    #[error("configuration error: {message}")]
    Config {
        /// Description of what was wrong.
        message: String,
    },

    /// Uncontextualized database error, for generic helper paths.
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

/// Convenience `Result` type.
pub type Result<T> = std::result::Result<T, Error>;
