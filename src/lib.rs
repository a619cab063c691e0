//! `BistroCore` - Transactional order persistence for a restaurant point of sale
//!
//! This crate provides the storage core behind a point-of-sale front end: a
//! schema lifecycle manager that rebuilds and seeds the relational schema at
//! process start, and an order transaction writer that persists an order
//! header together with its line items as a single all-or-nothing unit.
//! Everything above it (table views, order display, menus) talks to the
//! database only through these two operations and plain read queries.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    unsafe_code,
    unsafe_op_in_unsafe_fn,
    unreachable_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unwrap_used,
    future_incompatible,
    rust_2018_idioms
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,       // Will add gradually
    clippy::missing_panics_doc        // Will add gradually
)]

/// Configuration for the database connection
pub mod config;
/// Core storage operations - schema lifecycle and order persistence
pub mod core;
/// SeaORM entity definitions for database tables
pub mod entities;
/// Unified error types and result handling
pub mod errors;

#[cfg(test)]
pub mod test_utils;
