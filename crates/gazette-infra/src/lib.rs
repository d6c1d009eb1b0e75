//! # Gazette Infrastructure
//!
//! Concrete implementations of the ports defined in `gazette-core`.
//! This crate contains the database-backed and in-memory post stores.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL database support via SeaORM

pub mod database;

// Re-exports - In-Memory
pub use database::InMemoryPostRepository;

pub use database::DatabaseConnections;

#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;
