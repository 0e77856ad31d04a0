//! PostgreSQL storage backend implementation.
//!
//! This module provides the network-reachable engine using `sqlx` with a
//! tokio runtime and rustls for transport encryption.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::{PostgresOptions, PostgresRepository};
