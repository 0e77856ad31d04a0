//! blackhole_client - CLI client for the blackhole capture server.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::BlackholeClient;
pub use error::{ClientError, Result};
