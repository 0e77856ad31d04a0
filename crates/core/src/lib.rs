//! Core domain for the blackhole request-capture service.
//!
//! Everything in this crate is pure: request encoding, the persisted record
//! shape, and the storage contract that the server's engines implement.

pub mod request;
pub mod storage;
