//! goalpost-storage
//!
//! Flat JSON file persistence and the in-memory store built on top of it.

pub mod collections;
pub mod error;
pub mod store;
