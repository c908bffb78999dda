//! goalpost-core
//!
//! Pure domain types, the list query filter, and data file conventions.
//! No I/O here: this is the shared vocabulary of the Goalpost service.

pub mod data_files;
pub mod models;
pub mod query;
