//! goalpost-audit
//!
//! Application-level audit events for goal mutations.

pub mod events;
