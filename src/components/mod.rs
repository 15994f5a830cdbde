//! Shared UI components.

pub mod guard;
pub mod header;
