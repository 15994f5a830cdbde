//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The session is the only stateful domain in this app; `session` holds the
//! manager and its reactive state, `guard` the pure access decision applied
//! to navigation.

pub mod guard;
pub mod session;
