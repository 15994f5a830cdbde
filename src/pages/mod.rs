//! Application pages, one module per route.

pub mod admin;
pub mod chef;
pub mod login;
pub mod manager;
pub mod unauthorized;
pub mod user;
