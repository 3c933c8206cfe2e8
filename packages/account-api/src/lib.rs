//! REST API server for the account store.
//!
//! Provides HTTP endpoints for account create, list, get, update and
//! delete, plus request routing.

pub mod handlers;
pub mod router;
pub mod server;
