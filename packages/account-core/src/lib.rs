//! Core types for the account service.
//!
//! Provides the account record, the ordered in-memory store,
//! store errors, and server configuration.

pub mod account;
pub mod config;
pub mod error;
pub mod store;

pub use account::Account;
pub use config::ServerConfig;
pub use error::StoreError;
pub use store::AccountStore;
