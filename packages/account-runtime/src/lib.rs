//! Single-writer runtime for the account store.
//!
//! HTTP handlers never touch the store directly. They send an
//! [`AccountRequest`] over a bounded channel and await the reply on a
//! oneshot channel; the [`Runtime`] applies requests one at a time.

mod api_request;
mod runtime;

pub use api_request::{AccountRequest, ResponseSender};
pub use runtime::Runtime;

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, account_core::StoreError>;
