//! Store error types.

use thiserror::Error;

/// Account store operation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An account with this first name is already stored
    #[error("Account '{name}' already exists")]
    AlreadyExists { name: String },

    /// No account with this first name
    #[error("Account '{name}' not found")]
    NotFound { name: String },
}
