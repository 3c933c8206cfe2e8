//! Requests sent from the API layer to the runtime.

use account_core::Account;
use tokio::sync::oneshot;

use crate::Result;

/// Reply channel for a runtime request
pub type ResponseSender<T> = oneshot::Sender<Result<T>>;

/// Store operation requested by an HTTP handler
#[derive(Debug)]
pub enum AccountRequest {
    /// Append a new account
    Create {
        account: Account,
        response: ResponseSender<Account>,
    },
    /// Snapshot every account in store order
    List {
        response: ResponseSender<Vec<Account>>,
    },
    /// Look up one account by first name
    Get {
        name: String,
        response: ResponseSender<Account>,
    },
    /// Overwrite the account stored under `name`
    Update {
        name: String,
        account: Account,
        response: ResponseSender<Account>,
    },
    /// Remove the account stored under `name`
    Delete {
        name: String,
        response: ResponseSender<Account>,
    },
}

impl AccountRequest {
    /// Returns true if this request changes the store.
    pub fn is_mutation(&self) -> bool {
        match self {
            AccountRequest::Create { .. } => true,
            AccountRequest::Update { .. } => true,
            AccountRequest::Delete { .. } => true,
            AccountRequest::List { .. } => false,
            AccountRequest::Get { .. } => false,
        }
    }

    /// Short operation name for logging.
    pub fn operation(&self) -> &'static str {
        match self {
            AccountRequest::Create { .. } => "create",
            AccountRequest::List { .. } => "list",
            AccountRequest::Get { .. } => "get",
            AccountRequest::Update { .. } => "update",
            AccountRequest::Delete { .. } => "delete",
        }
    }
}
