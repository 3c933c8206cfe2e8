//! HTTP endpoint implementations for the account API.

pub mod account_handlers;
pub mod request_utils;
pub mod response;

pub use account_handlers::{
    create_account, delete_account, get_account, list_accounts, update_account,
};
