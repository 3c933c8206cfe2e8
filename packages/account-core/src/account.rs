//! Account record.

use serde::{Deserialize, Serialize};

/// A user account, keyed by first name.
///
/// Field names on the wire are lowercase without separators
/// (`firstname`, `lastname`, `mobilenumber`, `password`). All four
/// fields are required when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// First name, unique across the store
    #[serde(rename = "firstname")]
    pub first_name: String,
    /// Last name
    #[serde(rename = "lastname")]
    pub last_name: String,
    /// Mobile number
    #[serde(rename = "mobilenumber")]
    pub mobile_number: i64,
    /// Password, stored as given
    pub password: String,
}

impl Account {
    /// Creates a new account.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        mobile_number: i64,
        password: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            mobile_number,
            password: password.into(),
        }
    }

    /// Returns the lookup key of this account.
    pub fn key(&self) -> &str {
        &self.first_name
    }
}
