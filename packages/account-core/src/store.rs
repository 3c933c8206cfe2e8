//! Ordered in-memory account store.

use crate::account::Account;
use crate::error::StoreError;

/// In-memory collection of accounts in insertion order.
///
/// First names are unique: `create` and `update` reject a first name that
/// already belongs to another record, so every lookup has at most one match.
/// The store is not synchronized; callers serialize access through a single
/// owner.
#[derive(Debug, Default, Clone)]
pub struct AccountStore {
    accounts: Vec<Account>,
}

impl AccountStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            accounts: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of stored accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if no accounts are stored.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Returns all accounts in insertion order.
    pub fn list(&self) -> &[Account] {
        &self.accounts
    }

    /// Looks up an account by first name.
    pub fn get(&self, name: &str) -> Result<&Account, StoreError> {
        self.position(name)
            .map(|index| &self.accounts[index])
            .ok_or_else(|| StoreError::NotFound {
                name: name.to_string(),
            })
    }

    /// Appends a new account.
    ///
    /// # Errors
    /// `StoreError::AlreadyExists` if the first name is taken.
    pub fn create(&mut self, account: Account) -> Result<&Account, StoreError> {
        if self.position(account.key()).is_some() {
            return Err(StoreError::AlreadyExists {
                name: account.first_name,
            });
        }

        tracing::debug!("Storing account '{}'", account.key());
        self.accounts.push(account);
        let last = self.accounts.len() - 1;
        Ok(&self.accounts[last])
    }

    /// Overwrites the account stored under `name`, keeping its position.
    ///
    /// The new first name may differ from `name`, which renames the record.
    ///
    /// # Errors
    /// - `StoreError::NotFound` if no account has `name`
    /// - `StoreError::AlreadyExists` if the new first name belongs to another record
    pub fn update(&mut self, name: &str, account: Account) -> Result<&Account, StoreError> {
        let index = self.position(name).ok_or_else(|| StoreError::NotFound {
            name: name.to_string(),
        })?;

        if account.key() != name && self.position(account.key()).is_some() {
            return Err(StoreError::AlreadyExists {
                name: account.first_name,
            });
        }

        if account.key() != name {
            tracing::debug!("Renaming account '{}' to '{}'", name, account.key());
        }
        self.accounts[index] = account;
        Ok(&self.accounts[index])
    }

    /// Removes and returns the account stored under `name`.
    ///
    /// The relative order of the remaining accounts is preserved.
    pub fn delete(&mut self, name: &str) -> Result<Account, StoreError> {
        let index = self.position(name).ok_or_else(|| StoreError::NotFound {
            name: name.to_string(),
        })?;
        Ok(self.accounts.remove(index))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.accounts.iter().position(|acc| acc.key() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> AccountStore {
        let mut store = AccountStore::new();
        store.create(Account::new("ann", "lee", 555, "x")).unwrap();
        store.create(Account::new("bob", "ray", 556, "y")).unwrap();
        store.create(Account::new("cat", "kim", 557, "z")).unwrap();
        store
    }

    fn names(store: &AccountStore) -> Vec<&str> {
        store.list().iter().map(Account::key).collect()
    }

    #[test]
    fn test_create_appends_in_order() {
        let store = seeded();
        assert_eq!(store.len(), 3);
        assert_eq!(names(&store), vec!["ann", "bob", "cat"]);
    }

    #[test]
    fn test_create_duplicate_rejected() {
        let mut store = seeded();
        let err = store
            .create(Account::new("bob", "other", 1, "p"))
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::AlreadyExists {
                name: "bob".to_string()
            }
        );
        assert_eq!(store.len(), 3);
        assert_eq!(store.get("bob").unwrap().last_name, "ray");
    }

    #[test]
    fn test_get_miss() {
        let store = seeded();
        assert!(matches!(
            store.get("zed"),
            Err(StoreError::NotFound { .. })
        ));
        assert!(AccountStore::new().get("ann").is_err());
    }

    #[test]
    fn test_update_in_place() -> anyhow::Result<()> {
        let mut store = seeded();
        let updated = store.update("bob", Account::new("bob", "new", 9, "q"))?;
        assert_eq!(updated.last_name, "new");
        assert_eq!(names(&store), vec!["ann", "bob", "cat"]);
        assert_eq!(store.get("bob")?.mobile_number, 9);
        Ok(())
    }

    #[test]
    fn test_update_rename_moves_key() -> anyhow::Result<()> {
        let mut store = seeded();
        store.update("bob", Account::new("rob", "ray", 556, "y"))?;
        assert!(store.get("bob").is_err());
        assert_eq!(store.get("rob")?.last_name, "ray");
        assert_eq!(names(&store), vec!["ann", "rob", "cat"]);
        Ok(())
    }

    #[test]
    fn test_update_rename_onto_existing_rejected() {
        let mut store = seeded();
        let err = store
            .update("bob", Account::new("cat", "ray", 556, "y"))
            .unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists { name } if name == "cat"));
        assert_eq!(names(&store), vec!["ann", "bob", "cat"]);
    }

    #[test]
    fn test_update_miss() {
        let mut store = seeded();
        assert!(matches!(
            store.update("zed", Account::new("zed", "a", 1, "b")),
            Err(StoreError::NotFound { .. })
        ));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut store = seeded();
        let removed = store.delete("bob").unwrap();
        assert_eq!(removed.first_name, "bob");
        assert_eq!(names(&store), vec!["ann", "cat"]);
        assert!(store.get("bob").is_err());
    }

    #[test]
    fn test_delete_miss_leaves_store() {
        let mut store = seeded();
        assert!(store.delete("zed").is_err());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_with_capacity_is_empty() {
        let store = AccountStore::with_capacity(16);
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }
}
