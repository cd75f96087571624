//! Account store
//!
//! Ordered in-memory collection of accounts. Store order matters: username
//! lookups return the first match.

use uuid::Uuid;

use super::username::assign_usernames;
use super::Account;

/// In-memory account collection, alive for the lifetime of the process
#[derive(Debug, Clone, Default)]
pub struct AccountStore {
    accounts: Vec<Account>,
}

impl AccountStore {
    /// Build a store and derive every account's username
    pub fn new(mut accounts: Vec<Account>) -> Self {
        assign_usernames(&mut accounts);
        tracing::debug!(accounts = accounts.len(), "Account store initialized");
        Self { accounts }
    }

    /// Store seeded with the demo accounts
    pub fn demo() -> Self {
        Self::new(crate::seed::demo_accounts())
    }

    /// First account holding `username`
    pub fn find_by_username(&self, username: &str) -> Option<&Account> {
        self.accounts.iter().find(|acc| acc.username() == username)
    }

    /// Position of the first account holding `username`
    pub fn position_of(&self, username: &str) -> Option<usize> {
        self.accounts.iter().position(|acc| acc.username() == username)
    }

    pub fn get(&self, id: Uuid) -> Option<&Account> {
        self.accounts.iter().find(|acc| acc.id() == id)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|acc| acc.id() == id)
    }

    /// Remove the account at `index`, shifting later accounts down
    pub fn remove(&mut self, index: usize) -> Option<Account> {
        if index < self.accounts.len() {
            Some(self.accounts.remove(index))
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Pin;
    use rust_decimal_macros::dec;

    fn account(owner: &str) -> Account {
        Account::new(owner, vec![dec!(100)], dec!(1), Pin::new(1))
    }

    #[test]
    fn test_demo_store_usernames() {
        let store = AccountStore::demo();
        let usernames: Vec<&str> = store.iter().map(|acc| acc.username()).collect();
        assert_eq!(usernames, vec!["js", "jd", "stw", "ss"]);
    }

    #[test]
    fn test_find_by_username() {
        let store = AccountStore::demo();

        let account = store.find_by_username("jd").unwrap();
        assert_eq!(account.owner(), "Jessica Davis");
        assert!(store.find_by_username("JD").is_none());
        assert!(store.find_by_username("").is_none());
    }

    #[test]
    fn test_username_collision_resolves_to_first() {
        let store = AccountStore::new(vec![account("Ann Lee"), account("Adam Lin")]);
        let first_id = store.iter().next().unwrap().id();

        assert_eq!(store.find_by_username("al").unwrap().id(), first_id);
        assert_eq!(store.position_of("al"), Some(0));
    }

    #[test]
    fn test_remove_shifts_positions() {
        let mut store = AccountStore::demo();

        let removed = store.remove(1).unwrap();
        assert_eq!(removed.username(), "jd");
        assert_eq!(store.len(), 3);
        assert_eq!(store.position_of("stw"), Some(1));
        assert!(store.remove(3).is_none());
    }

    #[test]
    fn test_get_mut_by_id() {
        let mut store = AccountStore::new(vec![account("Ann Lee")]);
        let id = store.iter().next().unwrap().id();

        store.get_mut(id).unwrap().record(dec!(-40));
        assert_eq!(store.get(id).unwrap().balance(), dec!(60));
        assert!(store.get(Uuid::new_v4()).is_none());
    }
}
