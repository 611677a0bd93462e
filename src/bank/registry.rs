use std::collections::HashMap;

use crate::domain::{Account, AccountId, User, UserId};

/// The in-memory root of the ledger: one instance per process, owning
/// every user and every account across all users. Nothing here persists;
/// process exit discards all state. The bank is always passed explicitly,
/// never reached through a global.
#[derive(Debug, Default)]
pub struct Bank {
    name: String,
    users: HashMap<UserId, User>,
    accounts: HashMap<AccountId, Account>,
}

impl Bank {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            users: HashMap::new(),
            accounts: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a user. The id is assumed unique because it came from the
    /// issuer, which checked current membership.
    pub fn add_user(&mut self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    /// Register an account bank-wide. Same uniqueness assumption as users.
    pub fn add_account(&mut self, account: Account) {
        self.accounts.insert(account.id.clone(), account);
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    pub fn user_mut(&mut self, id: &str) -> Option<&mut User> {
        self.users.get_mut(id)
    }

    pub fn account(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    pub fn account_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.get_mut(id)
    }

    pub fn has_user_id(&self, id: &str) -> bool {
        self.users.contains_key(id)
    }

    pub fn has_account_id(&self, id: &str) -> bool {
        self.accounts.contains_key(id)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Look up a user by credentials. A match requires exact id equality
    /// and PIN verification; any mismatch yields the same `None`, so a
    /// caller cannot tell an unknown id from a wrong PIN.
    pub fn login(&self, user_id: &str, pin: &str) -> Option<&User> {
        self.users
            .values()
            .find(|user| user.id == user_id && user.validate_pin(pin))
    }
}
