use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AccountId, PinHash};

/// Bank-issued user identifier: a 6-digit numeric string, unique within
/// the issuing bank for the lifetime of the process.
pub type UserId = String;

/// A bank customer: holds the PIN credential and an ordered list of
/// account ids. The id is the canonical way to address an account; the
/// position in the list is only a convenience projection for the teller
/// console, which numbers accounts 1..=n.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pin_hash: PinHash,
    accounts: Vec<AccountId>,
}

impl User {
    pub fn new(
        id: UserId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        pin_hash: PinHash,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            created_at: Utc::now(),
            pin_hash,
            accounts: Vec::new(),
        }
    }

    /// Check a candidate PIN against the stored hash.
    pub fn validate_pin(&self, candidate: &str) -> bool {
        self.pin_hash.verify(candidate)
    }

    /// Append an account to the ordered list. The list only grows; the
    /// caller guarantees the id belongs to this user and is not a duplicate.
    pub fn add_account(&mut self, account: AccountId) {
        self.accounts.push(account);
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Positional lookup over the creation-ordered account list.
    /// Out-of-range indexes are the caller's error to surface, never clamped.
    pub fn account_at(&self, index: usize) -> Option<&AccountId> {
        self.accounts.get(index)
    }

    pub fn account_ids(&self) -> &[AccountId] {
        &self.accounts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "123456".to_string(),
            "John",
            "Doe",
            PinHash::new("1234").unwrap(),
        )
    }

    #[test]
    fn test_validate_pin() {
        let user = sample_user();
        assert!(user.validate_pin("1234"));
        assert!(!user.validate_pin("4321"));
    }

    #[test]
    fn test_accounts_keep_creation_order() {
        let mut user = sample_user();
        user.add_account("0000000001".to_string());
        user.add_account("0000000002".to_string());

        assert_eq!(user.account_count(), 2);
        assert_eq!(user.account_ids(), ["0000000001", "0000000002"]);
        assert_eq!(user.account_at(0).unwrap(), "0000000001");
        assert_eq!(user.account_at(1).unwrap(), "0000000002");
    }

    #[test]
    fn test_account_at_out_of_range() {
        let mut user = sample_user();
        assert!(user.account_at(0).is_none());
        user.add_account("0000000001".to_string());
        assert!(user.account_at(1).is_none());
    }
}
