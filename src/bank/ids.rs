use rand::Rng;
use thiserror::Error;

use crate::domain::{AccountId, UserId};

use super::Bank;

/// User ids are 6-digit numeric strings.
pub const USER_ID_DIGITS: usize = 6;
/// Account ids are 10-digit numeric strings.
pub const ACCOUNT_ID_DIGITS: usize = 10;

const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Issues bank-unique numeric identifiers by drawing random digit strings
/// and retrying on collision with the ids currently registered. The retry
/// loop is bounded: a saturated id space surfaces as an explicit error
/// instead of spinning forever.
#[derive(Debug, Clone)]
pub struct IdIssuer {
    max_attempts: usize,
}

impl Default for IdIssuer {
    fn default() -> Self {
        Self::new()
    }
}

impl IdIssuer {
    pub fn new() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// Issue a user id unique among the bank's registered users.
    pub fn user_id(&self, bank: &Bank) -> Result<UserId, IdExhausted> {
        self.issue(USER_ID_DIGITS, |candidate| bank.has_user_id(candidate))
    }

    /// Issue an account id unique among all accounts across all users.
    pub fn account_id(&self, bank: &Bank) -> Result<AccountId, IdExhausted> {
        self.issue(ACCOUNT_ID_DIGITS, |candidate| bank.has_account_id(candidate))
    }

    /// Draw random fixed-length digit strings until one is free or the
    /// attempt budget runs out.
    pub fn issue(
        &self,
        digits: usize,
        is_taken: impl Fn(&str) -> bool,
    ) -> Result<String, IdExhausted> {
        let mut rng = rand::thread_rng();
        for _ in 0..self.max_attempts {
            let candidate: String = (0..digits)
                .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
                .collect();
            if !is_taken(&candidate) {
                return Ok(candidate);
            }
        }
        Err(IdExhausted {
            attempts: self.max_attempts,
        })
    }
}

/// The id space was saturated: every candidate drawn within the attempt
/// budget collided with a registered id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("identifier space exhausted after {attempts} attempts")]
pub struct IdExhausted {
    pub attempts: usize,
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_issued_ids_are_fixed_length_digits() {
        let issuer = IdIssuer::new();
        let id = issuer.issue(USER_ID_DIGITS, |_| false).unwrap();
        assert_eq!(id.len(), USER_ID_DIGITS);
        assert!(id.chars().all(|c| c.is_ascii_digit()));

        let id = issuer.issue(ACCOUNT_ID_DIGITS, |_| false).unwrap();
        assert_eq!(id.len(), ACCOUNT_ID_DIGITS);
        assert!(id.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_issue_skips_taken_candidates() {
        let issuer = IdIssuer::new();
        let mut taken = HashSet::new();
        for _ in 0..50 {
            let id = issuer.issue(4, |candidate| taken.contains(candidate)).unwrap();
            assert!(taken.insert(id), "issuer returned a taken id");
        }
    }

    #[test]
    fn test_saturated_space_fails_after_bounded_attempts() {
        let issuer = IdIssuer::with_max_attempts(7);
        let err = issuer.issue(USER_ID_DIGITS, |_| true).unwrap_err();
        assert_eq!(err, IdExhausted { attempts: 7 });
    }
}
