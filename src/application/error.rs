use thiserror::Error;

use crate::bank::IdExhausted;
use crate::domain::{AccountId, LedgerViolation, PinHashError, UserId};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    #[error("account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("account index {index} is out of range (user has {count} accounts)")]
    InvalidIndex { index: usize, count: usize },

    /// Deliberately undifferentiated: an unknown id and a wrong PIN
    /// produce the same error, so callers cannot enumerate users.
    #[error("incorrect user id/pin combination")]
    AuthenticationFailed,

    #[error(transparent)]
    Ledger(#[from] LedgerViolation),

    #[error(transparent)]
    IdExhausted(#[from] IdExhausted),

    #[error(transparent)]
    Credential(#[from] PinHashError),
}
