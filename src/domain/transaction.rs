use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AccountId, Cents, format_cents};

pub type TransactionId = Uuid;

/// A single signed ledger entry on an account. Transactions are immutable:
/// once appended to an account they are never altered or removed, so an
/// account's history is the complete story of its balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    /// Signed amount in cents: positive credits the account, negative debits it.
    amount_cents: Cents,
    /// When the entry was posted. Set at creation, never touched again.
    timestamp: DateTime<Utc>,
    /// Free-form note, empty when the caller supplied none.
    memo: String,
    /// The account this entry was posted to.
    account: AccountId,
}

impl Transaction {
    pub fn new(amount_cents: Cents, account: AccountId) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount_cents,
            timestamp: Utc::now(),
            memo: String::new(),
            account,
        }
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn amount_cents(&self) -> Cents {
        self.amount_cents
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn memo(&self) -> &str {
        &self.memo
    }

    pub fn account(&self) -> &AccountId {
        &self.account
    }

    pub fn is_credit(&self) -> bool {
        self.amount_cents >= 0
    }

    /// One history line: timestamp, signed amount, memo.
    /// Debits render the amount in parentheses.
    pub fn summary_line(&self) -> String {
        let when = self.timestamp.format("%Y-%m-%d %H:%M:%S");
        if self.is_credit() {
            format!("{} : ${} : {}", when, format_cents(self.amount_cents), self.memo)
        } else {
            format!("{} : $({}) : {}", when, format_cents(self.amount_cents), self.memo)
        }
    }
}
