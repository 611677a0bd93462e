use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Cents, Transaction, UserId, balance_of, format_cents};

/// Bank-issued account identifier: a 10-digit numeric string, unique
/// within the issuing bank for the lifetime of the process.
pub type AccountId = String;

/// An account is an append-only ledger of transactions. The balance is
/// never stored; it is derived from the transaction history on demand, so
/// the two can never diverge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    /// Owning user, informational: the bank and the user's account list
    /// share the account for the whole process lifetime.
    pub holder: UserId,
    pub created_at: DateTime<Utc>,
    transactions: Vec<Transaction>,
}

impl Account {
    pub fn new(id: AccountId, name: impl Into<String>, holder: UserId) -> Self {
        Self {
            id,
            name: name.into(),
            holder,
            created_at: Utc::now(),
            transactions: Vec::new(),
        }
    }

    /// Append a transaction to the ledger. No validation happens here:
    /// amount-sign and balance-sufficiency checks are the caller's duty,
    /// performed in full before any leg is posted.
    pub fn append(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Chronologically ordered, read-only view of the ledger.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Current balance, derived by summing the whole history.
    pub fn balance(&self) -> Cents {
        balance_of(&self.transactions)
    }

    /// One-line account summary: id, signed balance, name.
    pub fn summary_line(&self) -> String {
        let balance = self.balance();
        if balance >= 0 {
            format!("{} : ${} : {}", self.id, format_cents(balance), self.name)
        } else {
            format!("{} : $({}) : {}", self.id, format_cents(balance), self.name)
        }
    }

    /// Transaction history, most recent entry first.
    pub fn history_lines(&self) -> Vec<String> {
        self.transactions
            .iter()
            .rev()
            .map(Transaction::summary_line)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checking() -> Account {
        Account::new("0000000042".to_string(), "Checking", "123456".to_string())
    }

    #[test]
    fn test_new_account_is_empty() {
        let account = checking();
        assert_eq!(account.balance(), 0);
        assert!(account.transactions().is_empty());
        assert!(account.history_lines().is_empty());
    }

    #[test]
    fn test_balance_is_sum_of_history() {
        let mut account = checking();
        account.append(Transaction::new(10000, account.id.clone()));
        account.append(Transaction::new(-2500, account.id.clone()));
        account.append(Transaction::new(1, account.id.clone()));
        assert_eq!(account.balance(), 7501);
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut account = checking();
        account.append(Transaction::new(100, account.id.clone()).with_memo("first"));
        account.append(Transaction::new(200, account.id.clone()).with_memo("second"));

        let memos: Vec<&str> = account.transactions().iter().map(|t| t.memo()).collect();
        assert_eq!(memos, vec!["first", "second"]);
    }

    #[test]
    fn test_history_lines_are_reverse_chronological() {
        let mut account = checking();
        account.append(Transaction::new(100, account.id.clone()).with_memo("first"));
        account.append(Transaction::new(200, account.id.clone()).with_memo("second"));

        let lines = account.history_lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(": second"));
        assert!(lines[1].ends_with(": first"));
    }

    #[test]
    fn test_summary_line_formats_balance() {
        let mut account = checking();
        account.append(Transaction::new(12345, account.id.clone()));
        assert_eq!(account.summary_line(), "0000000042 : $123.45 : Checking");

        account.append(Transaction::new(-20000, account.id.clone()));
        assert_eq!(account.summary_line(), "0000000042 : $(-76.55) : Checking");
    }
}
