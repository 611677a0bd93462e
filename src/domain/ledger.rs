use super::{AccountId, Cents, Transaction};

/// Sum a transaction history into a balance. The ledger never stores a
/// balance anywhere; every read recomputes it from the append-only history.
pub fn balance_of(transactions: &[Transaction]) -> Cents {
    transactions.iter().map(Transaction::amount_cents).sum()
}

/// A deposit must move a strictly positive amount.
pub fn validate_deposit(amount_cents: Cents) -> Result<(), LedgerViolation> {
    if amount_cents <= 0 {
        return Err(LedgerViolation::NonPositiveAmount {
            amount: amount_cents,
        });
    }
    Ok(())
}

/// A withdrawal must move a strictly positive amount covered by the
/// current balance. The balance is read once, before this check; with a
/// single thread of control nothing can change it before the append.
pub fn validate_withdrawal(amount_cents: Cents, balance: Cents) -> Result<(), LedgerViolation> {
    if amount_cents <= 0 {
        return Err(LedgerViolation::NonPositiveAmount {
            amount: amount_cents,
        });
    }
    if amount_cents > balance {
        return Err(LedgerViolation::InsufficientFunds {
            balance,
            requested: amount_cents,
        });
    }
    Ok(())
}

/// A transfer is a withdrawal from one account paired with a deposit into
/// a different one. All checks pass before either leg posts, so the two
/// appends either both happen or neither does.
pub fn validate_transfer(
    source: &AccountId,
    target: &AccountId,
    amount_cents: Cents,
    source_balance: Cents,
) -> Result<(), LedgerViolation> {
    if source == target {
        return Err(LedgerViolation::SelfTransfer);
    }
    validate_withdrawal(amount_cents, source_balance)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerViolation {
    /// Deposit, withdrawal or transfer of a zero or negative amount.
    NonPositiveAmount { amount: Cents },
    /// Withdrawal or transfer exceeding the current balance.
    InsufficientFunds { balance: Cents, requested: Cents },
    /// Transfer whose source and target are the same account.
    SelfTransfer,
}

impl std::fmt::Display for LedgerViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerViolation::NonPositiveAmount { amount } => {
                write!(f, "amount must be greater than zero, got {} cents", amount)
            }
            LedgerViolation::InsufficientFunds { balance, requested } => {
                write!(
                    f,
                    "insufficient funds: requested {} cents with a balance of {} cents",
                    requested, balance
                )
            }
            LedgerViolation::SelfTransfer => {
                write!(f, "source and target account must be different")
            }
        }
    }
}

impl std::error::Error for LedgerViolation {}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(amount: Cents) -> Transaction {
        Transaction::new(amount, "0000000001".to_string())
    }

    #[test]
    fn test_balance_of_empty_history() {
        assert_eq!(balance_of(&[]), 0);
    }

    #[test]
    fn test_balance_of_mixed_history() {
        let history = vec![entry(10000), entry(-1500), entry(-500), entry(1)];
        assert_eq!(balance_of(&history), 8001);
    }

    #[test]
    fn test_balance_tracks_every_prefix() {
        let history = vec![entry(100), entry(-40), entry(25), entry(-85)];
        for len in 0..=history.len() {
            let expected: Cents = history[..len].iter().map(Transaction::amount_cents).sum();
            assert_eq!(balance_of(&history[..len]), expected);
        }
        assert_eq!(balance_of(&history), 0);
    }

    #[test]
    fn test_deposit_rejects_non_positive() {
        assert_eq!(
            validate_deposit(0),
            Err(LedgerViolation::NonPositiveAmount { amount: 0 })
        );
        assert_eq!(
            validate_deposit(-500),
            Err(LedgerViolation::NonPositiveAmount { amount: -500 })
        );
        assert_eq!(validate_deposit(1), Ok(()));
    }

    #[test]
    fn test_withdrawal_rejects_overdraft() {
        assert_eq!(
            validate_withdrawal(15000, 10000),
            Err(LedgerViolation::InsufficientFunds {
                balance: 10000,
                requested: 15000
            })
        );
        assert_eq!(validate_withdrawal(10000, 10000), Ok(()));
    }

    #[test]
    fn test_withdrawal_rejects_non_positive_before_balance() {
        // a zero withdrawal is a sign error even when the balance is zero
        assert_eq!(
            validate_withdrawal(0, 0),
            Err(LedgerViolation::NonPositiveAmount { amount: 0 })
        );
    }

    #[test]
    fn test_transfer_rejects_same_account() {
        let account = "0000000001".to_string();
        assert_eq!(
            validate_transfer(&account, &account, 100, 1000),
            Err(LedgerViolation::SelfTransfer)
        );
    }

    #[test]
    fn test_transfer_applies_withdrawal_rules() {
        let source = "0000000001".to_string();
        let target = "0000000002".to_string();
        assert_eq!(validate_transfer(&source, &target, 100, 1000), Ok(()));
        assert_eq!(
            validate_transfer(&source, &target, 2000, 1000),
            Err(LedgerViolation::InsufficientFunds {
                balance: 1000,
                requested: 2000
            })
        );
    }
}
