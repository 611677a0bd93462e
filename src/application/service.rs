use crate::bank::{Bank, IdIssuer};
use crate::domain::{
    Account, AccountId, Cents, PinHash, Transaction, User, validate_deposit, validate_transfer,
    validate_withdrawal,
};

use super::AppError;

/// Every newly registered user gets one account with this name. The
/// coupling is a deliberate default policy of the bank, not an accident.
pub const DEFAULT_ACCOUNT_NAME: &str = "Savings";

/// Application service providing the teller-facing operations on one bank.
/// This is the primary interface for any client (console, tests, a future
/// API front-end); all balance mutations funnel through it.
pub struct TellerService {
    bank: Bank,
    ids: IdIssuer,
}

/// The two legs of a completed transfer.
#[derive(Debug)]
pub struct TransferReceipt {
    pub debit: Transaction,
    pub credit: Transaction,
}

impl TellerService {
    pub fn new(bank_name: impl Into<String>) -> Self {
        Self {
            bank: Bank::new(bank_name),
            ids: IdIssuer::new(),
        }
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    // ========================
    // Registration and login
    // ========================

    /// Register a new user and auto-provision their default account.
    pub fn register_user(
        &mut self,
        first_name: &str,
        last_name: &str,
        pin: &str,
    ) -> Result<User, AppError> {
        let pin_hash = PinHash::new(pin)?;
        let user_id = self.ids.user_id(&self.bank)?;
        let account_id = self.ids.account_id(&self.bank)?;

        let mut user = User::new(user_id, first_name, last_name, pin_hash);
        let account = Account::new(account_id.clone(), DEFAULT_ACCOUNT_NAME, user.id.clone());
        user.add_account(account_id);

        self.bank.add_user(user.clone());
        self.bank.add_account(account);

        tracing::info!(
            user_id = %user.id,
            "registered new user {}, {}",
            user.last_name,
            user.first_name
        );
        Ok(user)
    }

    /// Open an additional named account for an existing user.
    pub fn open_account(&mut self, user_id: &str, name: &str) -> Result<Account, AppError> {
        if !self.bank.has_user_id(user_id) {
            return Err(AppError::UserNotFound(user_id.to_string()));
        }
        let account_id = self.ids.account_id(&self.bank)?;
        let account = Account::new(account_id.clone(), name, user_id.to_string());

        let user = self
            .bank
            .user_mut(user_id)
            .ok_or_else(|| AppError::UserNotFound(user_id.to_string()))?;
        user.add_account(account_id);
        self.bank.add_account(account.clone());

        tracing::info!(
            account_id = %account.id,
            user_id = %user_id,
            "opened account {:?}",
            account.name
        );
        Ok(account)
    }

    /// Resolve a user by credentials. Any mismatch, unknown id or wrong
    /// PIN alike, yields the same `AuthenticationFailed`.
    pub fn login(&self, user_id: &str, pin: &str) -> Result<&User, AppError> {
        match self.bank.login(user_id, pin) {
            Some(user) => {
                tracing::debug!(user_id = %user.id, "user logged in");
                Ok(user)
            }
            None => {
                tracing::debug!("rejected login attempt");
                Err(AppError::AuthenticationFailed)
            }
        }
    }

    // ========================
    // Account lookups
    // ========================

    pub fn account_count(&self, user_id: &str) -> Result<usize, AppError> {
        Ok(self.user(user_id)?.account_count())
    }

    /// Id of the account at `index` in the user's creation-ordered list.
    pub fn account_id(&self, user_id: &str, index: usize) -> Result<AccountId, AppError> {
        self.resolve_account_id(user_id, index)
    }

    pub fn account_balance(&self, user_id: &str, index: usize) -> Result<Cents, AppError> {
        let account_id = self.resolve_account_id(user_id, index)?;
        Ok(self.find_account(&account_id)?.balance())
    }

    /// Canonical lookup by account id. Index-based access above is only a
    /// projection over the user's ordered id list.
    pub fn find_account(&self, account_id: &str) -> Result<&Account, AppError> {
        self.bank
            .account(account_id)
            .ok_or_else(|| AppError::AccountNotFound(account_id.to_string()))
    }

    /// One summary line per account, in creation order.
    pub fn accounts_summary(&self, user_id: &str) -> Result<Vec<String>, AppError> {
        let user = self.user(user_id)?;
        user.account_ids()
            .iter()
            .map(|id| Ok(self.find_account(id)?.summary_line()))
            .collect()
    }

    /// Transaction history of one account, most recent entry first.
    pub fn account_history(&self, user_id: &str, index: usize) -> Result<Vec<String>, AppError> {
        let account_id = self.resolve_account_id(user_id, index)?;
        Ok(self.find_account(&account_id)?.history_lines())
    }

    // ========================
    // Ledger operations
    // ========================

    /// Append a signed transaction to the account at `index`. This is the
    /// sole mutation entry point for balances; it performs no validation,
    /// callers run the full protocol checks before posting anything.
    pub fn record_transaction(
        &mut self,
        user_id: &str,
        index: usize,
        amount_cents: Cents,
        memo: Option<String>,
    ) -> Result<Transaction, AppError> {
        let account_id = self.resolve_account_id(user_id, index)?;
        self.post(&account_id, amount_cents, memo)
    }

    /// Deposit a positive amount into the account at `index`.
    pub fn deposit(
        &mut self,
        user_id: &str,
        index: usize,
        amount_cents: Cents,
        memo: Option<String>,
    ) -> Result<Transaction, AppError> {
        let account_id = self.resolve_account_id(user_id, index)?;
        validate_deposit(amount_cents)?;
        self.post(&account_id, amount_cents, memo)
    }

    /// Withdraw a positive amount covered by the current balance from the
    /// account at `index`.
    pub fn withdraw(
        &mut self,
        user_id: &str,
        index: usize,
        amount_cents: Cents,
        memo: Option<String>,
    ) -> Result<Transaction, AppError> {
        let account_id = self.resolve_account_id(user_id, index)?;
        let balance = self.find_account(&account_id)?.balance();
        validate_withdrawal(amount_cents, balance)?;
        self.post(&account_id, -amount_cents, memo)
    }

    /// Move a positive amount between two of the user's accounts. The
    /// whole protocol validates before either leg posts, so either both
    /// transactions land or none does; each leg's memo names the opposite
    /// account.
    pub fn transfer(
        &mut self,
        user_id: &str,
        from_index: usize,
        to_index: usize,
        amount_cents: Cents,
    ) -> Result<TransferReceipt, AppError> {
        let source = self.resolve_account_id(user_id, from_index)?;
        let target = self.resolve_account_id(user_id, to_index)?;
        let source_balance = self.find_account(&source)?.balance();
        validate_transfer(&source, &target, amount_cents, source_balance)?;

        let debit = self.post(
            &source,
            -amount_cents,
            Some(format!("Transfer to account {target}")),
        )?;
        let credit = self.post(
            &target,
            amount_cents,
            Some(format!("Transfer from account {source}")),
        )?;
        Ok(TransferReceipt { debit, credit })
    }

    // ========================
    // Internals
    // ========================

    fn user(&self, user_id: &str) -> Result<&User, AppError> {
        self.bank
            .user(user_id)
            .ok_or_else(|| AppError::UserNotFound(user_id.to_string()))
    }

    fn resolve_account_id(&self, user_id: &str, index: usize) -> Result<AccountId, AppError> {
        let user = self.user(user_id)?;
        user.account_at(index)
            .cloned()
            .ok_or_else(|| AppError::InvalidIndex {
                index,
                count: user.account_count(),
            })
    }

    fn post(
        &mut self,
        account_id: &AccountId,
        amount_cents: Cents,
        memo: Option<String>,
    ) -> Result<Transaction, AppError> {
        let mut transaction = Transaction::new(amount_cents, account_id.clone());
        if let Some(memo) = memo {
            transaction = transaction.with_memo(memo);
        }

        let account = self
            .bank
            .account_mut(account_id)
            .ok_or_else(|| AppError::AccountNotFound(account_id.clone()))?;
        account.append(transaction.clone());

        tracing::debug!(
            account_id = %account_id,
            amount_cents,
            "posted transaction"
        );
        Ok(transaction)
    }
}
