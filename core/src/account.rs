//! Bank account handle with validated mutations.

use capsule_types::AccountConfig;
use thiserror::Error;

/// Rejected account operation. The balance is never mutated on the error
/// path, so a failed deposit or withdrawal is always safely retryable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    #[error("amount must be a finite, positive number (got {amount})")]
    InvalidAmount { amount: f64 },
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: f64, available: f64 },
}

/// A bank account that exclusively owns its balance.
///
/// The balance is only reachable through `deposit`/`withdraw`/`balance`;
/// both mutating operations validate their argument before touching state.
#[derive(Debug, Clone)]
pub struct BankAccount {
    balance: f64,
}

fn validate_amount(amount: f64) -> Result<(), AccountError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(AccountError::InvalidAmount { amount })
    }
}

impl BankAccount {
    #[must_use]
    pub fn new(config: AccountConfig) -> Self {
        Self {
            balance: config.opening_balance(),
        }
    }

    /// Add `amount` to the balance and return the new balance.
    pub fn deposit(&mut self, amount: f64) -> Result<f64, AccountError> {
        validate_amount(amount)?;
        self.balance += amount;
        Ok(self.balance)
    }

    /// Remove `amount` from the balance and return the new balance.
    ///
    /// Fails with [`AccountError::InsufficientFunds`] when `amount` exceeds
    /// the current balance.
    pub fn withdraw(&mut self, amount: f64) -> Result<f64, AccountError> {
        validate_amount(amount)?;
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }

    #[must_use]
    pub fn balance(&self) -> f64 {
        self.balance
    }
}

impl Default for BankAccount {
    fn default() -> Self {
        Self::new(AccountConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{AccountError, BankAccount};
    use capsule_types::AccountConfig;

    fn account_with(balance: f64) -> BankAccount {
        BankAccount::new(AccountConfig::new(balance).unwrap())
    }

    #[test]
    fn deposit_and_withdraw() {
        let mut account = account_with(100.0);
        assert_eq!(account.deposit(50.0), Ok(150.0));
        assert_eq!(account.withdraw(25.0), Ok(125.0));
        assert_eq!(account.balance(), 125.0);
    }

    #[test]
    fn overdraw_is_rejected_without_mutation() {
        let mut account = account_with(125.0);
        assert_eq!(
            account.withdraw(200.0),
            Err(AccountError::InsufficientFunds {
                requested: 200.0,
                available: 125.0,
            })
        );
        assert_eq!(account.balance(), 125.0);
    }

    #[test]
    fn negative_deposit_is_rejected_without_mutation() {
        let mut account = account_with(125.0);
        assert!(matches!(
            account.deposit(-50.0),
            Err(AccountError::InvalidAmount { .. })
        ));
        assert_eq!(account.balance(), 125.0);
    }

    #[test]
    fn zero_amount_is_rejected() {
        let mut account = account_with(10.0);
        assert!(account.deposit(0.0).is_err());
        assert!(account.withdraw(0.0).is_err());
    }

    #[test]
    fn non_finite_amount_is_rejected_without_mutation() {
        let mut account = account_with(10.0);
        assert!(account.deposit(f64::NAN).is_err());
        assert!(account.withdraw(f64::INFINITY).is_err());
        assert_eq!(account.balance(), 10.0);
    }

    #[test]
    fn accounts_are_independent() {
        let mut a = account_with(100.0);
        let b = account_with(100.0);
        a.deposit(50.0).unwrap();
        assert_eq!(a.balance(), 150.0);
        assert_eq!(b.balance(), 100.0);
    }

    #[test]
    fn withdrawal_of_exact_balance_succeeds() {
        let mut account = account_with(42.0);
        assert_eq!(account.withdraw(42.0), Ok(0.0));
    }
}
