//! Accounts and transaction application rules.

use serde::{Deserialize, Serialize};

use miniops_core::{DomainError, DomainResult};

use crate::transaction::{Transaction, format_amount};

/// Account behavior variant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Applies any transaction; the balance may go negative.
    Checking,
    /// Refuses a transaction whose amount exceeds the balance.
    Savings,
}

/// A bank account with a balance in smallest currency unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    number: String,
    balance: i64,
    kind: AccountKind,
}

impl Account {
    pub fn new(number: impl Into<String>, initial_balance: i64, kind: AccountKind) -> Self {
        Self {
            number: number.into(),
            balance: initial_balance,
            kind,
        }
    }

    pub fn checking(number: impl Into<String>, initial_balance: i64) -> Self {
        Self::new(number, initial_balance, AccountKind::Checking)
    }

    pub fn savings(number: impl Into<String>, initial_balance: i64) -> Self {
        Self::new(number, initial_balance, AccountKind::Savings)
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    /// Deduct the transaction amount, returning the new balance.
    ///
    /// A savings account refuses an amount exceeding the balance; the
    /// balance is unchanged on refusal.
    pub fn apply(&mut self, tx: &Transaction) -> DomainResult<i64> {
        if self.kind == AccountKind::Savings && tx.amount > self.balance {
            return Err(DomainError::insufficient_funds(format!(
                "{} exceeds balance {}",
                format_amount(tx.amount),
                format_amount(self.balance),
            )));
        }
        self.balance -= tx.amount;
        Ok(self.balance)
    }
}
