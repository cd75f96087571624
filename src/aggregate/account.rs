//! Account
//!
//! An account record: owner, derived username, movement history, interest
//! rate and PIN. The balance is never stored; it is recomputed from the
//! movements every time it is read.

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{Amount, DomainError, Pin};
use crate::ledger::{self, Summary};

use super::username::derive_username;

/// A bank account held in the in-memory store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    /// Stable internal handle, never shown to users
    id: Uuid,

    /// Owner's full name
    owner: String,

    /// Login handle derived from the owner name
    username: String,

    /// Signed movements in chronological order
    movements: Vec<Decimal>,

    /// Percentage applied to deposits
    interest_rate: Decimal,

    #[serde(skip_serializing)]
    pin: Pin,
}

impl Account {
    /// Create an account with its username already derived
    pub fn new(
        owner: impl Into<String>,
        movements: Vec<Decimal>,
        interest_rate: Decimal,
        pin: Pin,
    ) -> Self {
        let owner = owner.into();
        let username = derive_username(&owner);

        Self {
            id: Uuid::new_v4(),
            owner,
            username,
            movements,
            interest_rate,
            pin,
        }
    }

    // =========================================================================
    // Movements
    // =========================================================================

    /// Check a withdrawal of `amount` and return the movement to record
    pub fn debit(&self, amount: &Amount) -> Result<Decimal, DomainError> {
        let available = self.balance();
        if available < amount.value() {
            return Err(DomainError::insufficient_balance(amount.value(), available));
        }

        Ok(amount.as_withdrawal())
    }

    /// Check that a deposit of `amount` keeps the balance representable and
    /// return the movement to record
    pub fn credit(&self, amount: &Amount) -> Result<Decimal, DomainError> {
        self.balance()
            .checked_add(amount.value())
            .ok_or(DomainError::BalanceOverflow)?;

        Ok(amount.as_deposit())
    }

    /// Check a loan of `amount` against the collateral rule and return the
    /// movement to record
    pub fn borrow(&self, amount: &Amount) -> Result<Decimal, DomainError> {
        if !ledger::has_collateral_for(&self.movements, amount.value()) {
            return Err(DomainError::LoanNotCovered {
                requested: amount.value(),
            });
        }

        self.credit(amount)
    }

    /// Append a movement to the history
    pub(crate) fn record(&mut self, movement: Decimal) {
        self.movements.push(movement);
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// First token of the owner name, used for the welcome line
    pub fn first_name(&self) -> &str {
        self.owner.split_whitespace().next().unwrap_or("")
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn set_username(&mut self, username: String) {
        self.username = username;
    }

    pub fn movements(&self) -> &[Decimal] {
        &self.movements
    }

    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    /// Numeric PIN comparison
    pub fn verify_pin(&self, pin: Pin) -> bool {
        self.pin == pin
    }

    pub fn balance(&self) -> Decimal {
        ledger::balance(&self.movements)
    }

    pub fn summary(&self) -> Summary {
        ledger::summarize(&self.movements, self.interest_rate)
    }
}
