//! Amount and PIN types
//!
//! Domain primitives for user-entered values. Both are validated at
//! construction time so the session layer never sees malformed input.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Amount represents a validated, strictly positive monetary value.
///
/// Any positive value `Decimal` can represent is accepted.
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use bankist::domain::Amount;
///
/// let amount: Amount = "250".parse().unwrap();
/// assert_eq!(amount.value(), Decimal::new(250, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

/// Errors that can occur when creating an Amount
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("Amount must be positive (got {0})")]
    NotPositive(Decimal),

    #[error("Invalid amount format: {0}")]
    ParseError(String),
}

impl Amount {
    /// Create a new Amount with validation.
    ///
    /// # Errors
    /// - `AmountError::NotPositive` if value <= 0
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value <= Decimal::ZERO {
            return Err(AmountError::NotPositive(value));
        }

        Ok(Self(value))
    }

    /// Create an Amount from an integer (no decimal places).
    pub fn from_integer(value: i64) -> Result<Self, AmountError> {
        Self::new(Decimal::from(value))
    }

    /// Get the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// The movement recorded on the receiving side.
    pub fn as_deposit(&self) -> Decimal {
        self.0
    }

    /// The movement recorded on the paying side.
    pub fn as_withdrawal(&self) -> Decimal {
        -self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // An empty input field reads as zero, which is then rejected as non-positive
        if trimmed.is_empty() {
            return Err(AmountError::NotPositive(Decimal::ZERO));
        }
        let decimal = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|e| AmountError::ParseError(e.to_string()))?;
        Amount::new(decimal)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// Numeric login credential.
///
/// Input is read as a number and compared by value, so `"0042"`, `"42.0"`
/// and `"4.2e1"` are all the same PIN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pin(u32);

impl Pin {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Error returned when a PIN input is not a whole non-negative number
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid PIN format")]
pub struct PinError;

impl FromStr for Pin {
    type Err = PinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| PinError)?;

        // A fractional or negative number can never equal a stored PIN
        if !number.fract().is_zero() {
            return Err(PinError);
        }
        number.to_u32().map(Pin).ok_or(PinError)
    }
}
