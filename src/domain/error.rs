//! Domain Error Types
//!
//! Reasons an action can be rejected. None of these are fatal: a rejected
//! action leaves the store and the session exactly as they were.

use rust_decimal::Decimal;
use thiserror::Error;

use super::AmountError;

/// Business rule violations raised by the session controller
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Unknown username or PIN mismatch on login
    #[error("Invalid username or PIN")]
    InvalidCredentials,

    /// The action needs an active session
    #[error("No account is logged in")]
    NotLoggedIn,

    /// Invalid amount (zero, negative, malformed or above the limit)
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),

    /// No account holds the requested recipient username
    #[error("Recipient not found: {0}")]
    RecipientNotFound(String),

    /// Transfer to the logged-in account itself
    #[error("Cannot transfer to the same account")]
    SameAccountTransfer,

    /// Insufficient balance for the transfer
    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance {
        required: Decimal,
        available: Decimal,
    },

    /// No past movement is at least a tenth of the requested loan
    #[error("Loan of {requested} is not covered by any past movement")]
    LoanNotCovered { requested: Decimal },

    /// Crediting the account would exceed the representable balance
    #[error("Balance would exceed the representable range")]
    BalanceOverflow,

    /// Closure credentials do not match the logged-in account
    #[error("Closure credentials do not match the current account")]
    CloseCredentialsMismatch,

    /// Session references an account that is no longer in the store
    #[error("Account not found: {0}")]
    AccountNotFound(String),
}

impl DomainError {
    /// Create an insufficient balance error
    pub fn insufficient_balance(required: Decimal, available: Decimal) -> Self {
        Self::InsufficientBalance {
            required,
            available,
        }
    }

    /// Check if this is a client error (caused by the user's input)
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::AccountNotFound(_))
    }

    /// Stable snake_case code, used in structured logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "invalid_credentials",
            Self::NotLoggedIn => "not_logged_in",
            Self::InvalidAmount(_) => "invalid_amount",
            Self::RecipientNotFound(_) => "recipient_not_found",
            Self::SameAccountTransfer => "same_account_transfer",
            Self::InsufficientBalance { .. } => "insufficient_balance",
            Self::LoanNotCovered { .. } => "loan_not_covered",
            Self::CloseCredentialsMismatch => "close_credentials_mismatch",
            Self::BalanceOverflow => "balance_overflow",
            Self::AccountNotFound(_) => "account_not_found",
        }
    }
}
