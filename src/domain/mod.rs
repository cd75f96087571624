//! Domain module
//!
//! Core domain types shared by the store, the ledger and the session.

pub mod amount;
pub mod error;
pub mod events;

pub use amount::{Amount, AmountError, Pin, PinError};
pub use error::DomainError;
pub use events::LedgerEvent;
