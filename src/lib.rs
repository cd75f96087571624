//! Bankist Library
//!
//! In-memory banking ledger: seeded accounts, session-driven transfers,
//! loans, account closure and dashboard rendering.

pub mod aggregate;
pub mod config;
pub mod domain;
pub mod driver;
pub mod ledger;
pub mod render;
pub mod seed;
pub mod session;
mod error;

pub use aggregate::{Account, AccountStore};
pub use config::Config;
pub use domain::{Amount, AmountError, DomainError, LedgerEvent, Pin};
pub use error::{AppError, AppResult};
pub use render::{Dashboard, Renderer};
pub use session::{Action, Session, SessionController};
