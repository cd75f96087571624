//! Aggregate module
//!
//! Account records, the store that holds them and username derivation.

pub mod account;
pub mod store;
pub mod username;

pub use account::Account;
pub use store::AccountStore;
pub use username::{assign_usernames, derive_username};
