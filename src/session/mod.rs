//! Session module
//!
//! Session state, user actions and the controller that applies them.

mod action;
mod controller;
mod state;

pub use action::{Action, ParseActionError};
pub use controller::{ActionResult, SessionController};
pub use state::Session;
