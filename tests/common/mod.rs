//! Common test utilities

use bankist::{Account, AccountStore, Pin, SessionController};
use rust_decimal::Decimal;

/// Controller over the demo store, logged out
pub fn demo_controller() -> SessionController {
    SessionController::new(AccountStore::demo())
}

/// Controller over the demo store with `username` logged in
pub fn logged_in(username: &str, pin: &str) -> SessionController {
    let mut controller = demo_controller();
    controller
        .login(username, pin)
        .expect("demo login should succeed");
    controller
}

/// Current balance of the first account holding `username`
pub fn balance_of(controller: &SessionController, username: &str) -> Decimal {
    controller
        .store()
        .find_by_username(username)
        .map(Account::balance)
        .expect("account should exist")
}

/// Account with whole-unit movements
pub fn account(owner: &str, movements: &[i64], pin: u32) -> Account {
    Account::new(
        owner,
        movements.iter().copied().map(Decimal::from).collect(),
        Decimal::ONE,
        Pin::new(pin),
    )
}
