//! Demo seed data
//!
//! The four accounts the demo starts with.

use rust_decimal::Decimal;

use crate::aggregate::Account;
use crate::domain::Pin;

fn movements(values: &[i64]) -> Vec<Decimal> {
    values.iter().copied().map(Decimal::from).collect()
}

/// Accounts loaded into a fresh store
pub fn demo_accounts() -> Vec<Account> {
    vec![
        Account::new(
            "Jonas Schmedtmann",
            movements(&[200, 450, -400, 3000, -650, -130, 70, 1300]),
            Decimal::new(12, 1),
            Pin::new(1111),
        ),
        Account::new(
            "Jessica Davis",
            movements(&[5000, 3400, -150, -790, -3210, -1000, 8500, -30]),
            Decimal::new(15, 1),
            Pin::new(2222),
        ),
        Account::new(
            "Steven Thomas Williams",
            movements(&[200, -200, 340, -300, -20, 50, 400, -460]),
            Decimal::new(7, 1),
            Pin::new(3333),
        ),
        Account::new(
            "Sarah Smith",
            movements(&[430, 1000, 700, 50, 90]),
            Decimal::ONE,
            Pin::new(4444),
        ),
    ]
}
