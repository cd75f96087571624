//! Renderer
//!
//! Turns an account into the dashboard shown to the logged-in user: the
//! movement list (most recent first) plus balance and summary figures.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate::Account;
use crate::ledger::Summary;

/// Polarity of a movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

impl MovementKind {
    /// Zero counts as a withdrawal
    pub fn of(movement: Decimal) -> Self {
        if movement > Decimal::ZERO {
            Self::Deposit
        } else {
            Self::Withdrawal
        }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovementKind::Deposit => write!(f, "deposit"),
            MovementKind::Withdrawal => write!(f, "withdrawal"),
        }
    }
}

/// One line of the movement list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MovementRow {
    /// Chronological position, starting at 1, regardless of display order
    pub number: usize,
    pub kind: MovementKind,
    pub amount: Decimal,
}

/// Build the movement list.
///
/// Rows keep their chronological number even when `sort` orders them by
/// amount. The list is returned last-first: the most recent (or largest,
/// when sorted) movement comes first.
pub fn render_movements(movements: &[Decimal], sort: bool) -> Vec<MovementRow> {
    let mut rows: Vec<MovementRow> = movements
        .iter()
        .copied()
        .enumerate()
        .map(|(i, amount)| MovementRow {
            number: i + 1,
            kind: MovementKind::of(amount),
            amount,
        })
        .collect();

    if sort {
        // stable: equal amounts keep chronological order
        rows.sort_by(|a, b| a.amount.cmp(&b.amount));
    }

    rows.reverse();
    rows
}

/// Everything the display surface needs for one logged-in account
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub welcome: String,
    pub username: String,
    pub sorted: bool,
    pub rows: Vec<MovementRow>,
    pub balance: Decimal,
    pub income: Decimal,
    pub expense: Decimal,
    /// Qualifying interest truncated toward zero
    pub interest: Decimal,
    pub currency: String,
}

impl Dashboard {
    fn money(&self, value: Decimal) -> String {
        format!("{}{}", value.normalize(), self.currency)
    }
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.welcome)?;
        writeln!(f, "Current balance: {}", self.money(self.balance))?;
        for row in &self.rows {
            let label = format!("{} {}", row.number, row.kind);
            writeln!(f, "  {:<16}{:>14}", label, self.money(row.amount))?;
        }
        write!(
            f,
            "In {}  Out {}  Interest {}",
            self.money(self.income),
            self.money(self.expense),
            self.money(self.interest)
        )
    }
}

/// Produces dashboards with a fixed currency symbol
#[derive(Debug, Clone)]
pub struct Renderer {
    currency_symbol: String,
}

impl Renderer {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Render the dashboard for `account`
    pub fn render(&self, account: &Account, sort: bool) -> Dashboard {
        let summary: Summary = account.summary();

        Dashboard {
            welcome: format!("Welcome back, {}", account.first_name()),
            username: account.username().to_string(),
            sorted: sort,
            rows: render_movements(account.movements(), sort),
            balance: summary.balance,
            income: summary.income,
            expense: summary.expense,
            interest: summary.display_interest(),
            currency: self.currency_symbol.clone(),
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new("€")
    }
}
