//! Domain Events
//!
//! Facts returned by the session controller when an action is applied.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Something that happened to the ledger or the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LedgerEvent {
    /// A session was opened for the account
    LoggedIn {
        account_id: Uuid,
        username: String,
        logged_in_at: DateTime<Utc>,
    },

    /// Money moved between two accounts
    MoneyTransferred {
        transfer_id: Uuid,
        from_account_id: Uuid,
        to_account_id: Uuid,
        amount: Decimal,
        transferred_at: DateTime<Utc>,
    },

    /// A loan was credited to the account
    LoanGranted {
        account_id: Uuid,
        amount: Decimal,
        granted_at: DateTime<Utc>,
    },

    /// The account was removed from the store and the session ended
    AccountClosed {
        account_id: Uuid,
        username: String,
        closed_at: DateTime<Utc>,
    },

    /// The movement list was redisplayed in the given order
    MovementsReordered {
        account_id: Uuid,
        sorted: bool,
        reordered_at: DateTime<Utc>,
    },
}

impl LedgerEvent {
    /// Get the event type as a string
    pub fn event_type(&self) -> &'static str {
        match self {
            LedgerEvent::LoggedIn { .. } => "LoggedIn",
            LedgerEvent::MoneyTransferred { .. } => "MoneyTransferred",
            LedgerEvent::LoanGranted { .. } => "LoanGranted",
            LedgerEvent::AccountClosed { .. } => "AccountClosed",
            LedgerEvent::MovementsReordered { .. } => "MovementsReordered",
        }
    }

    /// Get the account the event was initiated by
    pub fn account_id(&self) -> Uuid {
        match self {
            LedgerEvent::LoggedIn { account_id, .. } => *account_id,
            LedgerEvent::MoneyTransferred {
                from_account_id, ..
            } => *from_account_id,
            LedgerEvent::LoanGranted { account_id, .. } => *account_id,
            LedgerEvent::AccountClosed { account_id, .. } => *account_id,
            LedgerEvent::MovementsReordered { account_id, .. } => *account_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ledger_event_serialization() {
        let event = LedgerEvent::LoanGranted {
            account_id: Uuid::new_v4(),
            amount: dec!(1000),
            granted_at: Utc::now(),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"LoanGranted""#));

        let deserialized: LedgerEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }

    #[test]
    fn test_transfer_event_reports_sender() {
        let from = Uuid::new_v4();
        let event = LedgerEvent::MoneyTransferred {
            transfer_id: Uuid::new_v4(),
            from_account_id: from,
            to_account_id: Uuid::new_v4(),
            amount: dec!(25),
            transferred_at: Utc::now(),
        };

        assert_eq!(event.account_id(), from);
        assert_eq!(event.event_type(), "MoneyTransferred");
    }
}
