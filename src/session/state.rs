//! Session state

use serde::Serialize;
use uuid::Uuid;

/// Who, if anyone, is logged in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "account_id", rename_all = "snake_case")]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn(Uuid),
}

impl Session {
    pub fn account_id(&self) -> Option<Uuid> {
        match self {
            Session::LoggedOut => None,
            Session::LoggedIn(id) => Some(*id),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Session::LoggedIn(_))
    }
}
