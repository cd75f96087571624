//! Action definitions
//!
//! Actions are the discrete user intentions the controller dispatches. Their
//! payloads are kept as raw input text, the way a form field delivers them;
//! the controller parses and validates them.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// A user action with its raw payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Login {
        username: String,
        #[serde(deserialize_with = "text_or_number")]
        pin: String,
    },
    Transfer {
        to: String,
        #[serde(deserialize_with = "text_or_number")]
        amount: String,
    },
    RequestLoan {
        #[serde(deserialize_with = "text_or_number")]
        amount: String,
    },
    Close {
        username: String,
        #[serde(deserialize_with = "text_or_number")]
        pin: String,
    },
    ToggleSort,
}

impl Action {
    pub fn login(username: impl Into<String>, pin: impl Into<String>) -> Self {
        Self::Login {
            username: username.into(),
            pin: pin.into(),
        }
    }

    pub fn transfer(to: impl Into<String>, amount: impl Into<String>) -> Self {
        Self::Transfer {
            to: to.into(),
            amount: amount.into(),
        }
    }

    pub fn request_loan(amount: impl Into<String>) -> Self {
        Self::RequestLoan {
            amount: amount.into(),
        }
    }

    pub fn close(username: impl Into<String>, pin: impl Into<String>) -> Self {
        Self::Close {
            username: username.into(),
            pin: pin.into(),
        }
    }

    /// Action name as used in logs and in the text syntax
    pub fn name(&self) -> &'static str {
        match self {
            Action::Login { .. } => "login",
            Action::Transfer { .. } => "transfer",
            Action::RequestLoan { .. } => "loan",
            Action::Close { .. } => "close",
            Action::ToggleSort => "sort",
        }
    }
}

/// Accept a JSON string or number for an input field
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

/// Errors from parsing the text syntax
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseActionError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown action: {0}")]
    Unknown(String),

    #[error("Missing {argument} for {action}")]
    MissingArgument {
        action: &'static str,
        argument: &'static str,
    },

    #[error("Too many arguments for {0}")]
    TooManyArguments(&'static str),
}

impl FromStr for Action {
    type Err = ParseActionError;

    /// Parse `login js 1111`, `transfer jd 500`, `loan 1000`,
    /// `close js 1111` or `sort`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let verb = words.next().ok_or(ParseActionError::Empty)?;

        let mut next = |action: &'static str, argument: &'static str| {
            words
                .next()
                .map(str::to_string)
                .ok_or(ParseActionError::MissingArgument { action, argument })
        };

        let action = match verb.to_lowercase().as_str() {
            "login" => Action::Login {
                username: next("login", "username")?,
                pin: next("login", "pin")?,
            },
            "transfer" => Action::Transfer {
                to: next("transfer", "recipient")?,
                amount: next("transfer", "amount")?,
            },
            "loan" => Action::RequestLoan {
                amount: next("loan", "amount")?,
            },
            "close" => Action::Close {
                username: next("close", "username")?,
                pin: next("close", "pin")?,
            },
            "sort" => Action::ToggleSort,
            other => return Err(ParseActionError::Unknown(other.to_string())),
        };

        if words.next().is_some() {
            return Err(ParseActionError::TooManyArguments(action.name()));
        }

        Ok(action)
    }
}
