//! Session Controller
//!
//! Owns the account store and the session and applies user actions to them.
//! Every action either applies fully and returns the resulting event, or is
//! rejected with a reason and changes nothing.

use chrono::Utc;
use uuid::Uuid;

use crate::aggregate::{Account, AccountStore};
use crate::domain::{Amount, DomainError, LedgerEvent, Pin};
use crate::render::{Dashboard, Renderer};

use super::{Action, Session};

/// Outcome of a single action
pub type ActionResult = Result<LedgerEvent, DomainError>;

/// Single entry point for login, transfers, loans, closure and sorting
#[derive(Debug, Clone)]
pub struct SessionController {
    store: AccountStore,
    session: Session,
    /// Order used by the last sort toggle; only `toggle_sort` flips it
    sorted: bool,
    renderer: Renderer,
    dashboard: Option<Dashboard>,
}

impl SessionController {
    pub fn new(store: AccountStore) -> Self {
        Self {
            store,
            session: Session::LoggedOut,
            sorted: false,
            renderer: Renderer::default(),
            dashboard: None,
        }
    }

    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Apply an action and log the outcome
    pub fn dispatch(&mut self, action: &Action) -> ActionResult {
        let result = match action {
            Action::Login { username, pin } => self.login(username, pin),
            Action::Transfer { to, amount } => self.transfer(to, amount),
            Action::RequestLoan { amount } => self.request_loan(amount),
            Action::Close { username, pin } => self.close(username, pin),
            Action::ToggleSort => self.toggle_sort(),
        };

        match &result {
            Ok(event) => tracing::info!(
                action = action.name(),
                event = event.event_type(),
                account_id = %event.account_id(),
                "Action applied"
            ),
            Err(e) => tracing::debug!(
                action = action.name(),
                reason = e.code(),
                "Action rejected: {}",
                e
            ),
        }

        result
    }

    // =========================================================================
    // Login
    // =========================================================================

    /// Open a session for `username` if `pin` matches.
    ///
    /// On failure the previous session, if any, stays in place.
    pub fn login(&mut self, username: &str, pin: &str) -> ActionResult {
        let pin: Pin = pin.parse().map_err(|_| DomainError::InvalidCredentials)?;

        let account = self
            .store
            .find_by_username(username)
            .filter(|acc| acc.verify_pin(pin))
            .ok_or(DomainError::InvalidCredentials)?;

        let event = LedgerEvent::LoggedIn {
            account_id: account.id(),
            username: account.username().to_string(),
            logged_in_at: Utc::now(),
        };

        self.session = Session::LoggedIn(account.id());
        self.refresh();

        Ok(event)
    }

    // =========================================================================
    // Transfer
    // =========================================================================

    /// Move `amount` from the logged-in account to the account named `to`
    pub fn transfer(&mut self, to: &str, amount: &str) -> ActionResult {
        let sender = self.require_account()?;
        let amount: Amount = amount.parse()?;

        let recipient = self
            .store
            .find_by_username(to)
            .ok_or_else(|| DomainError::RecipientNotFound(to.to_string()))?;

        if recipient.username() == sender.username() {
            return Err(DomainError::SameAccountTransfer);
        }

        let debit = sender.debit(&amount)?;
        let credit = recipient.credit(&amount)?;
        let (from_account_id, to_account_id) = (sender.id(), recipient.id());

        self.account_mut(from_account_id)?.record(debit);
        self.account_mut(to_account_id)?.record(credit);

        tracing::info!(
            from = %from_account_id,
            to = %to_account_id,
            amount = %amount,
            "Transfer recorded"
        );

        self.refresh();

        Ok(LedgerEvent::MoneyTransferred {
            transfer_id: Uuid::new_v4(),
            from_account_id,
            to_account_id,
            amount: amount.value(),
            transferred_at: Utc::now(),
        })
    }

    // =========================================================================
    // Loan
    // =========================================================================

    /// Credit a loan of `amount` if some past movement covers a tenth of it
    pub fn request_loan(&mut self, amount: &str) -> ActionResult {
        let account = self.require_account()?;
        let amount: Amount = amount.parse()?;

        let movement = account.borrow(&amount)?;
        let account_id = account.id();

        self.account_mut(account_id)?.record(movement);
        self.refresh();

        Ok(LedgerEvent::LoanGranted {
            account_id,
            amount: amount.value(),
            granted_at: Utc::now(),
        })
    }

    // =========================================================================
    // Close
    // =========================================================================

    /// Remove the logged-in account and end the session.
    ///
    /// The credentials are matched against the session's account. The store
    /// position removed is the one found by looking up `username`, which is
    /// the session's account whenever the match succeeds because lookups
    /// always resolve to the first holder of a username.
    pub fn close(&mut self, username: &str, pin: &str) -> ActionResult {
        let current = self.require_account()?;
        let index = self.store.position_of(username);

        let pin_matches = pin
            .parse::<Pin>()
            .map(|pin| current.verify_pin(pin))
            .unwrap_or(false);

        if username != current.username() || !pin_matches {
            return Err(DomainError::CloseCredentialsMismatch);
        }

        let closed = index
            .and_then(|i| self.store.remove(i))
            .ok_or(DomainError::CloseCredentialsMismatch)?;

        self.session = Session::LoggedOut;
        self.dashboard = None;

        tracing::info!(username = closed.username(), "Account closed");

        Ok(LedgerEvent::AccountClosed {
            account_id: closed.id(),
            username: closed.username().to_string(),
            closed_at: Utc::now(),
        })
    }

    // =========================================================================
    // Sort
    // =========================================================================

    /// Redisplay the movements in the other order.
    ///
    /// The flag survives logins and re-renders, so the first toggle after an
    /// action may show the same order that is already on screen.
    pub fn toggle_sort(&mut self) -> ActionResult {
        let account = self.require_account()?;
        let sorted = !self.sorted;

        let dashboard = self.renderer.render(account, sorted);
        let account_id = account.id();

        self.dashboard = Some(dashboard);
        self.sorted = sorted;

        Ok(LedgerEvent::MovementsReordered {
            account_id,
            sorted,
            reordered_at: Utc::now(),
        })
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    /// The account the session refers to
    pub fn current_account(&self) -> Option<&Account> {
        self.session.account_id().and_then(|id| self.store.get(id))
    }

    /// Last rendered dashboard, `None` while logged out
    pub fn dashboard(&self) -> Option<&Dashboard> {
        self.dashboard.as_ref()
    }

    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn require_account(&self) -> Result<&Account, DomainError> {
        let id = self.session.account_id().ok_or(DomainError::NotLoggedIn)?;
        self.store
            .get(id)
            .ok_or_else(|| DomainError::AccountNotFound(id.to_string()))
    }

    fn account_mut(&mut self, id: Uuid) -> Result<&mut Account, DomainError> {
        self.store
            .get_mut(id)
            .ok_or_else(|| DomainError::AccountNotFound(id.to_string()))
    }

    /// Re-render the current account in chronological order
    fn refresh(&mut self) {
        self.dashboard = self
            .current_account()
            .map(|account| self.renderer.render(account, false));
    }
}
