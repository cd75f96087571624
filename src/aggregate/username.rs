//! Username derivation
//!
//! Login handles are the lowercase initials of the owner's name.

use super::Account;

/// Derive a login handle from an owner name.
///
/// `"Steven Thomas Williams"` becomes `"stw"`.
pub fn derive_username(owner: &str) -> String {
    owner
        .to_lowercase()
        .split_whitespace()
        .filter_map(|token| token.chars().next())
        .collect()
}

/// Assign every account its derived username in place.
///
/// Collisions are left as they are: two owners with the same initials end up
/// with the same handle and lookups resolve to the first one in store order.
pub fn assign_usernames(accounts: &mut [Account]) {
    for account in accounts.iter_mut() {
        let username = derive_username(account.owner());
        account.set_username(username);
    }
}
