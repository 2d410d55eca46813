//! Display state rendered by `UserView`.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

/// Value shown under the "Users" heading until something replaces it.
pub const PLACEHOLDER_USERS: &str = "eth";

/// Local display state of the user view.
///
/// Only ever written at construction. The fetched user list is logged, not
/// stored here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayState {
    pub users: String,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self { users: PLACEHOLDER_USERS.to_owned() }
    }
}
