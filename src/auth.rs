use std::fmt::{Debug, Formatter};

/// The credentials used to talk to KULASIS. The access token is obtained
/// outside of this crate (e.g., from the official app) and is used as-is.
#[derive(Clone, Eq, PartialEq)]
pub struct AuthInfo {
    /// The KULASIS account ID.
    pub account: String,
    /// The access token associated with the account.
    pub access_token: String,
}

impl AuthInfo {
    /// Creates a new `AuthInfo` from an account ID and access token.
    ///
    /// # Parameters
    /// - `account`: The account ID.
    /// - `access_token`: The access token.
    ///
    /// # Returns
    /// The new `AuthInfo`.
    pub fn new(account: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            access_token: access_token.into(),
        }
    }
}

// Keep the token out of logs and panic messages.
impl Debug for AuthInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthInfo")
            .field("account", &self.account)
            .field("access_token", &"<redacted>")
            .finish()
    }
}
