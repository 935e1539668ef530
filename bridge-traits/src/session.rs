//! Per-Operation Credentials
//!
//! A `Session` carries the credential for exactly one user and is passed
//! explicitly into every provider operation. Nothing in this workspace
//! reads the current user from ambient process state; the connection-setup
//! collaborator that performs the OAuth dance hands a `Session` to the web
//! tier, which threads it through each call.

/// Opaque bearer credential for a single user
///
/// The token is never generated locally and never refreshed here; an
/// expired session simply surfaces as an authentication failure from the
/// provider.
#[derive(Clone)]
pub struct Session {
    access_token: String,
}

impl Session {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    /// The bearer token for the `Authorization` header
    pub fn bearer_token(&self) -> &str {
        &self.access_token
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}
