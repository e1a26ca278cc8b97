use serde::{Deserialize, Serialize};

use crate::models::Role;

/// A fully-populated authenticated session.
///
/// The record is atomic: it is stored, replaced, and cleared as a whole.
/// `Option<AuthSession>` is the entire auth state — `None` is Anonymous,
/// and a `Some` always carries email, role, and token together, so a
/// logged-in session can never have a missing role or token. There is no
/// partial-update API anywhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthSession {
    /// Identifies the signed-in principal.
    pub email: String,
    /// The single role for this session; no multi-role sessions.
    pub role: Role,
    /// Opaque bearer credential attached to outbound API requests.
    pub token: String,
}

impl AuthSession {
    pub fn new(email: impl Into<String>, role: Role, token: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            role,
            token: token.into(),
        }
    }
}
