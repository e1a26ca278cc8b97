use dioxus::prelude::*;
use shared_types::{AuthSession, Role, SessionStore};

/// Global authentication state.
///
/// The signal holds the whole session record; `None` is Anonymous. The only
/// writers are `set_auth` and `clear_auth`, which replace the record
/// atomically and keep the persisted copy in step, so no reader can ever
/// observe a half-set session.
#[derive(Clone, Copy)]
pub struct AuthState {
    pub session: Signal<Option<AuthSession>>,
    store: Signal<SessionStore>,
}

impl AuthState {
    /// Build the state from the persisted snapshot. Missing or corrupt
    /// storage yields Anonymous.
    pub fn restore(store: SessionStore) -> Self {
        let session = store.load();
        Self {
            session: Signal::new(session),
            store: Signal::new(store),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.read().is_some()
    }

    /// Clone of the current snapshot for a single decision.
    pub fn snapshot(&self) -> Option<AuthSession> {
        self.session.read().clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.read().as_ref().map(|s| s.role)
    }

    pub fn email(&self) -> Option<String> {
        self.session.read().as_ref().map(|s| s.email.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.session.read().as_ref().map(|s| s.token.clone())
    }

    /// Replace the whole session after a successful login or registration.
    pub fn set_auth(&mut self, session: AuthSession) {
        self.store.read().save(&session);
        self.session.set(Some(session));
    }

    /// Drop the session on logout or when a collaborator sees the token
    /// rejected by the API.
    pub fn clear_auth(&mut self) {
        self.store.read().clear();
        self.session.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
