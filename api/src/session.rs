//! # Session state machine
//!
//! The client-side holder of the authentication state. Four states:
//!
//! | State | Meaning |
//! |-------|---------|
//! | `Initializing` | Startup; nothing known yet. |
//! | `Anonymous` | No credential held, no user. |
//! | `Refreshing` | Credential held, profile fetch in flight. |
//! | `Authenticated(User)` | Credential held and profile loaded. |
//!
//! Transitions are a pure reducer ([`SessionState::apply`]); the async
//! helpers below drive it around real backend calls and keep the invariant
//! that a user is held only while a credential is stored. Every failure path
//! discards the credential and lands in `Anonymous` — there is no retry or
//! backoff anywhere in the session lifecycle.
//!
//! The `Unauthorized` event may arrive at any time from the HTTP adapter's
//! observer channel (see [`crate::client`]). Applying it while already
//! `Anonymous` is a no-op, so any number of concurrent 401 signals collapse
//! into a single transition.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::User;
use crate::services::auth;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Initializing,
    Anonymous,
    Refreshing,
    Authenticated(User),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Startup found no persisted credential.
    NoCredential,
    /// Profile fetch succeeded for the held credential.
    ProfileLoaded(User),
    /// Profile fetch failed; the credential has been discarded.
    ProfileFailed,
    /// Explicit logout completed.
    LoggedOut,
    /// The HTTP adapter observed a 401 on some call.
    Unauthorized,
}

impl SessionState {
    /// Pure transition function. States not mentioned for an event are
    /// left unchanged, which is what makes late or duplicated signals safe.
    pub fn apply(self, event: SessionEvent) -> SessionState {
        use SessionEvent::*;
        use SessionState::*;
        match (self, event) {
            (_, NoCredential) => Anonymous,
            (_, ProfileLoaded(user)) => Authenticated(user),
            (_, ProfileFailed) => Anonymous,
            (_, LoggedOut) => Anonymous,
            (Authenticated(_), Unauthorized) => Anonymous,
            (Refreshing, Unauthorized) => Anonymous,
            (Initializing, Unauthorized) => Anonymous,
            (state, Unauthorized) => state,
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    /// Startup or profile fetch still pending; the guard shows a
    /// "checking session" placeholder instead of redirecting.
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Initializing | SessionState::Refreshing)
    }
}

/// Resolve the startup state: no credential means `Anonymous`; a persisted
/// credential triggers a profile fetch whose failure discards it.
pub async fn initialize(client: &ApiClient) -> SessionState {
    if client.credentials().get().is_none() {
        return SessionState::Initializing.apply(SessionEvent::NoCredential);
    }
    refresh_profile(client).await
}

/// Exchange credentials for a bearer token, persist it, then load the
/// profile. Backend rejection propagates to the caller and leaves the
/// session untouched.
pub async fn login(
    client: &ApiClient,
    email: &str,
    password: &str,
) -> Result<SessionState, ApiError> {
    let response = auth::login(client, email, password).await?;
    client.credentials().set(&response.token);
    Ok(refresh_profile(client).await)
}

/// Best-effort remote revoke; the local credential is cleared no matter
/// what the backend says.
pub async fn logout(client: &ApiClient) -> SessionState {
    if let Err(err) = auth::logout(client).await {
        tracing::debug!("remote logout failed (ignored): {err}");
    }
    client.credentials().clear();
    SessionState::Anonymous.apply(SessionEvent::LoggedOut)
}

/// Re-fetch the user for the held credential. Any failure invalidates the
/// session: credential discarded, state `Anonymous`.
pub async fn refresh_profile(client: &ApiClient) -> SessionState {
    match auth::profile(client).await {
        Ok(user) => SessionState::Refreshing.apply(SessionEvent::ProfileLoaded(user)),
        Err(err) => {
            tracing::warn!("profile refresh failed, dropping session: {err}");
            client.credentials().clear();
            SessionState::Refreshing.apply(SessionEvent::ProfileFailed)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::credentials::{CredentialStore, MemoryCredentials};

    // Nothing listens here; orchestration paths that tolerate or propagate
    // failures can run against it without a server.
    const DEAD_BACKEND: &str = "http://127.0.0.1:9/api";

    fn user(rol: Option<&str>) -> User {
        User {
            id: 1,
            name: "Ana Quispe".into(),
            email: "ana@mail.com".into(),
            rol: rol.map(String::from),
            estado: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_startup_without_credential() {
        let state = SessionState::Initializing.apply(SessionEvent::NoCredential);
        assert_eq!(state, SessionState::Anonymous);
    }

    #[test]
    fn test_startup_with_credential_resolves_profile() {
        let state = SessionState::Initializing
            .apply(SessionEvent::ProfileLoaded(user(None)));
        assert!(state.is_authenticated());
    }

    #[test]
    fn test_profile_failure_lands_anonymous() {
        let state = SessionState::Refreshing.apply(SessionEvent::ProfileFailed);
        assert_eq!(state, SessionState::Anonymous);
    }

    #[test]
    fn test_login_then_logout_ends_anonymous() {
        let state = SessionState::Anonymous
            .apply(SessionEvent::ProfileLoaded(user(Some("admin"))))
            .apply(SessionEvent::LoggedOut);
        assert_eq!(state, SessionState::Anonymous);
    }

    #[test]
    fn test_unauthorized_applies_exactly_once() {
        let state = SessionState::Authenticated(user(None));
        let after_first = state.apply(SessionEvent::Unauthorized);
        assert_eq!(after_first, SessionState::Anonymous);

        // A second concurrent signal finds the session already anonymous
        // and changes nothing.
        let after_second = after_first.clone().apply(SessionEvent::Unauthorized);
        assert_eq!(after_second, SessionState::Anonymous);
    }

    #[test]
    fn test_unauthorized_during_refresh() {
        let state = SessionState::Refreshing.apply(SessionEvent::Unauthorized);
        assert_eq!(state, SessionState::Anonymous);
    }

    #[test]
    fn test_loading_states() {
        assert!(SessionState::Initializing.is_loading());
        assert!(SessionState::Refreshing.is_loading());
        assert!(!SessionState::Anonymous.is_loading());
        assert!(!SessionState::Authenticated(user(None)).is_loading());
    }

    #[tokio::test]
    async fn test_initialize_without_credential_skips_the_network() {
        let client = ApiClient::new(DEAD_BACKEND, Arc::new(MemoryCredentials::new()));
        assert_eq!(initialize(&client).await, SessionState::Anonymous);
    }

    #[tokio::test]
    async fn test_logout_clears_credential_even_when_revoke_fails() {
        let store = MemoryCredentials::new();
        let client = ApiClient::new(DEAD_BACKEND, Arc::new(store.clone()));
        client.credentials().set("tok-123");

        let state = logout(&client).await;
        assert_eq!(state, SessionState::Anonymous);
        assert!(store.get().is_none());
    }

    #[tokio::test]
    async fn test_refresh_failure_discards_credential() {
        let store = MemoryCredentials::new();
        let client = ApiClient::new(DEAD_BACKEND, Arc::new(store.clone()));
        client.credentials().set("tok-123");

        let state = refresh_profile(&client).await;
        assert_eq!(state, SessionState::Anonymous);
        assert!(store.get().is_none());
    }
}
