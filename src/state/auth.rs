//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`Session`] is the single owner of the bearer token and the resolved
//! profile. The router guard and user-aware pages read [`AuthState`]
//! snapshots of it; all mutation goes through `login`, `fetch_identity`
//! and `logout`.
//!
//! INVARIANTS
//! ==========
//! - In-memory token and persisted token change together.
//! - `login` ends fully authenticated (token + profile) or fully logged out.
//! - No `RefCell` borrow is held across an `.await`.
//!
//! Overlapping calls are not serialized; whichever continuation finishes
//! last decides the final state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::net::client::ApiClient;
use crate::net::types::{ApiError, LoginRequest, Person};
use crate::util::jwt;
use crate::util::storage::KeyValueStore;

/// Authentication state tracking the token and the current user's profile.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub me: Option<Person>,
}

impl AuthState {
    /// A token is present. Its validity is the server's call.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("login returned a token without a readable identity")]
    MalformedToken,
}

/// Owned session context. Clones are handles onto the same state.
#[derive(Clone)]
pub struct Session {
    client: ApiClient,
    state: Rc<RefCell<AuthState>>,
}

impl Session {
    /// Create a session, seeding the token from the client's persisted store.
    pub fn new(client: ApiClient) -> Self {
        let token = client
            .store()
            .get(&client.config().token_key)
            .filter(|t| !t.is_empty());
        Self { client, state: Rc::new(RefCell::new(AuthState { token, me: None })) }
    }

    #[must_use]
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.state.borrow().token.clone()
    }

    #[must_use]
    pub fn me(&self) -> Option<Person> {
        self.state.borrow().me.clone()
    }

    fn set_token(&self, token: String) {
        self.client
            .store()
            .set(&self.client.config().token_key, &token);
        self.state.borrow_mut().token = Some(token);
    }

    /// Submit credentials, store the token, and resolve the profile.
    ///
    /// # Errors
    ///
    /// Any failure (rejected credentials, network, profile fetch, unreadable
    /// token) leaves the session logged out and is returned to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), SessionError> {
        let result = self.try_login(email, password).await;
        if let Err(err) = &result {
            log::warn!("login failed: {err}");
            self.logout();
        }
        result
    }

    async fn try_login(&self, email: &str, password: &str) -> Result<(), SessionError> {
        let request = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let response = self.client.login(&request).await?;
        self.set_token(response.token);
        self.fetch_identity().await?;
        let state = self.snapshot();
        if !state.is_authenticated() || state.me.is_none() {
            return Err(SessionError::MalformedToken);
        }
        log::info!("logged in as {email}");
        Ok(())
    }

    /// Resolve the profile named by the token's `sub` claim.
    ///
    /// Without a token the profile is cleared. An undecodable token ends the
    /// session and returns `Ok` without a request.
    ///
    /// # Errors
    ///
    /// The profile fetch error, uncaught. The session is left as it was.
    pub async fn fetch_identity(&self) -> Result<(), ApiError> {
        let Some(token) = self.token() else {
            self.state.borrow_mut().me = None;
            return Ok(());
        };

        let subject = match jwt::decode_subject(&token) {
            Ok(subject) => subject,
            Err(err) => {
                log::warn!("dropping session, token claim unreadable: {err}");
                self.logout();
                return Ok(());
            }
        };

        let person = self.client.fetch_person(&subject).await?;
        self.state.borrow_mut().me = Some(person);
        Ok(())
    }

    /// Clear token, profile and the persisted entry. Idempotent.
    pub fn logout(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.token = None;
            state.me = None;
        }
        self.client
            .store()
            .remove(&self.client.config().token_key);
    }
}
