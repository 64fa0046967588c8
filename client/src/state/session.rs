//! Session store: who is logged in, and how that survives a reload.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionContext` is provided once by the app shell and read by route
//! guards, the navbar, and pages. The token/user pair is persisted through a
//! [`SessionStorage`] and mirrored into an `RwSignal<SessionState>`.
//!
//! INVARIANTS
//! ==========
//! - The token and user are one value (`Option<Session>`); they can only be
//!   set or cleared together, in memory and in storage.
//! - `loading` is true until `initialize` runs and never becomes true again.
//! - `login`/`register` never surface a raw transport error; callers always
//!   get an [`AuthOutcome`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::{TOKEN_KEY, USER_KEY};
use crate::net::http::SessionHooks;
use crate::net::types::{
    ApiError, Credentials, GENERIC_ERROR_MESSAGE, LoginResponse, RegisterRequest, Role, User,
};
use crate::util::storage::{BrowserStorage, SessionStorage};

/// Backend calls the session store depends on.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `POST /auth/login`.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;
    /// `POST /auth/register`.
    async fn register(&self, data: &RegisterRequest) -> Result<User, ApiError>;
    /// `GET /auth/me`.
    async fn current_user(&self) -> Result<User, ApiError>;
}

/// An authenticated identity: bearer credential plus its user record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Result of a login or registration attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    Success,
    Failure { message: String },
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Success)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            AuthOutcome::Success => None,
            AuthOutcome::Failure { message } => Some(message.as_str()),
        }
    }

    fn from_error(err: &ApiError) -> Self {
        AuthOutcome::Failure { message: err.user_message() }
    }
}

/// Snapshot of the session as seen by the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for SessionState {
    /// Pending state: nothing known yet, `initialize` has not run.
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl SessionState {
    /// Rebuild the session from storage. Never touches the network.
    ///
    /// A lone token, a lone user, or an unreadable user record counts as
    /// logged out, and the leftover keys are removed.
    pub fn restore(storage: &dyn SessionStorage) -> Self {
        let token = storage.get(TOKEN_KEY);
        let raw_user = storage.get(USER_KEY);
        let session = match (token, raw_user) {
            (Some(token), Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(Session { token, user }),
                Err(e) => {
                    leptos::logging::warn!("discarding unreadable stored user: {e}");
                    None
                }
            },
            _ => None,
        };
        if session.is_none() {
            clear_storage(storage);
        }
        Self { session, loading: false }
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    pub fn is_company(&self) -> bool {
        self.role() == Some(Role::Company)
    }

    pub fn is_stagiaire(&self) -> bool {
        self.role() == Some(Role::Stagiaire)
    }

    /// Persist and adopt a new session, replacing any previous one.
    pub fn establish(&mut self, storage: &dyn SessionStorage, session: Session) {
        match serde_json::to_string(&session.user) {
            Ok(raw) => {
                storage.set(TOKEN_KEY, &session.token);
                storage.set(USER_KEY, &raw);
            }
            Err(e) => {
                // Memory still holds the session; the next reload starts logged out.
                leptos::logging::warn!("failed to persist user record: {e}");
                clear_storage(storage);
            }
        }
        self.session = Some(session);
    }

    /// Drop the session from memory and storage. Idempotent.
    pub fn clear(&mut self, storage: &dyn SessionStorage) {
        clear_storage(storage);
        self.session = None;
    }

    /// Swap in a fresh user record while keeping the token.
    ///
    /// `token` is the credential the record was fetched under. Returns
    /// `false`, leaving everything untouched, when there is no session or the
    /// session has since been replaced.
    pub fn replace_user(&mut self, storage: &dyn SessionStorage, token: &str, user: User) -> bool {
        if self.token() != Some(token) {
            return false;
        }
        let Some(current) = self.session.take() else {
            return false;
        };
        self.establish(storage, Session { token: current.token, user });
        true
    }

    /// Fold a login response into the session.
    ///
    /// Failure leaves the current session exactly as it was.
    pub fn apply_login(
        &mut self,
        storage: &dyn SessionStorage,
        result: Result<LoginResponse, ApiError>,
    ) -> AuthOutcome {
        match result {
            Ok(resp) => {
                self.establish(storage, Session { token: resp.access_token, user: resp.user });
                AuthOutcome::Success
            }
            Err(e) => {
                leptos::logging::log!("login rejected: {e}");
                AuthOutcome::from_error(&e)
            }
        }
    }
}

fn clear_storage(storage: &dyn SessionStorage) {
    storage.remove(TOKEN_KEY);
    storage.remove(USER_KEY);
}

/// Registration never creates a session; only the outcome matters.
pub fn register_outcome<T>(result: &Result<T, ApiError>) -> AuthOutcome {
    match result {
        Ok(_) => AuthOutcome::Success,
        Err(e) => {
            leptos::logging::log!("registration rejected: {e}");
            AuthOutcome::from_error(e)
        }
    }
}

/// Reactive handle to the session, shared through Leptos context.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
    storage: StoredValue<Arc<dyn SessionStorage>>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    /// Session backed by the browser's `localStorage`.
    pub fn new() -> Self {
        Self::with_storage(BrowserStorage)
    }

    pub fn with_storage(storage: impl SessionStorage + 'static) -> Self {
        let storage: Arc<dyn SessionStorage> = Arc::new(storage);
        Self {
            state: RwSignal::new(SessionState::default()),
            storage: StoredValue::new(storage),
        }
    }

    /// Read-only view for guards and components.
    pub fn state(self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    /// Current value without subscribing.
    pub fn snapshot(self) -> SessionState {
        self.state.get_untracked()
    }

    fn storage(self) -> Arc<dyn SessionStorage> {
        self.storage.get_value()
    }

    /// Restore the persisted session and leave the loading state.
    pub fn initialize(self) {
        let restored = SessionState::restore(self.storage().as_ref());
        if let Some(user) = restored.user() {
            leptos::logging::log!("session restored for user {} ({})", user.id, user.role);
        }
        self.state.set(restored);
    }

    /// Authenticate against the backend and adopt the returned session.
    pub async fn login<A: AuthApi>(self, api: &A, credentials: &Credentials) -> AuthOutcome {
        let result = api.login(credentials).await;
        let storage = self.storage();
        self.state
            .try_update(|state| state.apply_login(storage.as_ref(), result))
            .unwrap_or_else(|| AuthOutcome::Failure { message: GENERIC_ERROR_MESSAGE.to_owned() })
    }

    /// Create an account. The caller stays logged out either way.
    pub async fn register<A: AuthApi>(self, api: &A, data: &RegisterRequest) -> AuthOutcome {
        register_outcome(&api.register(data).await)
    }

    /// Forget the session. Calling it again is harmless.
    pub fn logout(self) {
        let storage = self.storage();
        self.state.update(|state| state.clear(storage.as_ref()));
    }

    /// Reload the user record from `/auth/me`, keeping the token.
    ///
    /// The record is dropped if the session changed while the call was in
    /// flight.
    ///
    /// # Errors
    ///
    /// Returns the API error when the fetch fails. A 401 has already cleared
    /// the session through the transport hook by the time this returns.
    pub async fn refresh_user<A: AuthApi>(self, api: &A) -> Result<(), ApiError> {
        let Some(token) = self.token() else {
            return Ok(());
        };
        let user = api.current_user().await?;
        let storage = self.storage();
        let applied = self
            .state
            .try_update(|state| state.replace_user(storage.as_ref(), &token, user))
            .unwrap_or(false);
        if !applied {
            leptos::logging::log!("session changed during refresh; discarding user record");
        }
        Ok(())
    }

    /// Record a freshly uploaded CV on the user of the session identified by
    /// `token`. Ignored if that session is gone.
    pub fn set_cv_url(self, token: &str, cv_url: String) {
        let storage = self.storage();
        self.state.update(|state| {
            if let Some(mut user) = state.user().cloned() {
                user.cv_url = Some(cv_url);
                state.replace_user(storage.as_ref(), token, user);
            }
        });
    }

    /// Current bearer token, without subscribing.
    pub fn token(self) -> Option<String> {
        self.state.with_untracked(|s| s.token().map(str::to_owned))
    }

    pub fn user(self) -> Option<User> {
        self.state.with(|s| s.user().cloned())
    }

    pub fn is_authenticated(self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    pub fn is_admin(self) -> bool {
        self.state.with(SessionState::is_admin)
    }

    pub fn is_company(self) -> bool {
        self.state.with(SessionState::is_company)
    }

    pub fn is_stagiaire(self) -> bool {
        self.state.with(SessionState::is_stagiaire)
    }
}

impl SessionHooks for SessionContext {
    fn bearer_token(&self) -> Option<String> {
        self.token()
    }

    fn on_unauthorized(&self) {
        if self.state.with_untracked(SessionState::is_authenticated) {
            leptos::logging::warn!("backend rejected the session token; logging out");
        }
        self.logout();
    }
}
