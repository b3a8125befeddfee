//! # Session data — the per-visitor record behind the session cookie
//!
//! The whole record is stored under a single key ([`SESSION_DATA_KEY`]) so handlers deal
//! with one typed value instead of loose string keys. [`load`] creates the record with
//! insecure defaults on first contact; handlers mutate it and hand it back to [`store`].
//!
//! Authentication is modelled by [`Identity`]: a session is either anonymous
//! (`identity == None`) or carries both the username and the role from the `users` row.
//! Vulnerability flags, the CSRF token and the email sit beside the identity and survive
//! login; only [`tower_sessions::Session::flush`] on logout wipes them.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use super::csrf::{generate_token, verify_token, CsrfRejected};
use crate::error::ApiError;
use crate::models::User;

/// Key for storing [`SessionData`] in the session.
pub const SESSION_DATA_KEY: &str = "demo";

/// Who is logged in on this session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user: String,
    pub role: String,
}

/// Session data stored in the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    pub xss_vulnerable: bool,
    pub csrf_vulnerable: bool,
    pub identity: Option<Identity>,
    pub csrf_token: Option<String>,
    pub email: Option<String>,
}

impl Default for SessionData {
    fn default() -> Self {
        Self {
            xss_vulnerable: true,
            csrf_vulnerable: true,
            identity: None,
            csrf_token: None,
            email: None,
        }
    }
}

impl SessionData {
    /// Username of the logged-in user, if any.
    pub fn user(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.user.as_str())
    }

    pub fn role(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.role.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// True when `/change-email` must check the CSRF token.
    pub fn csrf_protected(&self) -> bool {
        !self.csrf_vulnerable
    }

    /// Apply the checkbox state from `/toggle`.
    ///
    /// Turning CSRF protection on mints a token if the session has none; an existing
    /// token is kept.
    pub fn set_toggles(&mut self, xss_vulnerable: bool, csrf_vulnerable: bool) {
        self.xss_vulnerable = xss_vulnerable;
        self.csrf_vulnerable = csrf_vulnerable;
        if self.csrf_protected() {
            self.ensure_csrf_token();
        }
    }

    /// Return the session's CSRF token, minting one on first use.
    pub fn ensure_csrf_token(&mut self) -> &str {
        self.csrf_token.get_or_insert_with(generate_token)
    }

    /// Record a successful login. The derived email is only set once per session.
    pub fn log_in(&mut self, user: &User) {
        self.identity = Some(Identity {
            user: user.username.clone(),
            role: user.role.clone(),
        });
        if self.email.is_none() {
            self.email = Some(format!("{}@example.com", user.username));
        }
    }

    /// Gate a state-changing request on the CSRF token when protection is on.
    pub fn check_csrf(&self, submitted: Option<&str>) -> Result<(), CsrfRejected> {
        if self.csrf_vulnerable {
            return Ok(());
        }
        verify_token(self.csrf_token.as_deref(), submitted)
    }

    /// Email shown on the profile page.
    pub fn display_email(&self) -> &str {
        self.email.as_deref().unwrap_or("user@example.com")
    }
}

/// Read the session record, creating and persisting the defaults on first contact.
pub async fn load(session: &Session) -> Result<SessionData, ApiError> {
    match session.get::<SessionData>(SESSION_DATA_KEY).await? {
        Some(data) => Ok(data),
        None => {
            let data = SessionData::default();
            store(session, &data).await?;
            Ok(data)
        }
    }
}

/// Write the session record back.
pub async fn store(session: &Session, data: &SessionData) -> Result<(), ApiError> {
    session.insert(SESSION_DATA_KEY, data).await?;
    Ok(())
}
