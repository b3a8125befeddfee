//! # Web crate — the insecure demo server
//!
//! Builds the axum [`Router`] served by the `insecure-demo` binary: the routes from
//! [`routes`], the session layer, request tracing and the static file fallback.
//!
//! ## Session cookie
//!
//! The cookie is signed with a key derived from `SECRET_KEY`, but it is neither
//! `HttpOnly` nor `Secure`, so injected scripts can read it. That is the surface the
//! stored-XSS half of the demo is about.

use std::path::Path;

use axum::Router;
use sha2::{Digest, Sha512};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::{Key, SameSite};
use tower_sessions::{Expiry, SessionManagerLayer, SessionStore};

pub mod error;
pub mod extract;
pub mod routes;
pub mod settings;
pub mod state;

pub use error::AppError;
pub use settings::Settings;
pub use state::AppState;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "connect.sid";

/// Derive the 64-byte cookie signing key from an arbitrary-length secret.
fn signing_key(secret: &str) -> Key {
    Key::from(Sha512::digest(secret.as_bytes()).as_slice())
}

/// Build the application router on top of `session_store`.
pub fn app<S>(state: AppState, session_store: S, settings: &Settings) -> Router
where
    S: SessionStore + Clone,
{
    let session_layer = SessionManagerLayer::new(session_store)
        .with_name(SESSION_COOKIE)
        .with_http_only(false)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_path("/")
        .with_expiry(Expiry::OnSessionEnd)
        .with_signed(signing_key(&settings.secret_key));

    routes::router()
        .fallback_service(ServeDir::new(Path::new(&settings.static_dir)))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(session_layer),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signing_key_is_deterministic() {
        let a = signing_key("dev-secret");
        let b = signing_key("dev-secret");
        let c = signing_key("other");
        assert_eq!(a.master(), b.master());
        assert_ne!(a.master(), c.master());
    }
}
