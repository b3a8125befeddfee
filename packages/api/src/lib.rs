//! # API crate — domain state for the insecure demo server
//!
//! Everything the HTTP handlers in the `web` crate manipulate lives here. The crate has
//! no notion of routing or rendering; it owns the data and the rules around it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Typed per-visitor session record, CSRF token minting and checking |
//! | [`comments`] | In-memory comment board shared by every visitor (stored-XSS payloads live here) |
//! | [`db`] | PostgreSQL pool construction, migrations and the credential lookup behind `/login` |
//! | [`models`] | `User` rows and `Comment` entries |
//!
//! ## Deliberately insecure behaviour
//!
//! The server exists to demonstrate stored XSS and CSRF. Passwords are compared in
//! plaintext, CSRF tokens come from a non-cryptographic generator and comment text is
//! stored exactly as submitted. None of this should be "fixed".

pub mod auth;
pub mod comments;
pub mod db;
pub mod error;
pub mod models;

pub use auth::{CsrfRejected, Identity, SessionData, SESSION_DATA_KEY};
pub use comments::CommentBoard;
pub use db::{MemoryUserStore, PgUserStore, UserStore};
pub use error::ApiError;
pub use models::{Comment, User};
