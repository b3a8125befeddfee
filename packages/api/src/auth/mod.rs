//! Session state and CSRF handling.

mod csrf;
mod session;

pub use csrf::{generate_token, verify_token, CsrfRejected};
pub use session::{load, store, Identity, SessionData, SESSION_DATA_KEY};
