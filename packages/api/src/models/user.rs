//! # User model
//!
//! A row of the `users` table as seen by the login handler. Only the columns the
//! session needs are selected; the plaintext password stays in the database.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Result of a successful credential lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub username: String,
    pub role: String,
}
