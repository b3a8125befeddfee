//! # Database module — PostgreSQL pool and the user store
//!
//! ## Design
//!
//! The binary builds one [`sqlx::PgPool`] with [`connect`], runs the embedded migrations
//! with [`migrate`] and wraps the pool in a [`PgUserStore`]. Handlers only see the
//! [`UserStore`] trait, which is how the router tests swap in a [`MemoryUserStore`].
//!
//! ## Re-exports
//!
//! - [`connect`] — opens the pool, with TLS required or disabled.
//! - [`migrate`] — creates and seeds the `users` table.
//! - [`UserStore`], [`PgUserStore`], [`MemoryUserStore`] — credential lookup.

mod pool;
mod users;

pub use pool::{connect, migrate};
pub use users::{MemoryUserStore, PgUserStore, UserStore};
