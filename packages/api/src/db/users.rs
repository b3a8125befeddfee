//! Credential lookup behind `POST /login`.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::ApiError;
use crate::models::User;

/// Read-only access to the `users` table.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find the user whose username and password both match exactly.
    ///
    /// Passwords are stored and compared in plaintext.
    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, ApiError>;
}

/// [`UserStore`] backed by PostgreSQL.
#[derive(Clone, Debug)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, ApiError> {
        let user: Option<User> = sqlx::query_as(
            "SELECT username, role FROM users WHERE username = $1 AND password = $2 LIMIT 1",
        )
        .bind(username)
        .bind(password)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

/// In-memory [`UserStore`] for testing.
#[derive(Clone, Debug, Default)]
pub struct MemoryUserStore {
    users: Vec<(String, String, String)>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an account.
    pub fn with_user(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        self.users
            .push((username.into(), password.into(), role.into()));
        self
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, ApiError> {
        Ok(self
            .users
            .iter()
            .find(|(u, p, _)| u == username && p == password)
            .map(|(u, _, role)| User {
                username: u.clone(),
                role: role.clone(),
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_matches_exact_credentials() {
        let store = MemoryUserStore::new()
            .with_user("admin", "admin123", "admin")
            .with_user("alice", "alice123", "user");

        let user = store
            .find_by_credentials("admin", "admin123")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.role, "admin");

        assert!(store
            .find_by_credentials("admin", "alice123")
            .await
            .unwrap()
            .is_none());
        assert!(store
            .find_by_credentials("Admin", "admin123")
            .await
            .unwrap()
            .is_none());
    }
}
