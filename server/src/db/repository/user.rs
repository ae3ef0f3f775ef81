//! User Repository

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use super::{RepoError, RepoResult};
use crate::db::models::{NewUser, User};

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Resolve a login identifier against the lowercased email or the raw
    /// username, whichever matches first
    pub async fn find_by_identifier(&self, identifier: &str) -> RepoResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE email = ?1 OR username = ?2 LIMIT 1",
        )
        .bind(identifier.to_lowercase())
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Whether an account already claims this email or username
    pub async fn identity_taken(&self, email: &str, username: Option<&str>) -> RepoResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM users WHERE email = ?1 OR (?2 IS NOT NULL AND username = ?2)",
        )
        .bind(email)
        .bind(username)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    /// Create a new account
    ///
    /// The email is normalized to lowercase before storage. The duplicate
    /// pre-check gives the friendly error; the UNIQUE indexes catch any
    /// registration that races past it.
    pub async fn create(&self, data: NewUser) -> RepoResult<User> {
        let email = data.email.to_lowercase();

        if self.identity_taken(&email, data.username.as_deref()).await? {
            return Err(RepoError::Duplicate("User already exists".to_string()));
        }

        let password_hash = User::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Failed to hash password: {}", e)))?;

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4().to_string(),
            full_name: data.full_name,
            username: data.username,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r#"INSERT INTO users
                (id, full_name, username, email, password_hash, created_at, updated_at)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"#,
        )
        .bind(&user.id)
        .bind(&user.full_name)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match RepoError::from(e) {
            RepoError::Duplicate(_) => RepoError::Duplicate("User already exists".to_string()),
            other => other,
        })?;

        Ok(user)
    }
}
