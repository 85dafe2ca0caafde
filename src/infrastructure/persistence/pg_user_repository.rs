//! PostgreSQL implementation of the credential store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewUser, UserRecord};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct UserRow {
    username: String,
    email: Option<String>,
    full_name: Option<String>,
    disabled: bool,
    hashed_password: String,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        UserRecord {
            username: row.username,
            email: row.email,
            full_name: row.full_name,
            disabled: row.disabled,
            hashed_password: row.hashed_password,
        }
    }
}

/// A stored account together with its creation time, for listings.
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub user: UserRecord,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for StoredUser {
    fn from(row: UserRow) -> Self {
        let created_at = row.created_at;
        StoredUser {
            user: row.into(),
            created_at,
        }
    }
}

/// PostgreSQL repository for accounts in the `users` table.
///
/// The web service only reads through [`UserRepository`]. The inherent write
/// methods are used by the `admin` binary.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Inserts a new account. New accounts start enabled.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a
    /// duplicate username.
    pub async fn create_user(&self, new_user: &NewUser) -> Result<UserRecord, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username, email, full_name, hashed_password)
            VALUES ($1, $2, $3, $4)
            RETURNING username, email, full_name, disabled, hashed_password, created_at
            "#,
        )
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(&new_user.full_name)
        .bind(&new_user.hashed_password)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    /// Lists all accounts ordered by creation time.
    pub async fn list_users(&self) -> Result<Vec<StoredUser>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT username, email, full_name, disabled, hashed_password, created_at
            FROM users
            ORDER BY created_at, username
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(StoredUser::from).collect())
    }

    /// Sets the `disabled` flag. Returns `false` if the username does not exist.
    pub async fn set_disabled(&self, username: &str, disabled: bool) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET disabled = $2
            WHERE username = $1
            "#,
        )
        .bind(username)
        .bind(disabled)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT username, email, full_name, disabled, hashed_password, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UserRecord::from))
    }
}
