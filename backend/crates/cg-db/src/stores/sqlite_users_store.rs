//! SQLite-backed users store.
//!
//! Uniqueness of the identity triple is enforced by the schema: the primary
//! key is the canonical id and `(scheme, provider, username)` carries a
//! UNIQUE constraint, so two racing inserts of the same triple resolve to one
//! row and one `StoreError::Conflict`.

use crate::DbError;

use cg_core::{StoreError, StoreResult, User, UsersStore};

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct SqliteUsersStore {
    pool: SqlitePool,
}

impl SqliteUsersStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn user_from_row(row: &SqliteRow) -> Result<User, DbError> {
        Ok(User {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            provider: row.try_get("provider")?,
            scheme: row.try_get("scheme")?,
        })
    }
}

#[async_trait]
impl UsersStore for SqliteUsersStore {
    async fn all(&self) -> StoreResult<Vec<User>> {
        let rows = sqlx::query("SELECT id, username, provider, scheme FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(DbError::from)?;

        rows.iter()
            .map(|row| Self::user_from_row(row).map_err(StoreError::from))
            .collect()
    }

    async fn get(&self, id: &str) -> StoreResult<User> {
        let row = sqlx::query("SELECT id, username, provider, scheme FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(DbError::from)?;

        match row {
            Some(row) => Ok(Self::user_from_row(&row)?),
            None => Err(StoreError::not_found(id)),
        }
    }

    async fn add(&self, user: User) -> StoreResult<User> {
        let user = User {
            id: user.canonical_id(),
            ..user
        };

        let result = sqlx::query(
            r#"
                INSERT INTO users (id, username, provider, scheme)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&user.id)
        .bind(&user.username)
        .bind(&user.provider)
        .bind(&user.scheme)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(user),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(StoreError::conflict(user.id))
            }
            Err(e) => Err(DbError::from(e).into()),
        }
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(DbError::from)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(id));
        }

        Ok(())
    }
}
