use sqlx::AnyPool;

use crate::error::ApiResult;
use crate::models::Paste;
use crate::store::{Backend, InsertOutcome};

#[derive(Clone)]
pub struct Database {
    pool: AnyPool,
}

impl Database {
    /// Connect to a database by URL.
    pub async fn connect(url: &str) -> anyhow::Result<Self> {
        Ok(Self {
            pool: AnyPool::connect(url).await?,
        })
    }

    /// Apply the schema. Idempotent.
    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS pastes (code TEXT PRIMARY KEY, content TEXT NOT NULL, \
             created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP)",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

/// Whether an insert failed on the table's unique constraint, as opposed to
/// the database being unavailable. SQLite reports extended constraint codes;
/// PostgreSQL reports `unique_violation`.
fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => {
            matches!(db.code().as_deref(), Some("1555" | "2067" | "23505"))
        }
        _ => false,
    }
}

impl Backend for Database {
    async fn insert_unique(&mut self, code: &str, content: &str) -> ApiResult<InsertOutcome> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query_as::<_, Paste>(
            "INSERT INTO pastes (code, content) VALUES (?, ?) RETURNING code, content, created_at",
        )
        .bind(code)
        .bind(content)
        .fetch_one(&mut conn)
        .await;

        match result {
            Ok(paste) => Ok(InsertOutcome::Inserted(paste)),
            Err(err) if is_unique_violation(&err) => Ok(InsertOutcome::Conflict),
            Err(err) => Err(err.into()),
        }
    }

    async fn find_by_key(&mut self, code: &str) -> ApiResult<Option<Paste>> {
        let mut conn = self.pool.acquire().await?;
        let paste =
            sqlx::query_as::<_, Paste>("SELECT code, content, created_at FROM pastes WHERE code = ?")
                .bind(code)
                .fetch_optional(&mut conn)
                .await?;
        Ok(paste)
    }

    async fn delete_by_key(&mut self, code: &str) -> ApiResult<bool> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("DELETE FROM pastes WHERE code = ?")
            .bind(code)
            .execute(&mut conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
