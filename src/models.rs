use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Paste {
    pub code: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
