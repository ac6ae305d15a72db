use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// One guestbook entry. `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Message {
    pub id: i32,
    pub name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
