use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

mod memstore;
mod pgstore;

pub use memstore::MemoryMessageStore;
pub use pgstore::PgMessageStore;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Message {
    pub id: i32,
    pub name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied by the client. Everything else on [`Message`] is
/// assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub name: String,
    pub content: String,
}

impl NewMessage {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Mirrors the CHECK constraints on the `messages` table.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.name.trim().is_empty() {
            return Err(StoreError::Invalid("name can't be blank".to_string()));
        }
        if self.content.trim().is_empty() {
            return Err(StoreError::Invalid("content can't be blank".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    CreatedAtDesc,
    CreatedAtAsc,
}

impl SortOrder {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::CreatedAtDesc => "created_at DESC, id DESC",
            SortOrder::CreatedAtAsc => "created_at ASC, id ASC",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid message: {0}")]
    Invalid(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Append-only persistence for messages. No update or delete.
#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn create(&self, message: NewMessage) -> Result<Message, StoreError>;

    async fn list(&self, order: SortOrder) -> Result<Vec<Message>, StoreError>;

    async fn count(&self) -> Result<i64, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_fail_validation() {
        assert!(NewMessage::new("Alice", "hi").validate().is_ok());

        let err = NewMessage::new("", "hi").validate().unwrap_err();
        assert!(err.to_string().contains("name can't be blank"));

        let err = NewMessage::new("Alice", "").validate().unwrap_err();
        assert!(err.to_string().contains("content can't be blank"));

        let err = NewMessage::new(" \t ", "hi").validate().unwrap_err();
        assert!(err.to_string().contains("name can't be blank"));

        let err = NewMessage::new("Alice", "\n").validate().unwrap_err();
        assert!(err.to_string().contains("content can't be blank"));
    }

    #[test]
    fn sort_order_breaks_ties_by_id() {
        assert_eq!(SortOrder::CreatedAtDesc.as_sql(), "created_at DESC, id DESC");
        assert_eq!(SortOrder::CreatedAtAsc.as_sql(), "created_at ASC, id ASC");
    }
}
