use async_trait::async_trait;
use sqlx::PgPool;

use super::{Message, MessageStore, NewMessage, SortOrder, StoreError};

pub struct PgMessageStore {
    pool: PgPool,
}

impl PgMessageStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_insert_error(e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &e {
        // not_null_violation, check_violation
        if matches!(db_err.code().as_deref(), Some("23502") | Some("23514")) {
            return StoreError::Invalid(db_err.message().to_string());
        }
    }
    StoreError::Database(e)
}

#[async_trait]
impl MessageStore for PgMessageStore {
    async fn create(&self, message: NewMessage) -> Result<Message, StoreError> {
        message.validate()?;

        sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (name, content)
            VALUES ($1, $2)
            RETURNING id, name, content, created_at, updated_at
            "#,
        )
        .bind(&message.name)
        .bind(&message.content)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)
    }

    async fn list(&self, order: SortOrder) -> Result<Vec<Message>, StoreError> {
        let query = format!(
            "SELECT id, name, content, created_at, updated_at FROM messages ORDER BY {}",
            order.as_sql()
        );

        let messages = sqlx::query_as::<_, Message>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(messages)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM messages")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
