use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{Message, MessageStore, NewMessage, SortOrder, StoreError};

/// Process-local store. Ids start at 1, like a fresh SERIAL column.
#[derive(Default)]
pub struct MemoryMessageStore {
    messages: RwLock<Vec<Message>>,
}

impl MemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageStore for MemoryMessageStore {
    async fn create(&self, message: NewMessage) -> Result<Message, StoreError> {
        message.validate()?;

        let mut messages = self.messages.write().await;
        let now = Utc::now();
        let saved = Message {
            id: messages.last().map_or(1, |m| m.id + 1),
            name: message.name,
            content: message.content,
            created_at: now,
            updated_at: now,
        };
        messages.push(saved.clone());

        Ok(saved)
    }

    async fn list(&self, order: SortOrder) -> Result<Vec<Message>, StoreError> {
        let mut messages = self.messages.read().await.clone();

        match order {
            SortOrder::CreatedAtDesc => {
                messages.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)))
            }
            SortOrder::CreatedAtAsc => {
                messages.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)))
            }
        }

        Ok(messages)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.messages.read().await.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_assigns_id_and_timestamps() {
        let store = MemoryMessageStore::new();

        let first = store.create(NewMessage::new("Alice", "hi")).await.unwrap();
        let second = store.create(NewMessage::new("Bob", "hey")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.created_at, first.updated_at);
        assert!(second.created_at >= first.created_at);
    }

    #[tokio::test]
    async fn list_honours_sort_order() {
        let store = MemoryMessageStore::new();
        store.create(NewMessage::new("A", "first")).await.unwrap();
        store.create(NewMessage::new("B", "second")).await.unwrap();

        let newest_first = store.list(SortOrder::CreatedAtDesc).await.unwrap();
        let names: Vec<_> = newest_first.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);

        let oldest_first = store.list(SortOrder::CreatedAtAsc).await.unwrap();
        let names: Vec<_> = oldest_first.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[tokio::test]
    async fn invalid_message_is_not_stored() {
        let store = MemoryMessageStore::new();

        let result = store.create(NewMessage::new("Alice", "")).await;

        assert!(matches!(result, Err(StoreError::Invalid(_))));
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
