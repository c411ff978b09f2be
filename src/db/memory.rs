use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;
use tracing::debug;

use super::{cast_object_id, NewsStore, StoreError};
use crate::models::news::{NewsDraft, NewsItem};

/// In-process store with the same id format and ordering as the Mongo one.
#[derive(Default)]
pub struct MemoryNewsStore {
    // insertion order
    items: RwLock<Vec<NewsItem>>,
}

impl MemoryNewsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NewsStore for MemoryNewsStore {
    async fn list_all(&self) -> Result<Vec<NewsItem>, StoreError> {
        let items = self.items.read().await;
        let mut news: Vec<NewsItem> = items.iter().rev().cloned().collect();
        // stable sort keeps later inserts first on equal timestamps
        news.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(news)
    }

    async fn create(&self, draft: NewsDraft) -> Result<NewsItem, StoreError> {
        let item = NewsItem::from_draft(ObjectId::new().to_hex(), draft, Utc::now());
        self.items.write().await.push(item.clone());
        debug!("Inserted news {}", item.id);
        Ok(item)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let hex = cast_object_id(id)?.to_hex();
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| item.id != hex);
        debug!("Deleted {} news matching {}", before - items.len(), id);
        Ok(())
    }
}
