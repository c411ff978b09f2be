pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

use crate::models::news::{NewsDraft, NewsItem};

pub use memory::MemoryNewsStore;
pub use mongo::MongoNewsStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
    #[error("Cast to ObjectId failed for value \"{0}\" (type string) at path \"_id\" for model \"News\"")]
    InvalidId(String),
    #[error("{0}")]
    Unavailable(String),
}

/// Persistence for the news collection.
///
/// Implementations never validate field contents. `delete_by_id` succeeds
/// whether or not a record matched; only an unparseable id or a backend
/// failure is an error.
#[async_trait]
pub trait NewsStore: Send + Sync {
    /// Every record, newest `created_at` first.
    async fn list_all(&self) -> Result<Vec<NewsItem>, StoreError>;

    async fn create(&self, draft: NewsDraft) -> Result<NewsItem, StoreError>;

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;
}

/// Casts a path id to an ObjectId: 24 hex characters, or any 12-byte string
/// taken as the raw id bytes.
pub(crate) fn cast_object_id(id: &str) -> Result<ObjectId, StoreError> {
    if let Ok(bytes) = <[u8; 12]>::try_from(id.as_bytes()) {
        return Ok(ObjectId::from_bytes(bytes));
    }
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
}
