use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    bson::{self, doc, oid::ObjectId},
    Client, Collection,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{cast_object_id, NewsStore, StoreError};
use crate::models::news::{NewsDraft, NewsItem};

const COLLECTION: &str = "news";
const DEFAULT_DATABASE: &str = "tech_news";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct NewsDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    #[serde(rename = "createdAt")]
    created_at: bson::DateTime,
}

impl NewsDocument {
    fn new(draft: NewsDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id: ObjectId::new(),
            title: draft.title,
            description: draft.description,
            image_url: draft.image_url,
            created_at: bson::DateTime::from_system_time(created_at.into()),
        }
    }
}

impl From<NewsDocument> for NewsItem {
    fn from(doc: NewsDocument) -> Self {
        NewsItem {
            id: doc.id.to_hex(),
            title: doc.title,
            description: doc.description,
            image_url: doc.image_url,
            created_at: DateTime::<Utc>::from(doc.created_at.to_system_time()),
        }
    }
}

#[derive(Clone)]
pub struct MongoNewsStore {
    collection: Collection<NewsDocument>,
}

impl MongoNewsStore {
    /// Opens a client and pings the server so an unreachable database fails startup.
    ///
    /// The database is `db_name` if given, else the one named in the URI,
    /// else `tech_news`.
    pub async fn connect(uri: &str, db_name: Option<&str>) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let database = match db_name {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
        };
        database.run_command(doc! { "ping": 1 }).await?;
        info!("MongoDB connected to database {}", database.name());

        Ok(Self {
            collection: database.collection(COLLECTION),
        })
    }
}

#[async_trait]
impl NewsStore for MongoNewsStore {
    async fn list_all(&self) -> Result<Vec<NewsItem>, StoreError> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "createdAt": -1, "_id": -1 })
            .await?;
        let docs: Vec<NewsDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(NewsItem::from).collect())
    }

    async fn create(&self, draft: NewsDraft) -> Result<NewsItem, StoreError> {
        let document = NewsDocument::new(draft, Utc::now());
        self.collection.insert_one(&document).await?;
        debug!("Inserted news {}", document.id);
        Ok(document.into())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let oid = cast_object_id(id)?;
        let result = self.collection.delete_one(doc! { "_id": oid }).await?;
        debug!("Deleted {} news matching {}", result.deleted_count, id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_round_trips_through_bson_with_wire_names() {
        let created_at = DateTime::parse_from_rfc3339("2025-06-01T08:30:00.250Z")
            .unwrap()
            .with_timezone(&Utc);
        let document = NewsDocument::new(
            NewsDraft {
                title: Some("Kernel 6.18".to_string()),
                description: None,
                image_url: Some("https://img/k.png".to_string()),
            },
            created_at,
        );

        let raw = bson::to_document(&document).unwrap();
        assert!(raw.get_object_id("_id").is_ok());
        assert_eq!(raw.get_str("imageUrl").unwrap(), "https://img/k.png");
        assert!(raw.get_datetime("createdAt").is_ok());
        assert!(!raw.contains_key("description"));

        let item: NewsItem = bson::from_document::<NewsDocument>(raw).unwrap().into();
        assert_eq!(item.id, document.id.to_hex());
        assert_eq!(item.title.as_deref(), Some("Kernel 6.18"));
        assert!(item.description.is_none());
        assert_eq!(item.created_at, created_at);
    }

    #[test]
    fn documents_written_without_optional_fields_still_load() {
        let raw = doc! { "_id": ObjectId::new(), "createdAt": bson::DateTime::now() };
        let item: NewsItem = bson::from_document::<NewsDocument>(raw).unwrap().into();
        assert!(item.title.is_none());
        assert!(item.image_url.is_none());
    }

    // Live tests against a real server: MONGO_URI=... cargo test -- --ignored
    async fn scratch_store() -> Option<MongoNewsStore> {
        let uri = std::env::var("MONGO_URI").ok()?;
        let db_name = format!("news_test_{}", ObjectId::new().to_hex());
        Some(MongoNewsStore::connect(&uri, Some(&db_name)).await.unwrap())
    }

    fn draft(title: &str) -> NewsDraft {
        NewsDraft {
            title: Some(title.to_string()),
            ..NewsDraft::default()
        }
    }

    #[tokio::test]
    #[ignore]
    async fn live_create_then_list_newest_first() {
        let Some(store) = scratch_store().await else {
            return;
        };

        let x = store.create(draft("X")).await.unwrap();
        let y = store.create(draft("Y")).await.unwrap();
        let news = store.list_all().await.unwrap();
        store.collection.drop().await.unwrap();

        let ids: Vec<_> = news.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec![y.id.as_str(), x.id.as_str()]);
        assert_eq!(news[0].title.as_deref(), Some("Y"));
        assert!(news.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[tokio::test]
    #[ignore]
    async fn live_delete_removes_record_and_ignores_missing_ids() {
        let Some(store) = scratch_store().await else {
            return;
        };

        let keep = store.create(draft("keep")).await.unwrap();
        let gone = store.create(draft("gone")).await.unwrap();
        store.delete_by_id(&gone.id).await.unwrap();
        store.delete_by_id(&ObjectId::new().to_hex()).await.unwrap();
        store.delete_by_id("abcdefghijkl").await.unwrap();
        let news = store.list_all().await.unwrap();
        store.collection.drop().await.unwrap();

        assert_eq!(news.len(), 1);
        assert_eq!(news[0].id, keep.id);
    }

    #[tokio::test]
    #[ignore]
    async fn live_delete_of_malformed_id_is_invalid_id() {
        let Some(store) = scratch_store().await else {
            return;
        };

        let err = store.delete_by_id("not-an-object-id").await.unwrap_err();
        store.collection.drop().await.unwrap();
        assert!(matches!(err, StoreError::InvalidId(_)));
    }
}
