use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Body of a create request. Scalars are stored as their string form; only
/// objects and arrays fail to cast.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsDraft {
    #[serde(default, deserialize_with = "cast_to_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "cast_to_string")]
    pub description: Option<String>,
    #[serde(default, rename = "imageUrl", deserialize_with = "cast_to_string")]
    pub image_url: Option<String>,
}

fn cast_to_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(de::Error::custom(format!(
            "Cast to string failed for value {other}"
        ))),
    }
}

impl NewsItem {
    pub fn from_draft(id: String, draft: NewsDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            image_url: draft.image_url,
            created_at,
        }
    }
}
