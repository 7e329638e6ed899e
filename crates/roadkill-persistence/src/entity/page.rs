//! Page document entity

use mongodb::bson::{Bson, DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

use super::StoredDocument;
use crate::model::StorageCollection;

/// A wiki page's metadata. The page text itself lives in `PageContent`,
/// one document per revision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub tags: Vec<String>,
    pub created_by: String,
    pub created_on: DateTime,
    pub modified_by: String,
    pub modified_on: DateTime,
    pub is_locked: bool,
}

impl Page {
    pub fn new(title: &str, author: &str) -> Self {
        let now = DateTime::now();
        Self {
            id: ObjectId::new(),
            title: title.to_string(),
            tags: Vec::new(),
            created_by: author.to_string(),
            created_on: now,
            modified_by: author.to_string(),
            modified_on: now,
            is_locked: false,
        }
    }
}

impl StoredDocument for Page {
    const COLLECTION: StorageCollection = StorageCollection::Pages;

    fn document_id(&self) -> Bson {
        Bson::ObjectId(self.id)
    }
}
