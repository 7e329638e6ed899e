//! Page content document entity

use mongodb::bson::{Bson, DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

use super::StoredDocument;
use crate::model::StorageCollection;

/// One revision of a page's text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageContent {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub page_id: ObjectId,
    pub text: String,
    pub edited_by: String,
    pub edited_on: DateTime,
    pub version_number: i32,
}

impl PageContent {
    pub fn new(page_id: ObjectId, text: &str, editor: &str, version_number: i32) -> Self {
        Self {
            id: ObjectId::new(),
            page_id,
            text: text.to_string(),
            edited_by: editor.to_string(),
            edited_on: DateTime::now(),
            version_number,
        }
    }
}

impl StoredDocument for PageContent {
    const COLLECTION: StorageCollection = StorageCollection::PageContent;

    fn document_id(&self) -> Bson {
        Bson::ObjectId(self.id)
    }
}
