//! Site configuration document entity

use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};

use super::StoredDocument;
use crate::model::StorageCollection;

/// Wrapper document for the JSON-serialized site settings.
///
/// Keyed by the fixed settings identifier, so there is at most one of these
/// per installation. `version` records the product version that wrote it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfigurationEntity {
    #[serde(rename = "_id")]
    pub id: String,
    pub version: String,
    pub content: String,
}

impl SiteConfigurationEntity {
    pub fn new(id: &str, version: &str, content: String) -> Self {
        Self {
            id: id.to_string(),
            version: version.to_string(),
            content,
        }
    }
}

impl StoredDocument for SiteConfigurationEntity {
    const COLLECTION: StorageCollection = StorageCollection::SiteConfiguration;

    fn document_id(&self) -> Bson {
        Bson::String(self.id.clone())
    }
}
