//! Document entity definitions
//!
//! One module per storage collection. Every entity implements
//! [`StoredDocument`], which ties it to its collection in the mapping table
//! and names the identifier used as the upsert key.

pub mod page;
pub mod page_content;
pub mod site_configuration;
pub mod user;

pub use page::Page;
pub use page_content::PageContent;
pub use site_configuration::SiteConfigurationEntity;
pub use user::User;

use mongodb::bson::Bson;
use serde::{Serialize, de::DeserializeOwned};

use crate::model::StorageCollection;

/// A document persisted in one of the wiki's storage collections.
pub trait StoredDocument: Serialize + DeserializeOwned + Send + Sync {
    /// The collection this document lives in.
    const COLLECTION: StorageCollection;

    /// The identifier used to locate the document for replace/upsert.
    fn document_id(&self) -> Bson;
}
