//! Domain model types for the persistence layer
//!
//! This module defines:
//! - `StorageCollection`: the explicit mapping from entity kind to collection name
//! - `SiteSettings`: the singleton site configuration record
//! - `StoredSettings`: a loaded settings record with its provisioning version

use serde::{Deserialize, Serialize};

/// The wiki's storage collections.
///
/// This table is the single source of truth for collection naming: both
/// wiping and schema creation iterate it, so the set of provisioned
/// collections cannot drift between operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageCollection {
    Pages,
    PageContent,
    Users,
    SiteConfiguration,
}

impl StorageCollection {
    /// Every collection the installer provisions.
    pub const ALL: [StorageCollection; 4] = [
        StorageCollection::Pages,
        StorageCollection::PageContent,
        StorageCollection::Users,
        StorageCollection::SiteConfiguration,
    ];

    /// The literal collection name used in the database.
    pub fn name(self) -> &'static str {
        match self {
            StorageCollection::Pages => "Page",
            StorageCollection::PageContent => "PageContent",
            StorageCollection::Users => "User",
            StorageCollection::SiteConfiguration => "SiteConfiguration",
        }
    }
}

impl std::fmt::Display for StorageCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Singleton site configuration record.
///
/// Serialized to JSON text and stored as the `content` of a
/// `SiteConfigurationEntity` under the fixed settings identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    pub site_name: String,
    pub site_url: String,
    pub theme: String,
    pub markup_type: String,
    pub allowed_file_types: Vec<String>,
    pub allow_user_signup: bool,
    pub is_recaptcha_enabled: bool,
    pub recaptcha_public_key: String,
    pub recaptcha_private_key: String,
    pub overwrite_existing_files: bool,
    pub head_content: String,
    pub menu_markup: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "My Wiki".to_string(),
            site_url: "http://localhost".to_string(),
            theme: "Responsive".to_string(),
            markup_type: "Creole".to_string(),
            allowed_file_types: vec!["jpg".to_string(), "png".to_string(), "gif".to_string()],
            allow_user_signup: false,
            is_recaptcha_enabled: false,
            recaptcha_public_key: String::new(),
            recaptcha_private_key: String::new(),
            overwrite_existing_files: false,
            head_content: String::new(),
            menu_markup: String::new(),
        }
    }
}

impl SiteSettings {
    /// Serialize to the JSON text stored in the settings document.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from the JSON text stored in the settings document.
    pub fn from_json(json: &str) -> anyhow::Result<SiteSettings> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A settings record loaded from storage, with the version stamped at
/// provisioning time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSettings {
    pub settings: SiteSettings,
    pub version: String,
}
