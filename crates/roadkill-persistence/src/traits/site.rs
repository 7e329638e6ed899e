//! Site persistence trait
//!
//! Runtime lookups used by the settings and user services once the
//! application is installed.

use async_trait::async_trait;

use crate::entity::User;
use crate::model::StoredSettings;

/// Read operations over the provisioned database
#[async_trait]
pub trait SitePersistence: Send + Sync {
    /// Load the singleton settings document, if the site has been installed.
    async fn settings_find(&self) -> anyhow::Result<Option<StoredSettings>>;

    /// Find a user account by email address.
    async fn user_find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;

    /// List the collections currently present in the database.
    async fn collection_names(&self) -> anyhow::Result<Vec<String>>;
}
