//! Installer persistence trait
//!
//! Defines the first-run provisioning operations executed during
//! installation. Implementations run single-threaded, once, before normal
//! request handling begins; the install workflow enforces that with its
//! single-execution guard.

use async_trait::async_trait;

use crate::model::SiteSettings;

/// First-run database provisioning operations
#[async_trait]
pub trait InstallerPersistence: Send + Sync {
    /// Drop every collection in the storage mapping table. Dropping a
    /// collection that does not exist is a no-op.
    async fn wipe(&self) -> anyhow::Result<()>;

    /// Drop and recreate every collection in the storage mapping table,
    /// then create the indexes the application relies on.
    async fn create_schema(&self) -> anyhow::Result<()>;

    /// Upsert the bootstrap admin account. `password_hash` must already be
    /// hashed; implementations never see plaintext passwords.
    async fn add_admin_user(
        &self,
        email: &str,
        username: &str,
        password_hash: &str,
    ) -> anyhow::Result<()>;

    /// Serialize the settings to JSON and upsert the singleton settings
    /// document, stamped with the supplied product version.
    async fn save_settings(&self, settings: &SiteSettings, version: &str) -> anyhow::Result<()>;
}
