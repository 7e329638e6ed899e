//! In-memory persistence backend for API-level tests
//!
//! Mimics the MongoDB backend's observable behavior: collections tracked by
//! name, users upserted by email, and settings stored through a real JSON
//! round trip.

use std::collections::BTreeSet;

use async_trait::async_trait;
use parking_lot::Mutex;

use roadkill_persistence::entity::User;
use roadkill_persistence::model::{SiteSettings, StorageCollection, StoredSettings};
use roadkill_persistence::traits::{InstallerPersistence, PersistenceService, SitePersistence};

#[derive(Default)]
pub struct MemoryStore {
    pub users: Mutex<Vec<User>>,
    pub settings: Mutex<Option<StoredSettings>>,
    pub collections: Mutex<BTreeSet<String>>,
}

#[async_trait]
impl InstallerPersistence for MemoryStore {
    async fn wipe(&self) -> anyhow::Result<()> {
        self.users.lock().clear();
        *self.settings.lock() = None;
        self.collections.lock().clear();
        Ok(())
    }

    async fn create_schema(&self) -> anyhow::Result<()> {
        self.wipe().await?;

        let mut collections = self.collections.lock();
        for collection in StorageCollection::ALL {
            collections.insert(collection.name().to_string());
        }
        Ok(())
    }

    async fn add_admin_user(
        &self,
        email: &str,
        username: &str,
        password_hash: &str,
    ) -> anyhow::Result<()> {
        let mut users = self.users.lock();
        users.retain(|u| u.email != email);
        users.push(User::admin(email, username, password_hash));
        Ok(())
    }

    async fn save_settings(&self, settings: &SiteSettings, version: &str) -> anyhow::Result<()> {
        // Same JSON round trip the real backend performs.
        let json = settings.to_json()?;

        *self.settings.lock() = Some(StoredSettings {
            settings: SiteSettings::from_json(&json)?,
            version: version.to_string(),
        });
        Ok(())
    }
}

#[async_trait]
impl SitePersistence for MemoryStore {
    async fn settings_find(&self) -> anyhow::Result<Option<StoredSettings>> {
        Ok(self.settings.lock().clone())
    }

    async fn user_find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        Ok(self.users.lock().iter().find(|u| u.email == email).cloned())
    }

    async fn collection_names(&self) -> anyhow::Result<Vec<String>> {
        Ok(self.collections.lock().iter().cloned().collect())
    }
}

#[async_trait]
impl PersistenceService for MemoryStore {
    async fn health_check(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
