//! MongoDB persistence backend
//!
//! This module implements the persistence traits against a MongoDB
//! database. The database name is taken from the connection string's path
//! segment. Every operation wraps driver failures into the single
//! `RoadkillError::Database` kind, formatted with a redacted target so
//! credentials never appear in error text.

use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::{Document, doc};
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Collection, Database, IndexModel};

use roadkill_common::{RoadkillError, SITE_SETTINGS_ID, redact_connection_string};

use crate::entity::{SiteConfigurationEntity, StoredDocument, User};
use crate::model::{SiteSettings, StorageCollection, StoredSettings};
use crate::traits::{InstallerPersistence, PersistenceService, SitePersistence};

/// MongoDB installer repository
///
/// Holds one client handle; the driver owns connection pooling. Dropping
/// the value releases everything, so there is no explicit disposal step.
pub struct MongoInstallerRepository {
    database: Database,
    redacted_target: String,
}

impl MongoInstallerRepository {
    /// Connect to the database named by the connection string.
    ///
    /// The connection string must carry a database name in its path
    /// segment (`mongodb://host/dbname`). Timeouts are applied explicitly
    /// rather than left to driver defaults.
    pub async fn connect(
        connection_string: &str,
        connect_timeout: Duration,
        server_selection_timeout: Duration,
    ) -> anyhow::Result<Self> {
        let redacted_target = redact_connection_string(connection_string);

        // The driver's parse error can echo the offending URI, so it is
        // replaced with a fixed message here.
        let mut options = ClientOptions::parse(connection_string).await.map_err(|_| {
            RoadkillError::database("connect", &redacted_target, "invalid connection string")
        })?;
        options.connect_timeout = Some(connect_timeout);
        options.server_selection_timeout = Some(server_selection_timeout);

        let database_name = options.default_database.clone().ok_or_else(|| {
            RoadkillError::IllegalArgument(
                "connection string does not name a database".to_string(),
            )
        })?;

        let client = Client::with_options(options)
            .map_err(|e| RoadkillError::database("connect", &redacted_target, e))?;

        Ok(Self {
            database: client.database(&database_name),
            redacted_target,
        })
    }

    /// The redacted description of the connected database, safe for logs.
    pub fn target(&self) -> &str {
        &self.redacted_target
    }

    fn collection<T: Send + Sync>(&self, collection: StorageCollection) -> Collection<T> {
        self.database.collection::<T>(collection.name())
    }

    fn db_error(&self, op: &str, err: mongodb::error::Error) -> RoadkillError {
        RoadkillError::database(op, &self.redacted_target, err)
    }

    /// Generic upsert: replace the document whose `_id` equals `doc`'s
    /// identifier, inserting it if absent.
    pub async fn save_or_update<T: StoredDocument>(&self, document: &T) -> anyhow::Result<()> {
        self.collection::<T>(T::COLLECTION)
            .find_one_and_replace(doc! { "_id": document.document_id() }, document)
            .upsert(true)
            .await
            .map_err(|e| self.db_error("save_or_update", e))?;

        Ok(())
    }

    async fn drop_all(&self, op: &str) -> anyhow::Result<()> {
        for collection in StorageCollection::ALL {
            self.database
                .collection::<Document>(collection.name())
                .drop()
                .await
                .map_err(|e| self.db_error(op, e))?;
            tracing::debug!(collection = collection.name(), "dropped collection");
        }

        Ok(())
    }
}

// ============================================================================
// PersistenceService implementation
// ============================================================================

#[async_trait]
impl PersistenceService for MongoInstallerRepository {
    async fn health_check(&self) -> anyhow::Result<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| self.db_error("health_check", e))?;

        Ok(())
    }
}

// ============================================================================
// InstallerPersistence implementation
// ============================================================================

#[async_trait]
impl InstallerPersistence for MongoInstallerRepository {
    async fn wipe(&self) -> anyhow::Result<()> {
        self.drop_all("wipe").await
    }

    async fn create_schema(&self) -> anyhow::Result<()> {
        self.drop_all("create_schema").await?;

        for collection in StorageCollection::ALL {
            self.database
                .create_collection(collection.name())
                .await
                .map_err(|e| self.db_error("create_schema", e))?;
        }

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection::<User>(StorageCollection::Users)
            .create_index(email_index)
            .await
            .map_err(|e| self.db_error("create_schema", e))?;

        tracing::info!(database = %self.redacted_target, "database schema created");

        Ok(())
    }

    async fn add_admin_user(
        &self,
        email: &str,
        username: &str,
        password_hash: &str,
    ) -> anyhow::Result<()> {
        let mut user = User::admin(email, username, password_hash);

        // Re-seeding keeps the existing document identifier so the upsert
        // replaces rather than duplicates.
        if let Some(existing) = self.user_find_by_email(email).await? {
            user = user.with_id(existing.id);
        }

        self.save_or_update(&user).await
    }

    async fn save_settings(&self, settings: &SiteSettings, version: &str) -> anyhow::Result<()> {
        let entity = SiteConfigurationEntity::new(SITE_SETTINGS_ID, version, settings.to_json()?);

        self.save_or_update(&entity).await
    }
}

// ============================================================================
// SitePersistence implementation
// ============================================================================

#[async_trait]
impl SitePersistence for MongoInstallerRepository {
    async fn settings_find(&self) -> anyhow::Result<Option<StoredSettings>> {
        let entity = self
            .collection::<SiteConfigurationEntity>(StorageCollection::SiteConfiguration)
            .find_one(doc! { "_id": SITE_SETTINGS_ID })
            .await
            .map_err(|e| self.db_error("settings_find", e))?;

        match entity {
            Some(entity) => {
                let settings = SiteSettings::from_json(&entity.content).map_err(|e| {
                    RoadkillError::Settings(format!("stored settings are not valid JSON: {e}"))
                })?;

                Ok(Some(StoredSettings {
                    settings,
                    version: entity.version,
                }))
            }
            None => Ok(None),
        }
    }

    async fn user_find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let user = self
            .collection::<User>(StorageCollection::Users)
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| self.db_error("user_find_by_email", e))?;

        Ok(user)
    }

    async fn collection_names(&self) -> anyhow::Result<Vec<String>> {
        let names = self
            .database
            .list_collection_names()
            .await
            .map_err(|e| self.db_error("collection_names", e))?;

        Ok(names)
    }
}
