//! Persistence traits for the storage abstraction layer
//!
//! This module defines the traits the rest of the application programs
//! against: install-time provisioning operations and the runtime lookups
//! the site services need.

pub mod installer;
pub mod site;

pub use installer::InstallerPersistence;
pub use site::SitePersistence;

use async_trait::async_trait;

/// Unified persistence service trait
///
/// The main interface handed to the application state: provisioning plus
/// runtime lookups over one backend.
#[async_trait]
pub trait PersistenceService: InstallerPersistence + SitePersistence + Send + Sync {
    /// Health check for the storage backend
    async fn health_check(&self) -> anyhow::Result<()>;
}
