//! Install workflow
//!
//! Orchestrates first-run provisioning: schema creation, bootstrap admin
//! seeding, and settings persistence, in that order. A single-execution
//! guard rejects concurrent or repeated runs; the guard is released on
//! failure so the operator can retry after fixing the cause.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;

use roadkill_common::RoadkillError;
use roadkill_persistence::model::SiteSettings;

use crate::model::AppState;

/// What a successful install produced.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallOutcome {
    pub admin_email: String,
    pub version: String,
}

pub struct InstallService {
    running: AtomicBool,
}

impl InstallService {
    pub fn new() -> Self {
        Self {
            running: AtomicBool::new(false),
        }
    }

    /// Run the install workflow once.
    ///
    /// Fails with `AlreadyInstalled` when the site is installed, and with
    /// an `Install` error when another run holds the guard. On success the
    /// application state's installed flag flips and the gate opens.
    pub async fn run(
        &self,
        state: &AppState,
        email: &str,
        username: &str,
        password: &str,
        settings: SiteSettings,
    ) -> anyhow::Result<InstallOutcome> {
        if state.is_installed() {
            return Err(RoadkillError::AlreadyInstalled.into());
        }
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(
                RoadkillError::Install("an install run is already in progress".to_string()).into(),
            );
        }

        let result = self
            .provision(state, email, username, password, settings)
            .await;
        self.running.store(false, Ordering::Release);

        if result.is_ok() {
            state.mark_installed();
        }

        result
    }

    async fn provision(
        &self,
        state: &AppState,
        email: &str,
        username: &str,
        password: &str,
        settings: SiteSettings,
    ) -> anyhow::Result<InstallOutcome> {
        let store = state.store();

        tracing::info!("creating database schema");
        store.create_schema().await?;

        tracing::info!(email, username, "seeding bootstrap admin user");
        roadkill_auth::service::user::create_admin(store, email, username, password).await?;

        let version = state.configuration().version();
        tracing::info!(%version, "saving site settings");
        store.save_settings(&settings, &version).await?;

        tracing::info!("installation complete");

        Ok(InstallOutcome {
            admin_email: email.to_string(),
            version,
        })
    }
}

impl Default for InstallService {
    fn default() -> Self {
        Self::new()
    }
}
