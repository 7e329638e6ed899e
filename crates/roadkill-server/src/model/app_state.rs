//! Shared application state
//!
//! `AppState` is the composition root: constructed once at bootstrap and
//! handed to every handler through `web::Data`, it exposes the
//! configuration, the persistence service, and the installed flag. It has
//! no behavior of its own beyond read access.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use roadkill_persistence::PersistenceService;

use super::config::Configuration;

pub struct AppState {
    configuration: Configuration,
    store: Arc<dyn PersistenceService>,
    installed: AtomicBool,
}

impl AppState {
    /// The installed flag starts from configuration and flips once the
    /// install workflow completes.
    pub fn new(configuration: Configuration, store: Arc<dyn PersistenceService>) -> Self {
        let installed = AtomicBool::new(configuration.installed());

        Self {
            configuration,
            store,
            installed,
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn store(&self) -> &dyn PersistenceService {
        self.store.as_ref()
    }

    pub fn is_installed(&self) -> bool {
        self.installed.load(Ordering::Acquire)
    }

    pub fn mark_installed(&self) {
        self.installed.store(true, Ordering::Release);
    }
}
