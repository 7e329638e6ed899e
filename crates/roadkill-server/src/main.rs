//! Main entry point for the Roadkill server.
//!
//! Loads configuration, initializes logging, connects the persistence
//! backend, and starts the HTTP server.

use std::sync::Arc;

use roadkill_persistence::{MongoInstallerRepository, PersistenceService};
use roadkill_server::{
    model::{AppState, Configuration},
    service::InstallService,
    startup,
};
use tracing::info;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize configuration and logging
    let configuration = Configuration::new();
    let _logging_guard = startup::init_logging(&configuration.logging_config())?;

    info!(version = %configuration.version(), "starting roadkill server");

    // Connect the persistence backend; the connection itself is lazy, so a
    // down database surfaces on the first operation rather than here.
    let repository = MongoInstallerRepository::connect(
        &configuration.connection_string(),
        configuration.connect_timeout(),
        configuration.server_selection_timeout(),
    )
    .await?;
    info!(database = repository.target(), "using MongoDB storage");

    let store: Arc<dyn PersistenceService> = Arc::new(repository);
    let app_state = Arc::new(AppState::new(configuration.clone(), store));
    let installer = Arc::new(InstallService::new());

    if !app_state.is_installed() {
        info!("roadkill is not installed; the install surface is open at /install");
    }

    let address = configuration.server_address();
    let port = configuration.server_port();
    let server = startup::http::web_server(app_state, installer, address.clone(), port)?;
    info!(%address, port, "http server listening");

    server.await?;

    Ok(())
}
