//! HTTP server setup module.

use std::sync::Arc;

use actix_web::{App, HttpServer, dev::Server, middleware::Logger, web};

use crate::{
    api,
    middleware::{InstallGate, RequestContext},
    model::AppState,
    service::InstallService,
};

/// Creates and binds the HTTP server.
///
/// The server exposes the install surface, the settings read path, and the
/// health probe. The install gate keeps everything else closed until
/// provisioning has completed.
pub fn web_server(
    app_state: Arc<AppState>,
    installer: Arc<InstallService>,
    address: String,
    port: u16,
) -> Result<Server, std::io::Error> {
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(InstallGate)
            .wrap(RequestContext)
            .app_data(web::Data::from(app_state.clone()))
            .app_data(web::Data::from(installer.clone()))
            .service(api::route::install_routes())
            .service(api::route::site_routes())
    })
    .bind((address, port))?
    .run())
}
