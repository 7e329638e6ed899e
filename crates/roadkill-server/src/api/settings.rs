use actix_web::{Responder, get, web};

use roadkill_common::RoadkillError;
use roadkill_persistence::model::StoredSettings;

use crate::model::{AppState, response};
use crate::service;

#[get("/settings")]
async fn current(data: web::Data<AppState>) -> impl Responder {
    match service::settings::current(data.store()).await {
        Ok(stored) => response::Result::<StoredSettings>::http_success(stored),
        Err(err) => {
            let status = match err.downcast_ref::<RoadkillError>() {
                Some(RoadkillError::Settings(_)) => 404,
                _ => {
                    tracing::error!("failed to load site settings: {}", err);
                    500
                }
            };

            response::Result::<String>::http_response(
                status,
                i32::from(status),
                err.to_string(),
                String::new(),
            )
        }
    }
}
