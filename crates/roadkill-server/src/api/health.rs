use actix_web::{Responder, get, web};

use crate::model::{AppState, response};

#[get("/health")]
async fn health(data: web::Data<AppState>) -> impl Responder {
    match data.store().health_check().await {
        Ok(()) => response::Result::<String>::http_success("UP"),
        Err(e) => {
            tracing::error!("storage health check failed: {}", e);
            response::Result::<String>::http_response(
                503,
                503,
                "storage backend is unreachable".to_string(),
                String::new(),
            )
        }
    }
}
