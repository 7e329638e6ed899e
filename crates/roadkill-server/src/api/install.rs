use actix_web::{HttpMessage, HttpRequest, Responder, get, post, web};
use serde::{Deserialize, Serialize};

use roadkill_common::RoadkillError;
use roadkill_persistence::model::SiteSettings;

use crate::middleware::UserContext;
use crate::model::{AppState, response};
use crate::service::{InstallOutcome, InstallService};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InstallParam {
    admin_email: String,
    admin_username: String,
    admin_password: String,
    #[serde(default)]
    site_settings: Option<SiteSettings>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InstallStatus {
    installed: bool,
    version: String,
}

#[get("/status")]
async fn status(data: web::Data<AppState>) -> impl Responder {
    response::Result::<InstallStatus>::http_success(InstallStatus {
        installed: data.is_installed(),
        version: data.configuration().version(),
    })
}

#[post("")]
async fn run(
    req: HttpRequest,
    data: web::Data<AppState>,
    installer: web::Data<InstallService>,
    params: web::Json<InstallParam>,
) -> impl Responder {
    let context = req.extensions().get::<UserContext>().cloned().unwrap_or_default();
    tracing::info!(
        request_id = %context.request_id,
        operator = context.username.as_deref().unwrap_or("<anonymous>"),
        "install requested"
    );

    let settings = params.site_settings.clone().unwrap_or_default();

    let result = installer
        .run(
            &data,
            &params.admin_email,
            &params.admin_username,
            &params.admin_password,
            settings,
        )
        .await;

    match result {
        Ok(outcome) => response::Result::<InstallOutcome>::http_success(outcome),
        Err(err) => {
            let status = match err.downcast_ref::<RoadkillError>() {
                Some(RoadkillError::AlreadyInstalled) | Some(RoadkillError::Install(_)) => 409,
                Some(RoadkillError::IllegalArgument(_)) => 400,
                _ => {
                    tracing::error!("install failed: {}", err);
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
