// Install gate middleware
// Until installation has completed, every request outside the install
// surface is answered with 503; once installed, re-running the installer is
// answered with 409.

use std::future::ready;

use actix_service::forward_ready;
use actix_utils::future::{Ready, ok};
use actix_web::{
    Error,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::{Method, StatusCode},
    web::Data,
};
use futures::future::LocalBoxFuture;

use roadkill_common::INSTALL_PATH;

use crate::model::AppState;
use crate::model::response::ErrorResult;

/// Paths reachable before installation has completed.
fn open_path(path: &str) -> bool {
    path.starts_with(INSTALL_PATH) || path == "/health"
}

// Install gate middleware transformer
pub struct InstallGate;

impl<S, B> Transform<S, ServiceRequest> for InstallGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = InstallGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(InstallGateMiddleware { service })
    }
}

pub struct InstallGateMiddleware<S> {
    service: S,
}

fn reject<B>(req: ServiceRequest, status: StatusCode, message: &str) -> ServiceResponse<EitherBody<B>> {
    let path = req.path().to_string();
    let (req, _payload) = req.into_parts();
    let response = ErrorResult::http_response(status, message, &path).map_into_right_body();

    ServiceResponse::new(req, response)
}

impl<S, B> Service<ServiceRequest> for InstallGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let installed = req
            .app_data::<Data<AppState>>()
            .map(|state| state.is_installed());

        match installed {
            Some(false) if !open_path(req.path()) => {
                let message =
                    format!("Roadkill is not installed; complete installation at {INSTALL_PATH}");
                let res = reject(req, StatusCode::SERVICE_UNAVAILABLE, &message);
                Box::pin(ready(Ok(res)))
            }
            Some(true) if req.path().starts_with(INSTALL_PATH) && *req.method() == Method::POST => {
                let res = reject(req, StatusCode::CONFLICT, "install has already been run");
                Box::pin(ready(Ok(res)))
            }
            _ => {
                if installed.is_none() {
                    tracing::error!("AppState not found in request app_data");
                }

                let res = self.service.call(req);
                Box::pin(async move { res.await.map(ServiceResponse::map_into_left_body) })
            }
        }
    }
}
