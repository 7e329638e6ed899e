// Request context middleware
// Populates a per-request user context and logs failed requests with their
// route data.

use actix_service::forward_ready;
use actix_utils::future::{Ready, ok};
use actix_web::{
    Error, HttpMessage,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::Method,
};
use futures::future::LocalBoxFuture;

use roadkill_common::FORWARDED_USER_HEADER;

/// Per-request context available to every handler via request extensions.
///
/// The user name, when present, comes from the upstream authentication
/// layer's header; this middleware performs no authentication itself.
#[derive(Debug, Clone, Default)]
pub struct UserContext {
    pub request_id: String,
    pub username: Option<String>,
}

impl UserContext {
    fn from_request(req: &ServiceRequest) -> Self {
        let username = req
            .headers()
            .get(FORWARDED_USER_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);

        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            username,
        }
    }
}

// Request context middleware transformer
pub struct RequestContext;

impl<S, B> Transform<S, ServiceRequest> for RequestContext
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestContextMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(RequestContextMiddleware { service })
    }
}

pub struct RequestContextMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestContextMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let mut request_id = String::new();

        if Method::OPTIONS != *req.method() {
            let context = UserContext::from_request(&req);
            request_id = context.request_id.clone();
            req.extensions_mut().insert(context);
        }

        let method = req.method().to_string();
        let path = req.path().to_string();
        let res = self.service.call(req);

        Box::pin(async move {
            let res = res.await?;

            if res.status().is_server_error() {
                tracing::error!(
                    %method,
                    %path,
                    %request_id,
                    status = res.status().as_u16(),
                    "request failed"
                );
            }

            Ok(res)
        })
    }
}
