//! Middleware installing the per-request [`RequestContext`].
//!
//! Each incoming request receives a fresh [`TraceId`] and the configured
//! [`ExecutionMode`] in task-local storage, so errors built while handling it
//! know whether to capture a backtrace. The trace id is echoed in a `trace-id`
//! response header and the completed request is logged.

use std::task::{Context, Poll};
use std::time::Instant;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{error, info};

use crate::domain::{ExecutionMode, RequestContext, TRACE_ID_HEADER, TraceId};

/// Request scope middleware.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use books::domain::ExecutionMode;
/// use books::middleware::RequestScope;
///
/// let app = App::new().wrap(RequestScope::new(ExecutionMode::Production));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequestScope {
    mode: ExecutionMode,
}

impl RequestScope {
    /// Scope every request under `mode`.
    pub fn new(mode: ExecutionMode) -> Self {
        Self { mode }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestScope
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestScopeMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestScopeMiddleware {
            service,
            mode: self.mode,
        }))
    }
}

/// Service wrapper produced by [`RequestScope`].
pub struct RequestScopeMiddleware<S> {
    service: S,
    mode: ExecutionMode,
}

impl<S, B> Service<ServiceRequest> for RequestScopeMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = TraceId::generate();
        let context = RequestContext::new(trace_id, self.mode);
        let method = req.method().clone();
        let path = req.path().to_owned();
        let started = Instant::now();
        let fut = self.service.call(req);
        Box::pin(RequestContext::scope(context, async move {
            let mut res = fut.await?;
            match HeaderValue::from_str(&trace_id.to_string()) {
                Ok(value) => {
                    res.response_mut()
                        .headers_mut()
                        .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
                }
                Err(error) => {
                    error!(%error, %trace_id, "failed to encode trace identifier header");
                }
            }
            info!(
                %trace_id,
                %method,
                path = %path,
                status = res.status().as_u16(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "request completed"
            );
            Ok(res)
        }))
    }
}
