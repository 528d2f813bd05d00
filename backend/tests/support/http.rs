//! Shared in-process HTTP helpers for the API integration suites.

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use books::domain::{ExecutionMode, TRACE_ID_HEADER};
use books::inbound::http::health::HealthState;
use books::server::{AppDependencies, build_app, build_http_state};
use serde_json::Value;

/// bcrypt cost used for seeded users in tests.
pub(crate) const TEST_HASH_COST: u32 = 4;

/// Application over freshly seeded stores, with readiness already marked.
pub(crate) fn seeded_app(
    mode: ExecutionMode,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();
    let http_state = build_http_state(TEST_HASH_COST).expect("seed stores");
    build_app(AppDependencies {
        health_state,
        http_state: web::Data::new(http_state),
        mode,
    })
}

/// Response fields the suites assert on.
pub(crate) struct CapturedResponse {
    pub(crate) status: StatusCode,
    pub(crate) trace_id: Option<String>,
    pub(crate) content_type: Option<String>,
    pub(crate) body: Vec<u8>,
}

impl CapturedResponse {
    /// Body parsed as JSON.
    pub(crate) fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("json body")
    }

    /// Body as UTF-8 text.
    pub(crate) fn text(&self) -> &str {
        std::str::from_utf8(&self.body).expect("utf8 body")
    }

    /// Assert the error envelope carries `status` and `message`.
    pub(crate) fn assert_error(&self, status: StatusCode, message: &str) {
        assert_eq!(self.status, status);
        let body = self.json();
        assert_eq!(body["type"], "error");
        assert_eq!(body["status"], status.as_u16());
        assert_eq!(body["message"], message);
    }
}

/// Send `req` through `app` and capture the response.
pub(crate) async fn send<S, R, B>(app: &S, req: R) -> CapturedResponse
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let response = test::call_service(app, req).await;
    let header_text = |name: &str| {
        response
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    };
    let status = response.status();
    let trace_id = header_text(TRACE_ID_HEADER);
    let content_type = header_text(header::CONTENT_TYPE.as_str());
    let body = test::read_body(response).await.to_vec();
    CapturedResponse {
        status,
        trace_id,
        content_type,
        body,
    }
}
