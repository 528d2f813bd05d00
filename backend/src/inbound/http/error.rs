//! HTTP adapter mapping for domain errors.
//!
//! Every failure leaves the service through [`ResponseError`] for the domain
//! [`Error`], rendered as the JSON envelope
//! `{"type":"error","status":...,"message":...,"stack":...}`. The status is
//! mirrored in the body; `stack` appears only in development mode.

use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::domain::{Error, ErrorCode, ExecutionMode, RequestContext};

use super::validation::bad_request;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message for unmatched routes.
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Not Found";
const REDACTED_MESSAGE: &str = "Internal server error";
const ENVELOPE_TYPE: &str = "error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Gone => StatusCode::GONE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorEnvelope {
    /// Always `"error"`.
    #[serde(rename = "type")]
    #[schema(example = "error")]
    pub kind: String,
    /// HTTP status code, mirrored from the response line.
    #[schema(example = 400)]
    pub status: u16,
    /// Human-readable message.
    #[schema(example = "Bad Request")]
    pub message: String,
    /// Backtrace captured in development mode only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl ErrorEnvelope {
    /// Format `error` for a response under `mode`.
    ///
    /// In production internal messages are redacted and no stack is emitted.
    pub fn render(error: &Error, mode: ExecutionMode) -> Self {
        let status = status_for(error.code()).as_u16();
        let development = mode.is_development();
        let message = if !development && matches!(error.code(), ErrorCode::InternalError) {
            REDACTED_MESSAGE.to_owned()
        } else {
            error.message().to_owned()
        };
        Self {
            kind: ENVELOPE_TYPE.to_owned(),
            status,
            message,
            stack: development.then(|| error.stack().map(str::to_owned)).flatten(),
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "request rejected");
        }
        let envelope = ErrorEnvelope::render(self, RequestContext::current_mode());
        HttpResponse::build(status).json(envelope)
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Framework faults carry no domain status; report them as 500.
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(err.to_string())
    }
}

/// JSON extractor settings routing body failures through the envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        debug!(error = %err, "request body is not acceptable JSON");
        bad_request().into()
    })
}

/// Catch-all for unmatched routes.
pub async fn not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    debug!(method = %req.method(), path = req.path(), "no route matched");
    Err(Error::not_found(ROUTE_NOT_FOUND_MESSAGE))
}
