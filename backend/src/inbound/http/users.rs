//! Account endpoints.
//!
//! ```text
//! POST /api/login {"email":"harry@hogwarts.edu","password":"potter"}
//! POST /api/users/{email}/verify-security-question {"securityQuestions":[{"answer":"Hedwig"}, ...]}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{LOGIN_FIELDS, LoginCredentials};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::SecurityQuestionsRequestSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_exact, parse_security_answers};

/// Body returned after a successful login.
pub const AUTHENTICATED_MESSAGE: &str = "Authentication successful";
/// Body returned after all security answers matched.
pub const ANSWERED_MESSAGE: &str = "Security questions successfully answered";

/// Login request body for `POST /api/login`.
///
/// Example JSON:
/// `{"email":"harry@hogwarts.edu","password":"potter"}`
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    #[schema(example = "harry@hogwarts.edu")]
    pub email: String,
    #[schema(example = "potter")]
    pub password: String,
}

impl From<LoginRequest> for LoginCredentials {
    fn from(value: LoginRequest) -> Self {
        Self::new(value.email, value.password)
    }
}

/// Confirmation body for the account endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Authentication successful")]
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

/// Check an email/password pair.
///
/// No session is established; the response only reports the outcome.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = MessageResponse),
        (status = 400, description = "Payload is not exactly {email,password}", body = ErrorEnvelope),
        (status = 401, description = "Invalid credentials", body = ErrorEnvelope),
        (status = 404, description = "Unknown user", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<MessageResponse>> {
    let request: LoginRequest = parse_exact(payload.into_inner(), &LOGIN_FIELDS)?;
    let credentials = LoginCredentials::from(request);
    state.accounts.authenticate(&credentials).await?;
    Ok(web::Json(MessageResponse::new(AUTHENTICATED_MESSAGE)))
}

/// Check answers to a user's security questions, compared by position.
#[utoipa::path(
    post,
    path = "/api/users/{email}/verify-security-question",
    params(("email" = String, Path, description = "Email of the user being verified")),
    request_body = SecurityQuestionsRequestSchema,
    responses(
        (status = 200, description = "All answers matched", body = MessageResponse),
        (status = 400, description = "Payload failed the structural check", body = ErrorEnvelope),
        (status = 401, description = "An answer did not match", body = ErrorEnvelope),
        (status = 404, description = "Unknown user", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "verifySecurityQuestions"
)]
#[post("/users/{email}/verify-security-question")]
pub async fn verify_security_questions(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let email = path.into_inner();
    let answers = parse_security_answers(&payload)?;
    state
        .accounts
        .verify_security_answers(&email, &answers)
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(ANSWERED_MESSAGE)))
}
