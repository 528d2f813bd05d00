//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every `/api` endpoint and the health probes, the
//! book schema wrappers and the error envelope. The document is served by
//! Swagger UI in debug builds and printed by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::{
    BookSchema, CreatedBookSchema, SecurityAnswerSchema, SecurityQuestionsRequestSchema,
};
use crate::inbound::http::users::{LoginRequest, MessageResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "In-N-Out-Books API",
        description = "Book catalogue CRUD, login and security-question checks over an in-memory store."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::books::list_books,
        crate::inbound::http::books::get_book,
        crate::inbound::http::books::create_book,
        crate::inbound::http::books::update_book,
        crate::inbound::http::books::delete_book,
        crate::inbound::http::users::login,
        crate::inbound::http::users::verify_security_questions,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        BookSchema,
        CreatedBookSchema,
        ErrorEnvelope,
        LoginRequest,
        MessageResponse,
        SecurityAnswerSchema,
        SecurityQuestionsRequestSchema
    )),
    tags(
        (name = "books", description = "Book catalogue"),
        (name = "users", description = "Login and security questions"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
