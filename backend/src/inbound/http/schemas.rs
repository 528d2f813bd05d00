//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Book`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Book)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BookSchema {
    /// Caller-assigned identifier.
    #[schema(example = 1)]
    id: i64,
    #[schema(example = "The Fellowship of the Ring")]
    title: String,
    #[schema(example = "J.R.R. Tolkien")]
    author: String,
}

/// OpenAPI schema for [`crate::domain::CreatedBook`].
#[derive(ToSchema)]
#[schema(as = crate::domain::CreatedBook)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CreatedBookSchema {
    /// Identifier of the stored book.
    #[schema(example = 6)]
    id: i64,
}

/// One submitted answer; no other property is accepted.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SecurityAnswerSchema {
    #[schema(example = "Hedwig")]
    answer: String,
}

/// Body of the security-question check. Answers are matched by position.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SecurityQuestionsRequestSchema {
    #[schema(rename = "securityQuestions")]
    security_questions: Vec<SecurityAnswerSchema>,
}
