//! Domain primitives, services and ports.
//!
//! Purpose: define the book and user records, the transport-agnostic error
//! type and the ports adapters implement. Nothing in here knows about HTTP.
//!
//! Public surface:
//! - Error / ErrorCode: tagged failure translated by inbound adapters.
//! - Book, User: the records held by the stores.
//! - AccountService: login and security-question checks.
//! - RequestContext: trace id and execution mode of the request in scope.

pub mod account_service;
pub mod auth;
pub mod book;
pub mod error;
pub mod ports;
pub mod request_context;
pub mod user;

pub use self::account_service::AccountService;
pub use self::auth::{LOGIN_FIELDS, LoginCredentials, SecurityAnswers};
pub use self::book::{BOOK_FIELDS, Book, BookId, CreatedBook};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::request_context::{ExecutionMode, RequestContext, TraceId, UnknownExecutionMode};
pub use self::user::{SECURITY_QUESTION_COUNT, SecurityQuestion, User};

/// HTTP header carrying the trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
