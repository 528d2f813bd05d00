//! Request middleware.
//!
//! Purpose: lifecycle concerns shared by every route, currently the request
//! scope carrying the trace id and execution mode.

pub mod request_scope;

pub use request_scope::RequestScope;
