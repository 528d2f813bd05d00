//! In-N-Out-Books backend: book catalogue and account checks over HTTP.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request scope middleware, re-exported for application wiring.
pub use middleware::RequestScope;
