//! Request-scoped context: trace identifier and execution mode.
//!
//! The request scope middleware installs a [`RequestContext`] in task-local
//! storage for the lifetime of each request. Domain code reads it through
//! [`RequestContext::current`] without threading parameters through every
//! call.
//!
//! Tokio task-local variables are not inherited across spawned tasks. Use
//! [`RequestContext::scope`] when moving work onto another task.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use thiserror::Error;
use tokio::task_local;
use uuid::Uuid;

task_local! {
    static REQUEST_CONTEXT: RequestContext;
}

/// Correlation identifier following a request through logs and responses.
///
/// # Examples
/// ```
/// use books::domain::TraceId;
///
/// let id: TraceId = "00000000-0000-0000-0000-000000000000".parse().unwrap();
/// assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Whether the process runs in development or production mode.
///
/// Development mode exposes diagnostic backtraces in error envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Diagnostics are returned to clients.
    Development,
    /// Diagnostics stay in the logs.
    Production,
}

impl ExecutionMode {
    /// Return true for [`ExecutionMode::Development`].
    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    /// Mode used when nothing is configured: development for debug builds.
    pub fn build_default() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }
}

/// Error returned when an execution mode string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown execution mode: {0}")]
pub struct UnknownExecutionMode(pub String);

impl FromStr for ExecutionMode {
    type Err = UnknownExecutionMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(UnknownExecutionMode(s.to_owned())),
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Production => f.write_str("production"),
        }
    }
}

/// Per-request context available via task-local storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    trace_id: TraceId,
    mode: ExecutionMode,
}

impl RequestContext {
    /// Build a context for a new request.
    pub fn new(trace_id: TraceId, mode: ExecutionMode) -> Self {
        Self { trace_id, mode }
    }

    /// Trace identifier of the request.
    pub fn trace_id(&self) -> TraceId {
        self.trace_id
    }

    /// Execution mode the request runs under.
    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Return the context of the request in scope, if any.
    pub fn current() -> Option<Self> {
        REQUEST_CONTEXT.try_with(|ctx| *ctx).ok()
    }

    /// Execution mode in scope. Falls back to production outside a request so
    /// diagnostics are never exposed by accident.
    pub fn current_mode() -> ExecutionMode {
        Self::current()
            .map(|ctx| ctx.mode)
            .unwrap_or(ExecutionMode::Production)
    }

    /// Run `fut` with `context` in scope.
    ///
    /// # Examples
    /// ```
    /// use books::domain::{ExecutionMode, RequestContext, TraceId};
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let ctx = RequestContext::new(TraceId::generate(), ExecutionMode::Development);
    /// let seen = RequestContext::scope(ctx, async { RequestContext::current() }).await;
    /// assert_eq!(seen, Some(ctx));
    /// # });
    /// ```
    pub async fn scope<Fut>(context: RequestContext, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        REQUEST_CONTEXT.scope(context, fut).await
    }
}
