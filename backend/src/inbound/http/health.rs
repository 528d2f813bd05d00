//! Readiness and liveness probes.
//!
//! The process moves through three phases. While the seed stores are built
//! and the socket bound it is starting: alive, not ready. Once listening it
//! serves and both probes pass. On a shutdown signal it drains in-flight
//! requests and both probes fail, so no new traffic is routed to it.

use std::sync::atomic::{AtomicU8, Ordering};

use actix_web::{HttpResponse, get, http::header, web};

/// Lifecycle phase reported by the probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Phase {
    /// Seeding stores and binding.
    Starting = 0,
    /// Accepting requests.
    Serving = 1,
    /// Finishing in-flight requests before exit.
    Draining = 2,
}

impl Phase {
    fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::Serving,
            2 => Self::Draining,
            _ => Self::Starting,
        }
    }
}

/// Process phase shared by every worker.
#[derive(Debug)]
pub struct HealthState {
    phase: AtomicU8,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            phase: AtomicU8::new(Phase::Starting as u8),
        }
    }
}

impl HealthState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter [`Phase::Serving`] once the listener is bound. No effect after a
    /// drain has begun.
    pub fn mark_ready(&self) {
        let _ = self.phase.compare_exchange(
            Phase::Starting as u8,
            Phase::Serving as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        );
    }

    /// Enter [`Phase::Draining`]; both probes fail from here on.
    pub fn begin_drain(&self) {
        self.phase.store(Phase::Draining as u8, Ordering::Release);
    }

    pub fn phase(&self) -> Phase {
        Phase::from_u8(self.phase.load(Ordering::Acquire))
    }

    fn probe_response(passing: bool) -> HttpResponse {
        let mut response = if passing {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };
        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish()
    }
}

/// Readiness probe: 200 only while serving.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Seed data loaded and accepting requests"),
        (status = 503, description = "Still starting, or draining for shutdown")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.phase() == Phase::Serving)
}

/// Liveness probe: 200 until a drain begins.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Process is starting or serving"),
        (status = 503, description = "Draining for shutdown")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.phase() != Phase::Draining)
}
