//! # Service APIs
//!
//! Routers for the two mock backends. They share nothing and are normally
//! bound to separate ports.

pub mod directory;
pub mod error;
pub mod hr;

use serde::Serialize;

pub use directory::directory_router;
pub use error::{ApiError, ErrorResponse};
pub use hr::{hr_router, HrState};

/// Liveness body served at `/health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl HealthResponse {
    pub fn ok(service: &'static str) -> Self {
        Self {
            status: "ok",
            service,
        }
    }
}
