//! Body of `GET /health`.
//!
//! The service depends on a single backend, so the report carries one check.
//! Status strings are fixed literals; `message` is always present.

use serde::Serialize;

/// Overall report: `"healthy"` when every check passed, `"degraded"` otherwise.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

impl HealthResponse {
    pub fn new(database: CheckStatus) -> Self {
        let status = if database.is_ok() { "healthy" } else { "degraded" };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks: HealthChecks { database },
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.checks.database.is_ok()
    }
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
}

/// Outcome of one check: `"ok"` or `"error"` plus a short description.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: &'static str,
    pub message: &'static str,
}

impl CheckStatus {
    pub fn ok(message: &'static str) -> Self {
        Self {
            status: "ok",
            message,
        }
    }

    pub fn error(message: &'static str) -> Self {
        Self {
            status: "error",
            message,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
