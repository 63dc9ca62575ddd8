//! Health check service.
//!
//! Reports liveness, uptime and how many receipts are held in memory.

use std::time::Instant;

use serde::Serialize;
use ts_rs::TS;

use super::ReceiptService;

/// Health check body served at `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HealthReport {
    /// Always "ok" while the process is serving requests.
    pub status: String,

    /// Receipts currently stored.
    #[ts(type = "number")]
    pub receipts: u64,

    /// Seconds since the service started.
    #[ts(type = "number")]
    pub uptime_secs: u64,
}

/// Health service.
#[derive(Clone)]
pub struct HealthService {
    receipts: ReceiptService,
    started_at: Instant,
}

impl HealthService {
    /// Create a new health service; uptime is measured from this call.
    pub fn new(receipts: ReceiptService) -> Self {
        HealthService {
            receipts,
            started_at: Instant::now(),
        }
    }

    /// Produce the current health report.
    pub async fn check(&self) -> HealthReport {
        HealthReport {
            status: "ok".to_string(),
            receipts: self.receipts.receipt_count().await as u64,
            uptime_secs: self.started_at.elapsed().as_secs(),
        }
    }
}
