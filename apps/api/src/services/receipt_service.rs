//! Receipt processing service.
//!
//! Validates incoming receipts, assigns identifiers, stores them and scores
//! them on lookup. Points are recomputed on every read; nothing is cached.

use std::sync::Arc;

use receipt_core::validation::validate_receipt;
use receipt_core::{points, CoreError, CoreResult, Receipt, ReceiptId};
use receipt_store::ReceiptStore;
use tracing::{debug, info, warn};

/// Receipt service.
#[derive(Clone)]
pub struct ReceiptService {
    store: Arc<dyn ReceiptStore>,
}

impl ReceiptService {
    /// Create a new receipt service over `store`.
    pub fn new(store: Arc<dyn ReceiptStore>) -> Self {
        ReceiptService { store }
    }

    /// Validate and store a receipt, returning its new identifier.
    ///
    /// Invalid receipts are rejected with the first failing rule and are
    /// never stored.
    pub async fn process_receipt(&self, receipt: Receipt) -> CoreResult<ReceiptId> {
        if let Err(err) = validate_receipt(&receipt) {
            warn!(
                error = %err,
                retailer = %receipt.retailer,
                items = receipt.items.len(),
                "Receipt rejected"
            );
            return Err(err.into());
        }

        let id = ReceiptId::generate();
        let retailer = receipt.retailer.clone();
        let items = receipt.items.len();
        self.store.save(id.clone(), receipt).await;

        info!(receipt_id = %id, %retailer, items, "Receipt processed");

        Ok(id)
    }

    /// Points awarded to a stored receipt.
    pub async fn get_receipt_points(&self, id: &str) -> CoreResult<u64> {
        let Some(receipt) = self.store.get(id).await else {
            warn!(receipt_id = %id, "Receipt not found");
            return Err(CoreError::ReceiptNotFound(id.to_string()));
        };

        let breakdown = points::compute_breakdown(&receipt);
        debug!(receipt_id = %id, ?breakdown, "Points breakdown");

        let total = breakdown.total();
        info!(receipt_id = %id, points = total, "Points calculated");

        Ok(total)
    }

    /// Number of receipts stored so far.
    pub async fn receipt_count(&self) -> usize {
        self.store.len().await
    }
}
