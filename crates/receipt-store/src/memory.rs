//! In-memory implementation of [`ReceiptStore`].
//!
//! Everything is lost when the process exits; there is no eviction and no
//! size bound.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use receipt_core::{Receipt, ReceiptId};
use tokio::sync::RwLock;
use tracing::debug;

use crate::ReceiptStore;

/// Receipt store backed by a `HashMap` behind a tokio `RwLock`.
///
/// Receipts are held as `Arc<Receipt>` so a read hands out a shared handle
/// instead of cloning the whole receipt while the lock is held.
#[derive(Debug, Default)]
pub struct InMemoryReceiptStore {
    receipts: RwLock<HashMap<ReceiptId, Arc<Receipt>>>,
}

impl InMemoryReceiptStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        InMemoryReceiptStore {
            receipts: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl ReceiptStore for InMemoryReceiptStore {
    async fn save(&self, id: ReceiptId, receipt: Receipt) {
        let mut receipts = self.receipts.write().await;
        if receipts.insert(id.clone(), Arc::new(receipt)).is_some() {
            debug!(receipt_id = %id, "Replaced stored receipt");
        }
    }

    async fn get(&self, id: &str) -> Option<Arc<Receipt>> {
        self.receipts.read().await.get(id).cloned()
    }

    async fn len(&self) -> usize {
        self.receipts.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_core::Item;

    fn receipt(retailer: &str) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![Item {
                short_description: "Mountain Dew 12PK".to_string(),
                price: "6.49".to_string(),
            }],
            total: "6.49".to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_then_get() {
        let store = InMemoryReceiptStore::new();
        let id = ReceiptId::from("receipt-1");

        store.save(id.clone(), receipt("Target")).await;

        let stored = store.get(id.as_str()).await.unwrap();
        assert_eq!(stored.retailer, "Target");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_unknown_id() {
        let store = InMemoryReceiptStore::new();
        assert!(store.get("missing").await.is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_save_overwrites_same_id() {
        let store = InMemoryReceiptStore::new();
        let id = ReceiptId::from("receipt-1");

        store.save(id.clone(), receipt("Target")).await;
        store.save(id.clone(), receipt("Walgreens")).await;

        assert_eq!(store.get("receipt-1").await.unwrap().retailer, "Walgreens");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_earlier_reads_keep_their_snapshot() {
        let store = InMemoryReceiptStore::new();
        let id = ReceiptId::from("receipt-1");

        store.save(id.clone(), receipt("Target")).await;
        let before = store.get("receipt-1").await.unwrap();
        store.save(id, receipt("Walgreens")).await;

        assert_eq!(before.retailer, "Target");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_writers_and_readers() {
        let store = Arc::new(InMemoryReceiptStore::new());

        let mut handles = Vec::new();
        for n in 0..64 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let id = ReceiptId::from(format!("receipt-{n}"));
                store.save(id.clone(), receipt(&format!("Shop {n}"))).await;
                // read-after-write on the same key
                let stored = store.get(id.as_str()).await.unwrap();
                assert_eq!(stored.retailer, format!("Shop {n}"));
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.len().await, 64);
    }

    #[tokio::test]
    async fn test_usable_as_trait_object() {
        let store: Arc<dyn ReceiptStore> = Arc::new(InMemoryReceiptStore::new());
        store.save(ReceiptId::from("a"), receipt("Target")).await;
        assert!(store.get("a").await.is_some());
    }
}
