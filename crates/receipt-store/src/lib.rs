//! # receipt-store: Receipt Storage
//!
//! Storage abstraction for processed receipts.
//!
//! ## Store Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Receipt Store                                        │
//! │                                                                         │
//! │  ReceiptService                                                         │
//! │       │                                                                 │
//! │       │  store.save(id, receipt)        store.get("7fb1…")             │
//! │       ▼                                                                 │
//! │  dyn ReceiptStore                                                       │
//! │  ├── save(&self, id, receipt)   exclusive (write lock)                 │
//! │  ├── get(&self, id)             shared    (read lock)                  │
//! │  └── len(&self)                 shared    (read lock)                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InMemoryReceiptStore                                                   │
//! │  RwLock<HashMap<ReceiptId, Arc<Receipt>>>                               │
//! │                                                                         │
//! │  • Many concurrent readers never block each other                      │
//! │  • A writer excludes readers and other writers                         │
//! │  • Entries live until the process exits                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use receipt_core::{Receipt, ReceiptId};
//! use receipt_store::{InMemoryReceiptStore, ReceiptStore};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store: Arc<dyn ReceiptStore> = Arc::new(InMemoryReceiptStore::new());
//!
//! let id = ReceiptId::generate();
//! store.save(id.clone(), Receipt::default()).await;
//!
//! assert!(store.get(id.as_str()).await.is_some());
//! assert!(store.get("unknown").await.is_none());
//! # }
//! ```

pub mod memory;

pub use memory::InMemoryReceiptStore;

use std::sync::Arc;

use async_trait::async_trait;
use receipt_core::{Receipt, ReceiptId};

/// Identifier-keyed receipt storage.
///
/// Implementations must be safe to share across tasks and must give
/// read-after-write consistency: once `save` returns, `get` for the same id
/// observes the receipt.
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Stores a receipt under `id`, replacing anything already there.
    async fn save(&self, id: ReceiptId, receipt: Receipt);

    /// Looks up a receipt. `None` when the id was never saved.
    async fn get(&self, id: &str) -> Option<Arc<Receipt>>;

    /// Number of stored receipts.
    async fn len(&self) -> usize;

    /// True when nothing has been stored yet.
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
