//! Item store clients.
//!
//! A store client exposes CRUD plus a live subscription that pushes
//! full-collection snapshots on every change. Writes are fire-and-forget:
//! failures are logged and swallowed, never retried, and nothing rolls back
//! local state. Consumers learn about the result the same way they learn
//! about everyone else's writes, through the next snapshot.

pub mod memory;
pub mod remote;
pub mod sqlite;
pub mod sse;

use thiserror::Error;
use tokio::sync::mpsc;

use crate::model::InventoryItem;

pub use memory::MemoryStore;
pub use remote::RemoteStore;
pub use sqlite::SqliteStore;

/// Errors from store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to open database '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Failed to create database directory '{path}': {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Database operation failed: {0}")]
    Sql(#[from] rusqlite::Error),
}

/// One message on a subscription.
#[derive(Debug, Clone)]
pub enum StoreEvent {
    /// The full current collection, in store order.
    Snapshot(Vec<InventoryItem>),
    /// The listener stopped; no more snapshots will arrive from it.
    Cancelled { reason: String },
}

/// Receiving half of a live subscription.
///
/// Each call to [`ItemStore::subscribe`] returns a fresh, independent
/// sequence primed with the current snapshot, so a consumer can always
/// restart by subscribing again.
pub struct StoreSubscription {
    rx: mpsc::UnboundedReceiver<StoreEvent>,
}

impl StoreSubscription {
    pub async fn recv(&mut self) -> Option<StoreEvent> {
        self.rx.recv().await
    }

    /// Block the current (non-runtime) thread until the next event.
    pub fn blocking_recv(&mut self) -> Option<StoreEvent> {
        self.rx.blocking_recv()
    }

    pub fn try_recv(&mut self) -> Option<StoreEvent> {
        self.rx.try_recv().ok()
    }
}

/// CRUD plus live snapshots against the backing collection.
pub trait ItemStore: Send + Sync {
    /// Assign a fresh identity, dispatch the write, and return the id
    /// without waiting for the write to land.
    fn add(&self, item: InventoryItem) -> String;

    /// Replace the record stored under `id`.
    fn update(&self, id: &str, item: InventoryItem);

    /// Remove the record stored under `id`.
    fn delete(&self, id: &str);

    /// Start a new snapshot sequence.
    fn subscribe(&self) -> StoreSubscription;
}

/// Fan-out of [`StoreEvent`]s to every live subscriber.
///
/// Shared by all store implementations: they push into it after each applied
/// change, and it drops subscribers whose receiving half is gone.
#[derive(Default)]
pub(crate) struct SnapshotFanout {
    senders: parking_lot::Mutex<Vec<mpsc::UnboundedSender<StoreEvent>>>,
}

impl SnapshotFanout {
    pub(crate) fn subscribe(&self, current: Vec<InventoryItem>) -> StoreSubscription {
        let (tx, rx) = mpsc::unbounded_channel();
        let _ = tx.send(StoreEvent::Snapshot(current));
        self.senders.lock().push(tx);
        StoreSubscription { rx }
    }

    pub(crate) fn broadcast(&self, items: Vec<InventoryItem>) {
        self.send_all(StoreEvent::Snapshot(items));
    }

    pub(crate) fn cancel(&self, reason: &str) {
        self.send_all(StoreEvent::Cancelled {
            reason: reason.to_string(),
        });
    }

    fn send_all(&self, event: StoreEvent) {
        let mut senders = self.senders.lock();
        senders.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

/// Generate a store identity for a new record.
pub(crate) fn new_item_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
