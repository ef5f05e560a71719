//! In-process item store.
//!
//! Backs `--memory` runs and doubles as the test double for everything that
//! consumes an [`ItemStore`]. Writes apply synchronously and the snapshot
//! fan-out fires immediately, so the subscribe → mutate → snapshot loop
//! behaves exactly like the remote listener, minus the network. Insertion
//! order is the snapshot order.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::model::InventoryItem;
use crate::store::{new_item_id, ItemStore, SnapshotFanout, StoreSubscription};

#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    items: Mutex<Vec<InventoryItem>>,
    fanout: SnapshotFanout,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `count` sample rows, quantity i×10 apiece.
    pub fn with_sample_items(count: u32) -> Self {
        let store = Self::new();
        for i in 1..=count {
            store.add(InventoryItem::new(
                format!("Item {i}"),
                format!("Description of Item {i}"),
                i * 10,
                "",
            ));
        }
        store
    }

    pub fn snapshot(&self) -> Vec<InventoryItem> {
        self.inner.items.lock().clone()
    }

    fn broadcast(&self) {
        self.inner.fanout.broadcast(self.snapshot());
    }
}

impl ItemStore for MemoryStore {
    fn add(&self, mut item: InventoryItem) -> String {
        let id = new_item_id();
        item.id = id.clone();
        self.inner.items.lock().push(item);
        self.broadcast();
        id
    }

    fn update(&self, id: &str, mut item: InventoryItem) {
        item.id = id.to_string();
        let mut items = self.inner.items.lock();
        match items.iter_mut().find(|existing| existing.id == id) {
            Some(existing) => *existing = item,
            None => {
                tracing::warn!(id, "update created a record that did not exist");
                items.push(item);
            }
        }
        drop(items);
        self.broadcast();
    }

    fn delete(&self, id: &str) {
        let mut items = self.inner.items.lock();
        let before = items.len();
        items.retain(|item| item.id != id);
        let removed = items.len() != before;
        drop(items);
        if !removed {
            tracing::warn!(id, "delete for unknown id ignored");
            return;
        }
        self.broadcast();
    }

    fn subscribe(&self) -> StoreSubscription {
        self.inner.fanout.subscribe(self.snapshot())
    }
}
