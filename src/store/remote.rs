//! HTTP client for the remote inventory collection.
//!
//! Speaks a Firebase-style REST dialect: records live at
//! `{base}/{collection}/{id}.json`, and a GET of the collection with
//! `Accept: text/event-stream` holds a listener open that streams every
//! change. The listener folds events into [`CollectionCache`] and broadcasts
//! a full snapshot after each applied change.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::runtime::Handle;

use crate::model::InventoryItem;
use crate::shutdown::ShutdownHandle;
use crate::store::sse::{CollectionCache, FeedEvent, FeedParser};
use crate::store::{new_item_id, ItemStore, SnapshotFanout, StoreSubscription};

#[derive(Clone)]
pub struct RemoteStore {
    inner: Arc<Inner>,
}

struct Inner {
    client: reqwest::Client,
    base_url: String,
    collection: String,
    runtime: Handle,
    fanout: SnapshotFanout,
    latest: Mutex<Vec<InventoryItem>>,
}

impl RemoteStore {
    pub fn new(base_url: &str, collection: &str, runtime: Handle) -> Self {
        Self {
            inner: Arc::new(Inner {
                client: reqwest::Client::new(),
                base_url: base_url.trim_end_matches('/').to_string(),
                collection: collection.trim_matches('/').to_string(),
                runtime,
                fanout: SnapshotFanout::default(),
                latest: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Open the live listener. Snapshots flow to subscribers until the
    /// stream ends, errors out, or shutdown is signalled; the stream is not
    /// reopened on failure.
    pub fn spawn_listener(&self, shutdown: ShutdownHandle) {
        let inner = Arc::clone(&self.inner);
        let url = self.collection_url();
        self.inner.runtime.spawn(async move {
            let reason = match listen(&inner, &url, &shutdown).await {
                Ok(()) => "listener closed by server".to_string(),
                Err(err) => {
                    tracing::warn!(error = %err, "inventory listener failed");
                    format!("listener failed: {err}")
                }
            };
            if shutdown.is_shutting_down() {
                return;
            }
            inner.fanout.cancel(&reason);
        });
    }

    fn collection_url(&self) -> String {
        format!("{}/{}.json", self.inner.base_url, self.inner.collection)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/{}/{}.json", self.inner.base_url, self.inner.collection, id)
    }
}

async fn listen(
    inner: &Arc<Inner>,
    url: &str,
    shutdown: &ShutdownHandle,
) -> Result<(), reqwest::Error> {
    let mut response = inner
        .client
        .get(url)
        .header("Accept", "text/event-stream")
        .send()
        .await?
        .error_for_status()?;
    tracing::info!(%url, "inventory listener connected");

    let mut parser = FeedParser::new();
    let mut cache = CollectionCache::new();
    loop {
        let chunk = tokio::select! {
            chunk = response.chunk() => chunk?,
            _ = shutdown.wait() => return Ok(()),
        };
        let Some(chunk) = chunk else {
            return Ok(());
        };
        for event in parser.push(&chunk) {
            if matches!(event, FeedEvent::Cancel) {
                return Ok(());
            }
            if cache.apply(&event) {
                let snapshot = cache.snapshot();
                *inner.latest.lock() = snapshot.clone();
                inner.fanout.broadcast(snapshot);
            }
        }
    }
}

impl ItemStore for RemoteStore {
    fn add(&self, mut item: InventoryItem) -> String {
        let id = new_item_id();
        item.id = id.clone();
        self.put(self.record_url(&id), item);
        id
    }

    fn update(&self, id: &str, mut item: InventoryItem) {
        item.id = id.to_string();
        self.put(self.record_url(id), item);
    }

    fn delete(&self, id: &str) {
        let client = self.inner.client.clone();
        let url = self.record_url(id);
        self.inner.runtime.spawn(async move {
            if let Err(err) = send_checked(client.delete(&url)).await {
                tracing::warn!(%url, error = %err, "delete failed");
            }
        });
    }

    fn subscribe(&self) -> StoreSubscription {
        self.inner.fanout.subscribe(self.inner.latest.lock().clone())
    }
}

impl RemoteStore {
    fn put(&self, url: String, item: InventoryItem) {
        let client = self.inner.client.clone();
        self.inner.runtime.spawn(async move {
            if let Err(err) = send_checked(client.put(&url).json(&item)).await {
                tracing::warn!(%url, error = %err, "write failed");
            }
        });
    }
}

async fn send_checked(request: reqwest::RequestBuilder) -> Result<(), reqwest::Error> {
    request.send().await?.error_for_status()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> RemoteStore {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        // Leak the runtime so the handle stays valid for the test process.
        let handle = runtime.handle().clone();
        std::mem::forget(runtime);
        RemoteStore::new("https://db.example.com/", "inventory", handle)
    }

    #[test]
    fn urls_are_normalized() {
        let store = test_store();
        assert_eq!(
            store.collection_url(),
            "https://db.example.com/inventory.json"
        );
        assert_eq!(
            store.record_url("a1"),
            "https://db.example.com/inventory/a1.json"
        );
    }

    #[test]
    fn subscribe_before_listener_yields_empty_snapshot() {
        let store = test_store();
        let mut sub = store.subscribe();
        match sub.try_recv() {
            Some(crate::store::StoreEvent::Snapshot(items)) => assert!(items.is_empty()),
            other => panic!("expected snapshot, got {other:?}"),
        }
    }
}
