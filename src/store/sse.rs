//! Parser for the remote store's event stream.
//!
//! The remote collection endpoint streams `text/event-stream` frames:
//!
//! ```text
//! event: put
//! data: {"path": "/", "data": {"<id>": {...}, ...}}
//! ```
//!
//! `put` replaces the subtree at `path`, `patch` merges children into it.
//! Frames arrive in arbitrary chunk boundaries, so the parser is fed raw
//! bytes and emits events whenever a blank line completes a frame.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::model::InventoryItem;

/// A parsed stream frame.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedEvent {
    /// Replace the subtree at `path` with `data`.
    Put { path: String, data: Value },
    /// Merge the children of `data` into the subtree at `path`.
    Patch { path: String, data: Value },
    /// Periodic no-op from the server.
    KeepAlive,
    /// Server closed the listener.
    Cancel,
}

/// Incremental frame parser.
///
/// Feed it arbitrary byte chunks; it buffers partial lines internally.
#[derive(Debug, Default)]
pub struct FeedParser {
    buffer: String,
    event_name: Option<String>,
    data: String,
}

impl FeedParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume a chunk and return every frame it completed.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<FeedEvent> {
        self.buffer.push_str(&String::from_utf8_lossy(chunk));
        let mut events = Vec::new();
        while let Some(newline) = self.buffer.find('\n') {
            let line: String = self.buffer.drain(..=newline).collect();
            if let Some(event) = self.push_line(line.trim_end_matches(['\r', '\n'])) {
                events.push(event);
            }
        }
        events
    }

    fn push_line(&mut self, line: &str) -> Option<FeedEvent> {
        if line.is_empty() {
            return self.finish_frame();
        }
        if let Some(name) = line.strip_prefix("event:") {
            self.event_name = Some(name.trim().to_string());
        } else if let Some(data) = line.strip_prefix("data:") {
            self.data.push_str(data.trim_start());
        }
        // Comment lines and id: fields are ignored.
        None
    }

    fn finish_frame(&mut self) -> Option<FeedEvent> {
        let data = std::mem::take(&mut self.data);
        let name = self.event_name.take()?;
        match name.as_str() {
            "put" | "patch" => {
                let json: Value = serde_json::from_str(&data).ok()?;
                let path = json.get("path")?.as_str()?.to_string();
                let data = json.get("data").cloned().unwrap_or(Value::Null);
                Some(if name == "put" {
                    FeedEvent::Put { path, data }
                } else {
                    FeedEvent::Patch { path, data }
                })
            }
            "keep-alive" => Some(FeedEvent::KeepAlive),
            "cancel" | "auth_revoked" => Some(FeedEvent::Cancel),
            _ => None,
        }
    }
}

/// Local mirror of the remote collection, fed by [`FeedEvent`]s.
#[derive(Debug, Default)]
pub struct CollectionCache {
    items: BTreeMap<String, InventoryItem>,
}

impl CollectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event. Returns true when the collection changed.
    pub fn apply(&mut self, event: &FeedEvent) -> bool {
        match event {
            FeedEvent::Put { path, data } => self.apply_put(path, data),
            FeedEvent::Patch { path, data } => self.apply_patch(path, data),
            FeedEvent::KeepAlive | FeedEvent::Cancel => false,
        }
    }

    pub fn snapshot(&self) -> Vec<InventoryItem> {
        self.items.values().cloned().collect()
    }

    fn apply_put(&mut self, path: &str, data: &Value) -> bool {
        match split_path(path) {
            PathRef::Root => {
                self.items.clear();
                if let Value::Object(map) = data {
                    for (id, value) in map {
                        if let Some(item) = parse_item(id, value) {
                            self.items.insert(id.clone(), item);
                        }
                    }
                }
                true
            }
            PathRef::Item(id) => {
                if data.is_null() {
                    self.items.remove(id).is_some()
                } else if let Some(item) = parse_item(id, data) {
                    self.items.insert(id.to_string(), item);
                    true
                } else {
                    tracing::warn!(path, "ignoring malformed record in stream");
                    false
                }
            }
            PathRef::Deep(id) => {
                tracing::warn!(path, id, "ignoring sub-field write in stream");
                false
            }
        }
    }

    fn apply_patch(&mut self, path: &str, data: &Value) -> bool {
        let Value::Object(map) = data else {
            return false;
        };
        match split_path(path) {
            PathRef::Root => {
                let mut changed = false;
                for (id, value) in map {
                    if value.is_null() {
                        changed |= self.items.remove(id).is_some();
                    } else if let Some(item) = parse_item(id, value) {
                        self.items.insert(id.clone(), item);
                        changed = true;
                    }
                }
                changed
            }
            // A patch addressed at one record merges fields; our writers
            // always send whole records, so treat it as a replace.
            PathRef::Item(id) => self.apply_put(&format!("/{id}"), data),
            PathRef::Deep(id) => {
                tracing::warn!(path, id, "ignoring sub-field patch in stream");
                false
            }
        }
    }
}

enum PathRef<'a> {
    Root,
    Item(&'a str),
    Deep(&'a str),
}

fn split_path(path: &str) -> PathRef<'_> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return PathRef::Root;
    }
    match trimmed.split_once('/') {
        None => PathRef::Item(trimmed),
        Some((id, _)) => PathRef::Deep(id),
    }
}

fn parse_item(id: &str, value: &Value) -> Option<InventoryItem> {
    let mut item: InventoryItem = serde_json::from_value(value.clone()).ok()?;
    item.id = id.to_string();
    Some(item)
}
