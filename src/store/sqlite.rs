//! Embedded single-table store, the legacy offline path.
//!
//! Schema predates tags, so records round-trip without one: reads default
//! the tag and writes drop it. Seeded with sample rows the first time the
//! table comes up empty, which keeps a fresh database usable for demos.

use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use rusqlite::{params, Connection};

use crate::model::{InventoryItem, TAG_OTHER};
use crate::store::{ItemStore, SnapshotFanout, StoreError, StoreSubscription};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS inventory (
    _id INTEGER PRIMARY KEY AUTOINCREMENT,
    item_name TEXT NOT NULL,
    item_description TEXT,
    item_quantity INTEGER NOT NULL
)";

#[derive(Clone)]
pub struct SqliteStore {
    inner: Arc<Inner>,
}

struct Inner {
    conn: Mutex<Connection>,
    fanout: SnapshotFanout,
}

impl SqliteStore {
    /// Open (or create) the database at `path`, seeding sample rows when
    /// the table starts out empty.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir).map_err(|source| StoreError::CreateDir {
                    path: dir.display().to_string(),
                    source,
                })?;
            }
        }
        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_connection(conn)
    }

    /// Open a throwaway in-memory database.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute(CREATE_TABLE, [])?;
        let store = Self {
            inner: Arc::new(Inner {
                conn: Mutex::new(conn),
                fanout: SnapshotFanout::default(),
            }),
        };
        if store.is_empty()? {
            store.seed_sample_items()?;
        }
        Ok(store)
    }

    pub fn all_items(&self) -> Result<Vec<InventoryItem>, StoreError> {
        let conn = self.inner.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT _id, item_name, item_description, item_quantity FROM inventory ORDER BY _id",
        )?;
        let rows = stmt.query_map([], row_to_item)?;
        Ok(rows.collect::<Result<_, _>>()?)
    }

    /// Case-insensitive partial match on the item name.
    pub fn search(&self, needle: &str) -> Result<Vec<InventoryItem>, StoreError> {
        let conn = self.inner.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT _id, item_name, item_description, item_quantity FROM inventory \
             WHERE item_name LIKE ?1 ORDER BY _id",
        )?;
        let pattern = format!("%{needle}%");
        let rows = stmt.query_map(params![pattern], row_to_item)?;
        Ok(rows.collect::<Result<_, _>>()?)
    }

    pub fn add_item(
        &self,
        name: &str,
        description: &str,
        quantity: u32,
    ) -> Result<i64, StoreError> {
        let conn = self.inner.conn.lock();
        conn.execute(
            "INSERT INTO inventory (item_name, item_description, item_quantity) VALUES (?1, ?2, ?3)",
            params![name, description, quantity],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Set the quantity of every row with the given name.
    pub fn update_quantity(&self, name: &str, quantity: u32) -> Result<usize, StoreError> {
        let conn = self.inner.conn.lock();
        Ok(conn.execute(
            "UPDATE inventory SET item_quantity = ?1 WHERE item_name = ?2",
            params![quantity, name],
        )?)
    }

    fn is_empty(&self) -> Result<bool, StoreError> {
        let conn = self.inner.conn.lock();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM inventory", [], |row| row.get(0))?;
        Ok(count == 0)
    }

    fn seed_sample_items(&self) -> Result<(), StoreError> {
        let conn = self.inner.conn.lock();
        for i in 1..=20u32 {
            conn.execute(
                "INSERT INTO inventory (item_name, item_description, item_quantity) VALUES (?1, ?2, ?3)",
                params![
                    format!("Item {i}"),
                    format!("Description of Item {i}"),
                    i * 10
                ],
            )?;
        }
        Ok(())
    }

    fn broadcast(&self) {
        match self.all_items() {
            Ok(items) => self.inner.fanout.broadcast(items),
            Err(err) => tracing::warn!(error = %err, "snapshot read failed"),
        }
    }
}

fn row_to_item(row: &rusqlite::Row<'_>) -> rusqlite::Result<InventoryItem> {
    let id: i64 = row.get(0)?;
    let description: Option<String> = row.get(2)?;
    Ok(InventoryItem {
        id: id.to_string(),
        name: row.get(1)?,
        description: description.unwrap_or_default(),
        quantity: row.get::<_, i64>(3)?.max(0) as u32,
        tag: TAG_OTHER.to_string(),
    })
}

impl ItemStore for SqliteStore {
    fn add(&self, item: InventoryItem) -> String {
        let id = match self.add_item(&item.name, &item.description, item.quantity) {
            Ok(id) => id.to_string(),
            Err(err) => {
                tracing::warn!(error = %err, "insert failed");
                return String::new();
            }
        };
        self.broadcast();
        id
    }

    fn update(&self, id: &str, item: InventoryItem) {
        let result = {
            let conn = self.inner.conn.lock();
            conn.execute(
                "UPDATE inventory SET item_name = ?1, item_description = ?2, item_quantity = ?3 \
                 WHERE _id = ?4",
                params![item.name, item.description, item.quantity, id],
            )
        };
        if let Err(err) = result {
            tracing::warn!(id, error = %err, "update failed");
            return;
        }
        self.broadcast();
    }

    fn delete(&self, id: &str) {
        let result = {
            let conn = self.inner.conn.lock();
            conn.execute("DELETE FROM inventory WHERE _id = ?1", params![id])
        };
        if let Err(err) = result {
            tracing::warn!(id, error = %err, "delete failed");
            return;
        }
        self.broadcast();
    }

    fn subscribe(&self) -> StoreSubscription {
        let items = self.all_items().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "snapshot read failed");
            Vec::new()
        });
        self.inner.fanout.subscribe(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_database_is_seeded() {
        let store = SqliteStore::open_in_memory().unwrap();
        let items = store.all_items().unwrap();
        assert_eq!(items.len(), 20);
        assert_eq!(items[0].name, "Item 1");
        assert_eq!(items[0].quantity, 10);
        assert_eq!(items[0].tag, TAG_OTHER);
    }

    #[test]
    fn search_matches_partial_names() {
        let store = SqliteStore::open_in_memory().unwrap();
        let hits = store.search("Item 2").unwrap();
        // "Item 2" and "Item 20".
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn update_quantity_by_name() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.update_quantity("Item 3", 7).unwrap(), 1);
        let item = store
            .all_items()
            .unwrap()
            .into_iter()
            .find(|i| i.name == "Item 3")
            .unwrap();
        assert_eq!(item.quantity, 7);
    }
}
