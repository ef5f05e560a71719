//! Shared helpers for integration tests.

use stockpile::model::InventoryItem;

/// Items with ids "id-0", "id-1", ... and the given (name, quantity) pairs.
pub fn items(entries: &[(&str, u32)]) -> Vec<InventoryItem> {
    entries
        .iter()
        .enumerate()
        .map(|(i, (name, quantity))| {
            let mut item = InventoryItem::new(*name, "", *quantity, "");
            item.id = format!("id-{i}");
            item
        })
        .collect()
}
