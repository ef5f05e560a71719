use crate::model::InventoryItem;
use crate::ui::mvi::Intent;

pub enum InventoryIntent {
    /// A full snapshot arrived from the store subscription.
    Refresh { items: Vec<InventoryItem> },
    SelectUp,
    SelectDown,
    /// Bump one display row's quantity.
    Increment { index: usize },
    /// Drop one display row's quantity. Refused at zero; the state is
    /// left untouched.
    Decrement { index: usize },
    /// Replace one display row in place (edit save).
    ReplaceAt { index: usize, item: InventoryItem },
    /// Drop one display row and its master entry.
    RemoveAt { index: usize },
    /// Advance the tag filter: all -> each known tag -> all.
    CycleTagFilter,
    StartSearch,
    SearchChar(char),
    SearchBackspace,
    /// Leave search entry, keeping the query applied.
    EndSearch,
    /// Drop the search query entirely.
    ClearSearch,
    /// Advance the sort: none -> ascending -> descending -> none.
    CycleSort,
    ToggleLayout,
}

impl Intent for InventoryIntent {}
