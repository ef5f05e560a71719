//! Pure projections from the master list to the display list.
//!
//! None of these touch shared state; the adapter re-derives its display
//! list wholesale whenever the query changes.

use crate::model::{compare_names, InventoryItem, TAG_ALL};

/// Sort direction for the name ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// The active filter/search/sort combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Tag to keep, or [`TAG_ALL`] for everything.
    pub tag: String,
    /// Case-insensitive name substring; empty means no search.
    pub search: String,
    /// `None` leaves the master list order untouched.
    pub sort: Option<SortOrder>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            tag: TAG_ALL.to_string(),
            search: String::new(),
            sort: None,
        }
    }
}

impl ListQuery {
    pub fn is_identity(&self) -> bool {
        self.tag == TAG_ALL && self.search.is_empty() && self.sort.is_none()
    }
}

/// Keep items carrying `tag` (case-insensitive); the [`TAG_ALL`] sentinel
/// keeps everything, order untouched.
pub fn by_tag(items: &[InventoryItem], tag: &str) -> Vec<InventoryItem> {
    if tag.eq_ignore_ascii_case(TAG_ALL) {
        return items.to_vec();
    }
    items.iter().filter(|item| item.has_tag(tag)).cloned().collect()
}

/// Keep items whose name contains `needle`, ignoring case.
pub fn by_name_contains(items: &[InventoryItem], needle: &str) -> Vec<InventoryItem> {
    let needle = needle.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Case-insensitive lexicographic sort by name.
pub fn sorted_by_name(items: &[InventoryItem], ascending: bool) -> Vec<InventoryItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_names(&a.name, &b.name);
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
    sorted
}

/// Apply the whole query: tag filter, then search, then sort.
pub fn compose(items: &[InventoryItem], query: &ListQuery) -> Vec<InventoryItem> {
    let mut result = by_tag(items, &query.tag);
    if !query.search.is_empty() {
        result = by_name_contains(&result, &query.search);
    }
    if let Some(order) = query.sort {
        result = sorted_by_name(&result, order == SortOrder::Ascending);
    }
    result
}
