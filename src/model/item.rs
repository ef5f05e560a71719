//! The inventory item record.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default category for items created without one.
pub const TAG_OTHER: &str = "other";

/// Filter sentinel meaning "no tag filter".
pub const TAG_ALL: &str = "all";

/// Errors raised at the input boundary before an item is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Item name must not be empty")]
    EmptyName,

    #[error("Quantity '{input}' is not a whole number")]
    BadQuantity { input: String },
}

/// A single stock item.
///
/// The identity is empty until the store client assigns one on add; after
/// that it never changes. Quantity is non-negative by construction:
/// [`InventoryItem::decremented`] refuses to go below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub quantity: u32,
    #[serde(default = "default_tag")]
    pub tag: String,
}

fn default_tag() -> String {
    TAG_OTHER.to_string()
}

impl InventoryItem {
    /// Build a not-yet-persisted item. The store client fills in `id`.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        quantity: u32,
        tag: impl Into<String>,
    ) -> Self {
        let tag = tag.into();
        Self {
            id: String::new(),
            name: name.into(),
            description: description.into(),
            quantity,
            tag: if tag.trim().is_empty() {
                TAG_OTHER.to_string()
            } else {
                tag
            },
        }
    }

    /// Validate raw dialog input and build an item from it.
    ///
    /// `quantity` arrives as the literal text the user typed.
    pub fn from_input(
        name: &str,
        description: &str,
        quantity: &str,
        tag: &str,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let quantity: u32 = quantity
            .trim()
            .parse()
            .map_err(|_| ValidationError::BadQuantity {
                input: quantity.trim().to_string(),
            })?;
        Ok(Self::new(name, description.trim(), quantity, tag.trim()))
    }

    /// Copy with quantity one higher.
    pub fn incremented(&self) -> Self {
        let mut item = self.clone();
        item.quantity = item.quantity.saturating_add(1);
        item
    }

    /// Copy with quantity one lower, or `None` when already at zero.
    pub fn decremented(&self) -> Option<Self> {
        if self.quantity == 0 {
            return None;
        }
        let mut item = self.clone();
        item.quantity -= 1;
        Some(item)
    }

    /// True when the item's tag matches `tag`, ignoring case.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }
}

// Natural order: case-insensitive lexicographic by name. Identity and the
// remaining fields only break exact ties so Ord stays consistent with Eq.
impl Ord for InventoryItem {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_names(&self.name, &other.name).then_with(|| {
            (&self.name, &self.id, &self.description, self.quantity, &self.tag).cmp(&(
                &other.name,
                &other.id,
                &other.description,
                other.quantity,
                &other.tag,
            ))
        })
    }
}

impl PartialOrd for InventoryItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Case-insensitive name comparison used for both ordering and sorting.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let a = a.chars().flat_map(char::to_lowercase);
    let b = b.chars().flat_map(char::to_lowercase);
    a.cmp(b)
}
