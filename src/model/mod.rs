pub mod item;

pub use item::{compare_names, InventoryItem, ValidationError, TAG_ALL, TAG_OTHER};
