use crate::model::InventoryItem;
use crate::ui::mvi::Intent;

pub enum DeleteIntent {
    /// A delete gesture landed on a row.
    Request { item: InventoryItem, index: usize },
    /// Move focus between the Yes/No buttons.
    ToggleChoice,
    /// Activate the focused button.
    Activate,
    /// Dismiss without deleting (Esc).
    Cancel,
}

impl Intent for DeleteIntent {}
