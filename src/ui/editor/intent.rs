use crate::model::InventoryItem;
use crate::ui::mvi::Intent;

pub enum EditorIntent {
    /// Open with blank fields to create a new item.
    OpenAdd,
    /// Open pre-filled with an editable copy of one row.
    OpenEdit { index: usize, item: InventoryItem },
    FocusNext,
    FocusPrev,
    Input(char),
    Backspace,
    /// Record a validation failure; the dialog stays up.
    SetError(String),
    Close,
}

impl Intent for EditorIntent {}
