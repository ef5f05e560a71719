use crate::model::InventoryItem;
use crate::ui::mvi::UiState;

/// Which dialog button holds focus. "No" is the default so a stray Enter
/// restores the row instead of deleting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteChoice {
    Yes,
    #[default]
    No,
}

/// Confirmation flow for a delete gesture.
///
/// `Idle -> Pending -> Idle`, with the terminal outcome (deleted or
/// restored) reported separately by the reducer caller. The dialog has no
/// timeout; it stays up until the user answers.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DeleteDialogState {
    #[default]
    Idle,
    Pending {
        item: InventoryItem,
        index: usize,
        choice: DeleteChoice,
    },
}

impl UiState for DeleteDialogState {}

impl DeleteDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
