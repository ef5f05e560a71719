//! Delete gesture confirmation: state machine, reducer, and dialog.

pub mod dialog;
pub mod intent;
pub mod reducer;
pub mod state;

pub use dialog::render_delete_dialog;
pub use intent::DeleteIntent;
pub use reducer::{resolve, DeleteOutcome, DeleteReducer};
pub use state::{DeleteChoice, DeleteDialogState};
