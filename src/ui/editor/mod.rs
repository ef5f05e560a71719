//! Add/edit item dialog: an editable copy of one row, validated on save.

pub mod dialog;
pub mod intent;
pub mod reducer;
pub mod state;

pub use dialog::render_editor_dialog;
pub use intent::EditorIntent;
pub use reducer::EditorReducer;
pub use state::{EditorDialogState, EditorField, EditorFields, EditorMode};
