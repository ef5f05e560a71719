use crate::config::LayoutMode;
use crate::model::InventoryItem;
use crate::ui::inventory::composer::ListQuery;
use crate::ui::mvi::UiState;

/// Whether keystrokes drive the list or the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Browse,
    Search,
}

/// One row handed to the renderer.
pub struct RowBinding<'a> {
    pub item: &'a InventoryItem,
    pub selected: bool,
}

/// The list adapter's state: the master collection, the derived display
/// list, and the query that connects them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InventoryListState {
    pub master: Vec<InventoryItem>,
    pub display: Vec<InventoryItem>,
    pub query: ListQuery,
    pub selected: usize,
    pub input_mode: InputMode,
    pub layout: LayoutMode,
}

impl UiState for InventoryListState {}

impl InventoryListState {
    pub fn with_layout(layout: LayoutMode) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    /// Number of rows currently visible.
    pub fn item_count(&self) -> usize {
        self.display.len()
    }

    /// Row projection for the renderer.
    pub fn bind(&self, row: usize) -> Option<RowBinding<'_>> {
        self.display.get(row).map(|item| RowBinding {
            item,
            selected: row == self.selected,
        })
    }

    pub fn selected_item(&self) -> Option<&InventoryItem> {
        self.display.get(self.selected)
    }
}
