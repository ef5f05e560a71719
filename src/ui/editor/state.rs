use crate::model::InventoryItem;
use crate::ui::mvi::UiState;

/// Whether the dialog creates a new item or rewrites an existing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Add,
    Edit { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorField {
    #[default]
    Name,
    Description,
    Quantity,
    Tag,
}

impl EditorField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Description,
            Self::Description => Self::Quantity,
            Self::Quantity => Self::Tag,
            Self::Tag => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Tag,
            Self::Description => Self::Name,
            Self::Quantity => Self::Description,
            Self::Tag => Self::Quantity,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Description => "Description",
            Self::Quantity => "Quantity",
            Self::Tag => "Tag",
        }
    }
}

/// Raw dialog input. Quantity stays a string until save-time validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorFields {
    pub name: String,
    pub description: String,
    pub quantity: String,
    pub tag: String,
}

impl EditorFields {
    /// Pre-fill from the item being edited.
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            quantity: item.quantity.to_string(),
            tag: item.tag.clone(),
        }
    }

    pub fn get(&self, field: EditorField) -> &str {
        match field {
            EditorField::Name => &self.name,
            EditorField::Description => &self.description,
            EditorField::Quantity => &self.quantity,
            EditorField::Tag => &self.tag,
        }
    }

    fn get_mut(&mut self, field: EditorField) -> &mut String {
        match field {
            EditorField::Name => &mut self.name,
            EditorField::Description => &mut self.description,
            EditorField::Quantity => &mut self.quantity,
            EditorField::Tag => &mut self.tag,
        }
    }

    pub fn push(&mut self, field: EditorField, ch: char) {
        self.get_mut(field).push(ch);
    }

    pub fn pop(&mut self, field: EditorField) {
        self.get_mut(field).pop();
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorDialogState {
    #[default]
    Hidden,
    Visible {
        mode: EditorMode,
        fields: EditorFields,
        focused: EditorField,
        /// Validation message from the last failed save attempt.
        error: Option<String>,
    },
}

impl UiState for EditorDialogState {}

impl EditorDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}
