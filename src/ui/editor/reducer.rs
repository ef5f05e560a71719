use crate::ui::editor::intent::EditorIntent;
use crate::ui::editor::state::{EditorDialogState, EditorField, EditorFields, EditorMode};
use crate::ui::mvi::Reducer;

pub struct EditorReducer;

impl Reducer for EditorReducer {
    type State = EditorDialogState;
    type Intent = EditorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditorIntent::OpenAdd => EditorDialogState::Visible {
                mode: EditorMode::Add,
                fields: EditorFields::default(),
                focused: EditorField::default(),
                error: None,
            },
            EditorIntent::OpenEdit { index, item } => EditorDialogState::Visible {
                mode: EditorMode::Edit { index },
                fields: EditorFields::from_item(&item),
                focused: EditorField::default(),
                error: None,
            },
            EditorIntent::FocusNext => map_visible(state, |mode, fields, focused, _| {
                (mode, fields, focused.next(), None)
            }),
            EditorIntent::FocusPrev => map_visible(state, |mode, fields, focused, _| {
                (mode, fields, focused.prev(), None)
            }),
            EditorIntent::Input(ch) => map_visible(state, |mode, mut fields, focused, _| {
                fields.push(focused, ch);
                (mode, fields, focused, None)
            }),
            EditorIntent::Backspace => map_visible(state, |mode, mut fields, focused, _| {
                fields.pop(focused);
                (mode, fields, focused, None)
            }),
            EditorIntent::SetError(message) => {
                map_visible(state, |mode, fields, focused, _| {
                    (mode, fields, focused, Some(message))
                })
            }
            EditorIntent::Close => EditorDialogState::Hidden,
        }
    }
}

fn map_visible(
    state: EditorDialogState,
    f: impl FnOnce(
        EditorMode,
        EditorFields,
        EditorField,
        Option<String>,
    ) -> (EditorMode, EditorFields, EditorField, Option<String>),
) -> EditorDialogState {
    match state {
        EditorDialogState::Visible {
            mode,
            fields,
            focused,
            error,
        } => {
            let (mode, fields, focused, error) = f(mode, fields, focused, error);
            EditorDialogState::Visible {
                mode,
                fields,
                focused,
                error,
            }
        }
        hidden => hidden,
    }
}
