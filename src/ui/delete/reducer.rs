use crate::model::InventoryItem;
use crate::ui::delete::intent::DeleteIntent;
use crate::ui::delete::state::{DeleteChoice, DeleteDialogState};
use crate::ui::mvi::Reducer;

/// Terminal result of a confirmation round.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The row and its record go away.
    Deleted { item: InventoryItem, index: usize },
    /// The row stays exactly where it was.
    Restored,
}

/// What answering the dialog in its current state would mean.
///
/// The application layer reads this before dispatching
/// [`DeleteIntent::Activate`] so the reducer itself stays pure.
pub fn resolve(state: &DeleteDialogState) -> Option<DeleteOutcome> {
    match state {
        DeleteDialogState::Idle => None,
        DeleteDialogState::Pending { item, index, choice } => Some(match choice {
            DeleteChoice::Yes => DeleteOutcome::Deleted {
                item: item.clone(),
                index: *index,
            },
            DeleteChoice::No => DeleteOutcome::Restored,
        }),
    }
}

pub struct DeleteReducer;

impl Reducer for DeleteReducer {
    type State = DeleteDialogState;
    type Intent = DeleteIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DeleteIntent::Request { item, index } => DeleteDialogState::Pending {
                item,
                index,
                choice: DeleteChoice::default(),
            },
            DeleteIntent::ToggleChoice => match state {
                DeleteDialogState::Pending { item, index, choice } => {
                    DeleteDialogState::Pending {
                        item,
                        index,
                        choice: match choice {
                            DeleteChoice::Yes => DeleteChoice::No,
                            DeleteChoice::No => DeleteChoice::Yes,
                        },
                    }
                }
                other => other,
            },
            DeleteIntent::Activate | DeleteIntent::Cancel => DeleteDialogState::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mvi::Reducer as _;

    fn request() -> DeleteDialogState {
        DeleteReducer::reduce(
            DeleteDialogState::Idle,
            DeleteIntent::Request {
                item: InventoryItem::new("Bolts", "", 1, ""),
                index: 3,
            },
        )
    }

    #[test]
    fn gesture_opens_confirmation_with_no_focused() {
        let state = request();
        match &state {
            DeleteDialogState::Pending { index, choice, .. } => {
                assert_eq!(*index, 3);
                assert_eq!(*choice, DeleteChoice::No);
            }
            other => panic!("expected pending, got {other:?}"),
        }
    }

    #[test]
    fn default_answer_restores() {
        let state = request();
        assert_eq!(resolve(&state), Some(DeleteOutcome::Restored));
        let state = DeleteReducer::reduce(state, DeleteIntent::Activate);
        assert_eq!(state, DeleteDialogState::Idle);
    }

    #[test]
    fn toggled_answer_deletes() {
        let state = DeleteReducer::reduce(request(), DeleteIntent::ToggleChoice);
        match resolve(&state) {
            Some(DeleteOutcome::Deleted { item, index }) => {
                assert_eq!(item.name, "Bolts");
                assert_eq!(index, 3);
            }
            other => panic!("expected deleted, got {other:?}"),
        }
    }

    #[test]
    fn cancel_returns_to_idle() {
        let state = DeleteReducer::reduce(request(), DeleteIntent::Cancel);
        assert_eq!(state, DeleteDialogState::Idle);
        assert_eq!(resolve(&state), None);
    }

    #[test]
    fn toggle_twice_round_trips() {
        let state = request();
        let state = DeleteReducer::reduce(state, DeleteIntent::ToggleChoice);
        let state = DeleteReducer::reduce(state, DeleteIntent::ToggleChoice);
        assert_eq!(resolve(&state), Some(DeleteOutcome::Restored));
    }
}
