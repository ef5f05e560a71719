use crate::model::{InventoryItem, TAG_ALL};
use crate::ui::inventory::composer::{compose, SortOrder};
use crate::ui::inventory::intent::InventoryIntent;
use crate::ui::inventory::state::{InputMode, InventoryListState};
use crate::ui::mvi::Reducer;

pub struct InventoryReducer;

impl Reducer for InventoryReducer {
    type State = InventoryListState;
    type Intent = InventoryIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            InventoryIntent::Refresh { items } => {
                state.master = items;
                recompute(&mut state);
            }
            InventoryIntent::SelectUp => {
                let len = state.display.len();
                if len > 0 {
                    state.selected = if state.selected == 0 {
                        len - 1
                    } else {
                        state.selected - 1
                    };
                }
            }
            InventoryIntent::SelectDown => {
                let len = state.display.len();
                if len > 0 {
                    state.selected = if state.selected + 1 >= len {
                        0
                    } else {
                        state.selected + 1
                    };
                }
            }
            InventoryIntent::Increment { index } => {
                let updated = state.display.get(index).map(InventoryItem::incremented);
                if let Some(updated) = updated {
                    set_row(&mut state, index, updated);
                }
            }
            InventoryIntent::Decrement { index } => {
                let updated = state.display.get(index).and_then(InventoryItem::decremented);
                if let Some(updated) = updated {
                    set_row(&mut state, index, updated);
                }
            }
            InventoryIntent::ReplaceAt { index, mut item } => {
                if index < state.display.len() {
                    item.id = state.display[index].id.clone();
                    if let Some(entry) = state.master.iter_mut().find(|i| i.id == item.id) {
                        *entry = item.clone();
                    }
                    state.display[index] = item;
                }
            }
            InventoryIntent::RemoveAt { index } => {
                if index >= state.display.len() {
                    return state;
                }
                let removed = state.display.remove(index);
                state.master.retain(|item| item.id != removed.id);
                clamp_selection(&mut state);
            }
            InventoryIntent::CycleTagFilter => {
                state.query.tag = next_tag(&state);
                recompute(&mut state);
            }
            InventoryIntent::StartSearch => {
                state.input_mode = InputMode::Search;
                state.query.search.clear();
                recompute(&mut state);
            }
            InventoryIntent::SearchChar(ch) => {
                state.query.search.push(ch);
                recompute(&mut state);
            }
            InventoryIntent::SearchBackspace => {
                state.query.search.pop();
                recompute(&mut state);
            }
            InventoryIntent::EndSearch => {
                state.input_mode = InputMode::Browse;
            }
            InventoryIntent::ClearSearch => {
                state.input_mode = InputMode::Browse;
                state.query.search.clear();
                recompute(&mut state);
            }
            InventoryIntent::CycleSort => {
                state.query.sort = match state.query.sort {
                    None => Some(SortOrder::Ascending),
                    Some(SortOrder::Ascending) => Some(SortOrder::Descending),
                    Some(SortOrder::Descending) => None,
                };
                recompute(&mut state);
            }
            InventoryIntent::ToggleLayout => {
                state.layout = state.layout.toggled();
            }
        }
        state
    }
}

/// Re-derive the display list wholesale and keep the selection in range.
fn recompute(state: &mut InventoryListState) {
    state.display = compose(&state.master, &state.query);
    clamp_selection(state);
}

fn clamp_selection(state: &mut InventoryListState) {
    if state.display.is_empty() {
        state.selected = 0;
    } else if state.selected >= state.display.len() {
        state.selected = state.display.len() - 1;
    }
}

/// Touch only the affected row, in both the display and master lists.
fn set_row(state: &mut InventoryListState, index: usize, updated: InventoryItem) {
    if let Some(entry) = state.master.iter_mut().find(|i| i.id == updated.id) {
        *entry = updated.clone();
    }
    state.display[index] = updated;
}

/// Next tag in the cycle: the sentinel, then each tag seen in the master
/// list in alphabetical order.
fn next_tag(state: &InventoryListState) -> String {
    let mut tags: Vec<String> = state
        .master
        .iter()
        .map(|item| item.tag.to_lowercase())
        .collect();
    tags.sort();
    tags.dedup();

    let current = state.query.tag.to_lowercase();
    if current == TAG_ALL {
        return tags.into_iter().next().unwrap_or_else(|| TAG_ALL.to_string());
    }
    match tags.iter().position(|tag| *tag == current) {
        Some(pos) if pos + 1 < tags.len() => tags[pos + 1].clone(),
        _ => TAG_ALL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InventoryItem;
    use crate::ui::mvi::Reducer as _;

    fn seeded() -> InventoryListState {
        let mut items = vec![
            InventoryItem::new("Bolts", "", 4, "hardware"),
            InventoryItem::new("Nuts", "", 2, "hardware"),
            InventoryItem::new("Tape", "", 1, "consumables"),
        ];
        for (i, item) in items.iter_mut().enumerate() {
            item.id = format!("id-{i}");
        }
        InventoryReducer::reduce(
            InventoryListState::default(),
            InventoryIntent::Refresh { items },
        )
    }

    #[test]
    fn refresh_fills_both_lists() {
        let state = seeded();
        assert_eq!(state.master.len(), 3);
        assert_eq!(state.display.len(), 3);
    }

    #[test]
    fn selection_wraps_both_ways() {
        let state = seeded();
        let state = InventoryReducer::reduce(state, InventoryIntent::SelectUp);
        assert_eq!(state.selected, 2);
        let state = InventoryReducer::reduce(state, InventoryIntent::SelectDown);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn decrement_clamps_at_zero() {
        let state = seeded();
        let state = InventoryReducer::reduce(state, InventoryIntent::Decrement { index: 2 });
        assert_eq!(state.display[2].quantity, 0);
        let state = InventoryReducer::reduce(state, InventoryIntent::Decrement { index: 2 });
        assert_eq!(state.display[2].quantity, 0);
    }

    #[test]
    fn adjust_touches_master_too() {
        let state = seeded();
        let state = InventoryReducer::reduce(state, InventoryIntent::Increment { index: 0 });
        assert_eq!(state.master.iter().find(|i| i.id == "id-0").unwrap().quantity, 5);
    }

    #[test]
    fn remove_at_drops_exactly_one_and_keeps_order() {
        let state = seeded();
        let state = InventoryReducer::reduce(state, InventoryIntent::RemoveAt { index: 1 });
        let names: Vec<_> = state.display.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Bolts", "Tape"]);
        assert_eq!(state.master.len(), 2);
        assert!(state.master.iter().all(|i| i.id != "id-1"));
    }

    #[test]
    fn replace_keeps_identity_and_position() {
        let state = seeded();
        let replacement = InventoryItem::new("Bolts M4", "coarse", 9, "hardware");
        let state = InventoryReducer::reduce(
            state,
            InventoryIntent::ReplaceAt {
                index: 0,
                item: replacement,
            },
        );
        assert_eq!(state.display[0].id, "id-0");
        assert_eq!(state.display[0].name, "Bolts M4");
        assert_eq!(state.master[0].name, "Bolts M4");
    }

    #[test]
    fn tag_filter_cycles_through_known_tags() {
        let state = seeded();
        let state = InventoryReducer::reduce(state, InventoryIntent::CycleTagFilter);
        assert_eq!(state.query.tag, "consumables");
        assert_eq!(state.display.len(), 1);
        let state = InventoryReducer::reduce(state, InventoryIntent::CycleTagFilter);
        assert_eq!(state.query.tag, "hardware");
        let state = InventoryReducer::reduce(state, InventoryIntent::CycleTagFilter);
        assert_eq!(state.query.tag, TAG_ALL);
        assert_eq!(state.display.len(), 3);
    }

    #[test]
    fn search_narrows_and_clear_restores() {
        let state = seeded();
        let state = InventoryReducer::reduce(state, InventoryIntent::StartSearch);
        let state = InventoryReducer::reduce(state, InventoryIntent::SearchChar('t'));
        let state = InventoryReducer::reduce(state, InventoryIntent::SearchChar('a'));
        let names: Vec<_> = state.display.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Tape"]);
        let state = InventoryReducer::reduce(state, InventoryIntent::ClearSearch);
        assert_eq!(state.display.len(), 3);
        assert_eq!(state.input_mode, InputMode::Browse);
    }

    #[test]
    fn sort_cycles_back_to_store_order() {
        let state = seeded();
        let asc = InventoryReducer::reduce(state, InventoryIntent::CycleSort);
        assert_eq!(asc.query.sort, Some(SortOrder::Ascending));
        let desc = InventoryReducer::reduce(asc, InventoryIntent::CycleSort);
        assert_eq!(desc.display[0].name, "Tape");
        let none = InventoryReducer::reduce(desc, InventoryIntent::CycleSort);
        assert_eq!(none.query.sort, None);
        assert_eq!(none.display[0].name, "Bolts");
    }

    #[test]
    fn refresh_clamps_selection() {
        let mut state = seeded();
        state.selected = 2;
        let state = InventoryReducer::reduce(
            state,
            InventoryIntent::Refresh {
                items: vec![InventoryItem::new("Solo", "", 1, "")],
            },
        );
        assert_eq!(state.selected, 0);
    }
}
