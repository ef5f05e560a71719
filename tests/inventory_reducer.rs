mod common;

use common::items;
use stockpile::ui::inventory::{
    InventoryIntent, InventoryListState, InventoryReducer,
};
use stockpile::ui::mvi::Reducer;

fn seeded(entries: &[(&str, u32)]) -> InventoryListState {
    InventoryReducer::reduce(
        InventoryListState::default(),
        InventoryIntent::Refresh {
            items: items(entries),
        },
    )
}

#[test]
fn decrement_never_goes_negative() {
    let mut state = seeded(&[("Bolts", 2)]);
    for _ in 0..5 {
        state = InventoryReducer::reduce(state, InventoryIntent::Decrement { index: 0 });
        assert!(state.display[0].quantity <= 2);
    }
    assert_eq!(state.display[0].quantity, 0);
}

#[test]
fn delete_removes_exactly_one_matching_identity() {
    let state = seeded(&[("A", 1), ("B", 1), ("C", 1), ("D", 1)]);
    let state = InventoryReducer::reduce(state, InventoryIntent::RemoveAt { index: 2 });

    let names: Vec<_> = state.display.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "D"]);
    assert_eq!(state.master.len(), 3);
    assert!(state.master.iter().all(|i| i.id != "id-2"));
}

#[test]
fn remove_out_of_bounds_is_ignored() {
    let state = seeded(&[("A", 1)]);
    let state = InventoryReducer::reduce(state, InventoryIntent::RemoveAt { index: 9 });
    assert_eq!(state.item_count(), 1);
}

#[test]
fn adjust_refreshes_only_the_affected_row() {
    // With an active sort, a renamed-order mutation must not re-sort.
    let state = seeded(&[("b", 3), ("a", 3), ("c", 3)]);
    let state = InventoryReducer::reduce(state, InventoryIntent::CycleSort);
    let before: Vec<_> = state.display.iter().map(|i| i.id.clone()).collect();

    let state = InventoryReducer::reduce(state, InventoryIntent::Increment { index: 1 });
    let after: Vec<_> = state.display.iter().map(|i| i.id.clone()).collect();
    assert_eq!(before, after);
    assert_eq!(state.display[1].quantity, 4);
}

#[test]
fn snapshot_refresh_reapplies_the_active_query() {
    let state = seeded(&[("Bolts", 1), ("Tape", 1)]);
    let state = InventoryReducer::reduce(state, InventoryIntent::StartSearch);
    let state = InventoryReducer::reduce(state, InventoryIntent::SearchChar('b'));
    assert_eq!(state.item_count(), 1);

    // A new snapshot arrives while the search is active.
    let state = InventoryReducer::reduce(
        state,
        InventoryIntent::Refresh {
            items: items(&[("Bolts", 1), ("Brackets", 2), ("Tape", 1)]),
        },
    );
    let names: Vec<_> = state.display.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Bolts", "Brackets"]);
}

#[test]
fn selection_survives_shrinking_display() {
    let mut state = seeded(&[("A", 1), ("B", 1), ("C", 1)]);
    state.selected = 2;
    let state = InventoryReducer::reduce(state, InventoryIntent::RemoveAt { index: 2 });
    assert_eq!(state.selected, 1);

    let state = InventoryReducer::reduce(
        state,
        InventoryIntent::Refresh { items: vec![] },
    );
    assert_eq!(state.selected, 0);
    assert_eq!(state.item_count(), 0);
}

#[test]
fn selection_on_empty_list_stays_put() {
    let state = InventoryReducer::reduce(
        InventoryListState::default(),
        InventoryIntent::SelectDown,
    );
    assert_eq!(state.selected, 0);
}
