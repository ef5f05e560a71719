//! MVI building blocks.
//!
//! Every screen and dialog keeps its state in a value type, receives
//! intents (key presses, snapshots, dialog actions), and folds them through
//! a pure reducer. Side effects like store writes, alerts, and persistence
//! stay in the application layer, which dispatches an intent first and acts
//! on the resulting state after.

/// State held by a screen or dialog.
///
/// Cloneable so reducers can take the old value and hand back a new one,
/// comparable so redraws can be skipped when nothing changed.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// An action fed to a reducer: user input, a store event, a timer.
pub trait Intent: Send + 'static {}

/// Pure state transition: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
