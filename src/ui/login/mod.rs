//! Login screen: form state, reducer, and rendering.

pub mod intent;
pub mod reducer;
pub mod state;
pub mod view;

pub use intent::LoginIntent;
pub use reducer::LoginReducer;
pub use state::{LoginField, LoginMode, LoginScreenState};
