use crate::ui::login::intent::LoginIntent;
use crate::ui::login::state::{LoginField, LoginMode, LoginScreenState};
use crate::ui::mvi::Reducer;

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginScreenState;
    type Intent = LoginIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoginIntent::Input(ch) => {
                match state.focused {
                    LoginField::Email => state.email.push(ch),
                    LoginField::Password => state.password.push(ch),
                }
                state.error = None;
                state.info = None;
            }
            LoginIntent::Backspace => {
                match state.focused {
                    LoginField::Email => state.email.pop(),
                    LoginField::Password => state.password.pop(),
                };
                state.error = None;
            }
            LoginIntent::SwitchField => {
                state.focused = state.focused.other();
            }
            LoginIntent::ToggleMode => {
                state.mode = match state.mode {
                    LoginMode::SignIn => LoginMode::Register,
                    LoginMode::Register => LoginMode::SignIn,
                };
                state.error = None;
                state.info = None;
            }
            LoginIntent::SetError(message) => {
                state.error = Some(message);
            }
            LoginIntent::Registered => {
                state.mode = LoginMode::SignIn;
                state.password.clear();
                state.focused = LoginField::Password;
                state.error = None;
                state.info = Some("Registration successful. Please sign in.".to_string());
            }
            LoginIntent::Reset => {
                state = LoginScreenState::default();
            }
        }
        state
    }
}
