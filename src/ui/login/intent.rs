use crate::ui::mvi::Intent;

pub enum LoginIntent {
    Input(char),
    Backspace,
    /// Tab between the email and password fields.
    SwitchField,
    /// Flip between sign-in and register.
    ToggleMode,
    SetError(String),
    /// Registration succeeded; clear the password and prompt to sign in.
    Registered,
    /// Wipe everything (shown again after logout).
    Reset,
}

impl Intent for LoginIntent {}
