use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

impl LoginField {
    pub fn other(self) -> Self {
        match self {
            Self::Email => Self::Password,
            Self::Password => Self::Email,
        }
    }
}

/// Sign in against an existing account, or create one first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginMode {
    #[default]
    SignIn,
    Register,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginScreenState {
    pub email: String,
    pub password: String,
    pub focused: LoginField,
    pub mode: LoginMode,
    /// Message from the last failed attempt.
    pub error: Option<String>,
    /// One-shot confirmation after a successful registration.
    pub info: Option<String>,
}

impl UiState for LoginScreenState {}

impl LoginScreenState {
    pub fn title(&self) -> &'static str {
        match self.mode {
            LoginMode::SignIn => "Sign In",
            LoginMode::Register => "Register",
        }
    }
}
