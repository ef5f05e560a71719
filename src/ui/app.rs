use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::alert::Alerter;
use crate::auth::Authenticator;
use crate::config::ConfigStore;
use crate::model::InventoryItem;
use crate::session::{SessionContext, SessionStore};
use crate::store::ItemStore;
use crate::ui::delete::{resolve, DeleteDialogState, DeleteIntent, DeleteOutcome, DeleteReducer};
use crate::ui::editor::{EditorDialogState, EditorIntent, EditorMode, EditorReducer};
use crate::ui::inventory::{InventoryIntent, InventoryListState, InventoryReducer};
use crate::ui::login::{LoginIntent, LoginMode, LoginReducer, LoginScreenState};
use crate::ui::mvi::Reducer;

/// How long a transient status message stays up.
const STATUS_TTL: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Login,
    Inventory,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatusKind {
    Info,
    Ok,
    Warn,
}

#[derive(Clone, Debug)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    shown_at: Instant,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    screen: Screen,
    session: SessionContext,
    session_store: SessionStore,
    config: ConfigStore,
    store: Arc<dyn ItemStore>,
    authenticator: Arc<dyn Authenticator>,
    alerter: Alerter,
    login: LoginScreenState,
    list: InventoryListState,
    editor: EditorDialogState,
    delete_dialog: DeleteDialogState,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(
        config: ConfigStore,
        session_store: SessionStore,
        session: SessionContext,
        store: Arc<dyn ItemStore>,
        authenticator: Arc<dyn Authenticator>,
        alerter: Alerter,
    ) -> Self {
        let screen = if session.logged_in {
            Screen::Inventory
        } else {
            Screen::Login
        };
        let layout = session
            .preferred_layout
            .unwrap_or(config.get().ui.default_layout);
        Self {
            should_quit: false,
            screen,
            session,
            session_store,
            config,
            store,
            authenticator,
            alerter,
            login: LoginScreenState::default(),
            list: InventoryListState::with_layout(layout),
            editor: EditorDialogState::default(),
            delete_dialog: DeleteDialogState::default(),
            status: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn login(&self) -> &LoginScreenState {
        &self.login
    }

    pub fn list(&self) -> &InventoryListState {
        &self.list
    }

    pub fn editor(&self) -> &EditorDialogState {
        &self.editor
    }

    pub fn delete_dialog(&self) -> &DeleteDialogState {
        &self.delete_dialog
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
            shown_at: Instant::now(),
        });
    }

    /// Expire the transient status message.
    pub fn on_tick(&mut self) {
        if let Some(status) = &self.status {
            if status.shown_at.elapsed() >= STATUS_TTL {
                self.status = None;
            }
        }
    }

    // ========================================================================
    // Store subscription events
    // ========================================================================

    pub fn on_snapshot(&mut self, items: Vec<InventoryItem>) {
        self.dispatch_list(InventoryIntent::Refresh { items });
    }

    pub fn on_store_cancelled(&mut self, reason: String) {
        self.set_status(StatusKind::Warn, format!("Live updates stopped: {reason}"));
    }

    pub fn on_notice(&mut self, message: String) {
        self.set_status(StatusKind::Warn, message);
    }

    // ========================================================================
    // Login screen
    // ========================================================================

    pub fn dispatch_login(&mut self, intent: LoginIntent) {
        dispatch_mvi!(self, login, LoginReducer, intent);
    }

    /// Enter on the login screen: sign in or register per the active mode.
    pub fn submit_login(&mut self) {
        let email = self.login.email.clone();
        let password = self.login.password.clone();
        match self.login.mode {
            LoginMode::SignIn => match self.authenticator.sign_in(&email, &password) {
                Ok(user) => self.complete_login(user.email),
                Err(err) => self.dispatch_login(LoginIntent::SetError(err.to_string())),
            },
            LoginMode::Register => match self.authenticator.register(&email, &password) {
                Ok(()) => self.dispatch_login(LoginIntent::Registered),
                Err(err) => self.dispatch_login(LoginIntent::SetError(err.to_string())),
            },
        }
    }

    fn complete_login(&mut self, email: String) {
        self.session.logged_in = true;
        self.session.email = email;
        if let Err(err) = self.session_store.save(&self.session) {
            tracing::warn!(error = %err, "session save failed");
        }
        self.dispatch_login(LoginIntent::Reset);
        self.screen = Screen::Inventory;
        tracing::info!(email = %self.session.email, "signed in");
    }

    pub fn logout(&mut self) {
        if let Err(err) = self.session_store.clear() {
            tracing::warn!(error = %err, "session clear failed");
        }
        self.session = SessionContext::default();
        self.dispatch_login(LoginIntent::Reset);
        self.screen = Screen::Login;
        tracing::info!("logged out");
    }

    // ========================================================================
    // Inventory list
    // ========================================================================

    pub fn dispatch_list(&mut self, intent: InventoryIntent) {
        dispatch_mvi!(self, list, InventoryReducer, intent);
    }

    /// Bump the selected row's quantity and write through.
    pub fn increment_selected(&mut self) {
        let index = self.list.selected;
        if self.list.display.get(index).is_none() {
            return;
        }
        self.dispatch_list(InventoryIntent::Increment { index });
        if let Some(after) = self.list.display.get(index) {
            let after = after.clone();
            self.store.update(&after.id.clone(), after);
        }
    }

    /// Drop the selected row's quantity and write through. A decrement at
    /// zero is refused: no write, no alert. Hitting zero fires the
    /// out-of-stock alert exactly once.
    pub fn decrement_selected(&mut self) {
        let index = self.list.selected;
        match self.list.display.get(index) {
            None => return,
            Some(before) if before.quantity == 0 => return,
            Some(_) => {}
        }
        self.dispatch_list(InventoryIntent::Decrement { index });
        if let Some(after) = self.list.display.get(index) {
            let after = after.clone();
            self.store.update(&after.id, after.clone());
            if after.quantity == 0 {
                self.alerter.out_of_stock(&after.name);
            }
        }
    }

    /// Layout flip, remembered across sessions while logged in.
    pub fn toggle_layout(&mut self) {
        self.dispatch_list(InventoryIntent::ToggleLayout);
        self.session.preferred_layout = Some(self.list.layout);
        if self.session.logged_in {
            if let Err(err) = self.session_store.save(&self.session) {
                tracing::warn!(error = %err, "session save failed");
            }
        }
    }

    // ========================================================================
    // Add/edit dialog
    // ========================================================================

    pub fn dispatch_editor(&mut self, intent: EditorIntent) {
        dispatch_mvi!(self, editor, EditorReducer, intent);
    }

    pub fn open_add_dialog(&mut self) {
        self.dispatch_editor(EditorIntent::OpenAdd);
    }

    pub fn open_edit_dialog(&mut self) {
        let index = self.list.selected;
        let Some(item) = self.list.display.get(index) else {
            return;
        };
        let item = item.clone();
        self.dispatch_editor(EditorIntent::OpenEdit { index, item });
    }

    /// Enter in the editor: validate, then create or replace-and-write.
    pub fn save_editor(&mut self) {
        let EditorDialogState::Visible { mode, fields, .. } = &self.editor else {
            return;
        };
        let mode = *mode;
        let item = match InventoryItem::from_input(
            &fields.name,
            &fields.description,
            &fields.quantity,
            &fields.tag,
        ) {
            Ok(item) => item,
            Err(err) => {
                self.dispatch_editor(EditorIntent::SetError(err.to_string()));
                return;
            }
        };

        match mode {
            EditorMode::Add => {
                // The new row shows up with the next snapshot.
                let id = self.store.add(item.clone());
                tracing::debug!(%id, name = %item.name, "item added");
                self.set_status(StatusKind::Ok, format!("Added '{}'", item.name));
            }
            EditorMode::Edit { index } => {
                self.dispatch_list(InventoryIntent::ReplaceAt {
                    index,
                    item: item.clone(),
                });
                if let Some(updated) = self.list.display.get(index) {
                    let updated = updated.clone();
                    self.store.update(&updated.id.clone(), updated);
                }
            }
        }
        self.dispatch_editor(EditorIntent::Close);
    }

    // ========================================================================
    // Delete confirmation
    // ========================================================================

    pub fn dispatch_delete(&mut self, intent: DeleteIntent) {
        dispatch_mvi!(self, delete_dialog, DeleteReducer, intent);
    }

    /// Delete gesture on the selected row.
    pub fn request_delete_selected(&mut self) {
        let index = self.list.selected;
        let Some(item) = self.list.display.get(index) else {
            return;
        };
        let item = item.clone();
        self.dispatch_delete(DeleteIntent::Request { item, index });
    }

    /// Activate the focused dialog button; delete only on an explicit yes.
    pub fn answer_delete(&mut self) {
        let outcome = resolve(&self.delete_dialog);
        self.dispatch_delete(DeleteIntent::Activate);
        match outcome {
            Some(DeleteOutcome::Deleted { item, index }) => {
                self.dispatch_list(InventoryIntent::RemoveAt { index });
                self.store.delete(&item.id);
                self.set_status(StatusKind::Ok, format!("Deleted '{}'", item.name));
            }
            Some(DeleteOutcome::Restored) | None => {}
        }
    }

    /// Surface a config reload result without interrupting the list.
    pub fn reload_config(&mut self) {
        match self.config.reload() {
            Ok(()) => self.set_status(StatusKind::Info, "Config reloaded"),
            Err(err) => self.set_status(StatusKind::Warn, err.to_string()),
        }
    }
}
