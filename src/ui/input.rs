//! Key routing.
//!
//! One entry point per key event; which handler it lands in depends on the
//! active screen, then on whichever dialog is open. Dialogs swallow
//! everything so list shortcuts cannot fire underneath them.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Screen};
use crate::ui::delete::{DeleteChoice, DeleteDialogState, DeleteIntent};
use crate::ui::editor::EditorIntent;
use crate::ui::inventory::{InputMode, InventoryIntent};
use crate::ui::login::LoginIntent;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.screen() {
        Screen::Login => handle_login_key(app, key),
        Screen::Inventory => {
            if app.delete_dialog().is_visible() {
                handle_delete_key(app, key);
            } else if app.editor().is_visible() {
                handle_editor_key(app, key);
            } else if app.list().input_mode == InputMode::Search {
                handle_search_key(app, key);
            } else {
                handle_list_key(app, key);
            }
        }
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'r') {
        app.dispatch_login(LoginIntent::ToggleMode);
        return;
    }
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.dispatch_login(LoginIntent::SwitchField);
        }
        KeyCode::Enter => app.submit_login(),
        KeyCode::Backspace => app.dispatch_login(LoginIntent::Backspace),
        KeyCode::Char(ch) if is_plain(key) => app.dispatch_login(LoginIntent::Input(ch)),
        _ => {}
    }
}

fn handle_delete_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
            app.dispatch_delete(DeleteIntent::ToggleChoice);
        }
        KeyCode::Enter => app.answer_delete(),
        KeyCode::Char('y') => {
            if matches!(
                app.delete_dialog(),
                DeleteDialogState::Pending {
                    choice: DeleteChoice::No,
                    ..
                }
            ) {
                app.dispatch_delete(DeleteIntent::ToggleChoice);
            }
            app.answer_delete();
        }
        KeyCode::Char('n') | KeyCode::Esc => app.dispatch_delete(DeleteIntent::Cancel),
        _ => {}
    }
}

fn handle_editor_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.dispatch_editor(EditorIntent::Close),
        KeyCode::Tab | KeyCode::Down => app.dispatch_editor(EditorIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_editor(EditorIntent::FocusPrev),
        KeyCode::Enter => app.save_editor(),
        KeyCode::Backspace => app.dispatch_editor(EditorIntent::Backspace),
        KeyCode::Char(ch) if is_plain(key) => app.dispatch_editor(EditorIntent::Input(ch)),
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.dispatch_list(InventoryIntent::ClearSearch),
        KeyCode::Enter => app.dispatch_list(InventoryIntent::EndSearch),
        KeyCode::Backspace => app.dispatch_list(InventoryIntent::SearchBackspace),
        KeyCode::Up => app.dispatch_list(InventoryIntent::SelectUp),
        KeyCode::Down => app.dispatch_list(InventoryIntent::SelectDown),
        KeyCode::Char(ch) if is_plain(key) => {
            app.dispatch_list(InventoryIntent::SearchChar(ch));
        }
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'l') {
        app.logout();
        return;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.dispatch_list(InventoryIntent::SelectUp),
        KeyCode::Down | KeyCode::Char('j') => app.dispatch_list(InventoryIntent::SelectDown),
        KeyCode::Char('+') | KeyCode::Char('=') => app.increment_selected(),
        KeyCode::Char('-') | KeyCode::Char('_') => app.decrement_selected(),
        KeyCode::Char('a') => app.open_add_dialog(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_dialog(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete_selected(),
        KeyCode::Char('/') => app.dispatch_list(InventoryIntent::StartSearch),
        KeyCode::Char('t') => app.dispatch_list(InventoryIntent::CycleTagFilter),
        KeyCode::Char('s') => app.dispatch_list(InventoryIntent::CycleSort),
        KeyCode::Char('g') => app.toggle_layout(),
        KeyCode::Esc => app.dispatch_list(InventoryIntent::ClearSearch),
        KeyCode::F(5) => app.reload_config(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}

fn is_plain(key: KeyEvent) -> bool {
    key.modifiers
        .difference(KeyModifiers::SHIFT)
        .is_empty()
}
