//! Login and registration, driven through key routing.

use std::path::PathBuf;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use stockpile::alert::Alerter;
use stockpile::auth::LocalAuthenticator;
use stockpile::config::{Config, ConfigStore};
use stockpile::session::{SessionContext, SessionStore};
use stockpile::store::MemoryStore;
use stockpile::ui::app::{App, Screen};
use stockpile::ui::input::handle_key;
use stockpile::ui::login::LoginMode;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        handle_key(app, press(KeyCode::Char(ch)));
    }
}

fn fresh_app() -> (App, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let auth = LocalAuthenticator::open(&dir.path().join("login.db")).unwrap();
    let app = App::new(
        ConfigStore::new(Config::default(), PathBuf::from("/tmp/config.toml")),
        SessionStore::new(dir.path().join("session.toml")),
        SessionContext::default(),
        Arc::new(MemoryStore::new()),
        Arc::new(auth),
        Alerter::new(),
    );
    (app, dir)
}

#[test]
fn register_then_sign_in_reaches_the_inventory() {
    let (mut app, _dir) = fresh_app();
    assert_eq!(app.screen(), Screen::Login);

    // Register mode, fill both fields, submit.
    handle_key(&mut app, ctrl('r'));
    assert_eq!(app.login().mode, LoginMode::Register);
    type_text(&mut app, "ops@example.com");
    handle_key(&mut app, press(KeyCode::Tab));
    type_text(&mut app, "hunter2hunter2");
    handle_key(&mut app, press(KeyCode::Enter));

    // Back in sign-in mode with the email kept, password cleared, and the
    // password field focused for the retype.
    assert_eq!(app.login().mode, LoginMode::SignIn);
    assert_eq!(app.login().email, "ops@example.com");
    assert!(app.login().password.is_empty());

    type_text(&mut app, "hunter2hunter2");
    handle_key(&mut app, press(KeyCode::Enter));
    assert_eq!(app.screen(), Screen::Inventory);
}

#[test]
fn weak_password_registration_shows_error() {
    let (mut app, _dir) = fresh_app();
    handle_key(&mut app, ctrl('r'));
    type_text(&mut app, "ops@example.com");
    handle_key(&mut app, press(KeyCode::Tab));
    type_text(&mut app, "short");
    handle_key(&mut app, press(KeyCode::Enter));

    assert_eq!(app.login().mode, LoginMode::Register);
    assert!(app.login().error.as_deref().unwrap().contains("8"));
}

#[test]
fn empty_submit_shows_validation_error() {
    let (mut app, _dir) = fresh_app();
    handle_key(&mut app, press(KeyCode::Enter));
    assert!(app.login().error.is_some());
    assert_eq!(app.screen(), Screen::Login);
}

#[test]
fn wrong_credentials_stay_on_login() {
    let (mut app, _dir) = fresh_app();
    type_text(&mut app, "ghost@example.com");
    handle_key(&mut app, press(KeyCode::Tab));
    type_text(&mut app, "whatever");
    handle_key(&mut app, press(KeyCode::Enter));

    assert_eq!(app.screen(), Screen::Login);
    assert!(app.login().error.is_some());
}

#[test]
fn logout_clears_session_and_returns_to_login() {
    let (mut app, _dir) = fresh_app();
    handle_key(&mut app, ctrl('r'));
    type_text(&mut app, "ops@example.com");
    handle_key(&mut app, press(KeyCode::Tab));
    type_text(&mut app, "hunter2hunter2");
    handle_key(&mut app, press(KeyCode::Enter));
    type_text(&mut app, "hunter2hunter2");
    handle_key(&mut app, press(KeyCode::Enter));
    assert_eq!(app.screen(), Screen::Inventory);

    handle_key(&mut app, ctrl('l'));
    assert_eq!(app.screen(), Screen::Login);
    assert!(app.login().email.is_empty());
}
