use stockpile::config::LayoutMode;
use stockpile::session::{SessionContext, SessionStore};
use tempfile::TempDir;

#[test]
fn session_round_trips_through_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.toml");

    let store = SessionStore::new(path.clone());
    store
        .save(&SessionContext {
            logged_in: true,
            email: "ops@example.com".to_string(),
            preferred_layout: Some(LayoutMode::Grid),
        })
        .unwrap();

    // A second store at the same path sees the same session.
    let reloaded = SessionStore::new(path).load().unwrap();
    assert!(reloaded.logged_in);
    assert_eq!(reloaded.email, "ops@example.com");
    assert_eq!(reloaded.preferred_layout, Some(LayoutMode::Grid));
}

#[test]
fn logout_then_restart_is_logged_out() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.toml");

    let store = SessionStore::new(path.clone());
    store
        .save(&SessionContext {
            logged_in: true,
            email: "ops@example.com".to_string(),
            preferred_layout: None,
        })
        .unwrap();
    store.clear().unwrap();

    let reloaded = SessionStore::new(path).load().unwrap();
    assert!(!reloaded.logged_in);
}

#[test]
fn layout_preference_is_optional() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.toml");
    std::fs::write(&path, "logged_in = true\nemail = \"a@b.c\"\n").unwrap();

    let session = SessionStore::new(path).load().unwrap();
    assert!(session.logged_in);
    assert_eq!(session.preferred_layout, None);
}
