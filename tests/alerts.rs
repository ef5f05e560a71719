//! Out-of-stock alerting through the full app flow.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use stockpile::alert::{Alerter, FnSink, StockAlert};
use stockpile::auth::LocalAuthenticator;
use stockpile::config::{Config, ConfigStore};
use stockpile::model::InventoryItem;
use stockpile::session::{SessionContext, SessionStore};
use stockpile::store::{ItemStore, MemoryStore};
use stockpile::ui::app::App;
use stockpile::ui::inventory::InventoryIntent;

fn app_with_counter(store: MemoryStore, count: Arc<AtomicUsize>) -> (App, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let alerter = Alerter::new().with_sink(Box::new(FnSink(move |_: &StockAlert| {
        count.fetch_add(1, Ordering::SeqCst);
    })));
    let mut app = App::new(
        ConfigStore::new(Config::default(), PathBuf::from("/tmp/config.toml")),
        SessionStore::new(dir.path().join("session.toml")),
        SessionContext {
            logged_in: true,
            email: "ops@example.com".to_string(),
            preferred_layout: None,
        },
        Arc::new(store.clone()),
        Arc::new(LocalAuthenticator::open_in_memory().unwrap()),
        alerter,
    );
    app.on_snapshot(store.snapshot());
    (app, dir)
}

#[test]
fn reaching_zero_alerts_exactly_once() {
    let store = MemoryStore::new();
    store.add(InventoryItem::new("Tape", "", 1, ""));
    let count = Arc::new(AtomicUsize::new(0));
    let (mut app, _dir) = app_with_counter(store, Arc::clone(&count));

    app.decrement_selected();
    assert_eq!(app.list().display[0].quantity, 0);
    assert_eq!(count.load(Ordering::SeqCst), 1);

    // Already at zero: refused, no second alert.
    app.decrement_selected();
    assert_eq!(app.list().display[0].quantity, 0);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn decrement_above_zero_does_not_alert() {
    let store = MemoryStore::new();
    store.add(InventoryItem::new("Bolts", "", 3, ""));
    let count = Arc::new(AtomicUsize::new(0));
    let (mut app, _dir) = app_with_counter(store, Arc::clone(&count));

    app.decrement_selected();
    app.decrement_selected();
    assert_eq!(app.list().display[0].quantity, 1);
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn increment_never_alerts() {
    let store = MemoryStore::new();
    store.add(InventoryItem::new("Bolts", "", 0, ""));
    let count = Arc::new(AtomicUsize::new(0));
    let (mut app, _dir) = app_with_counter(store, Arc::clone(&count));

    app.increment_selected();
    assert_eq!(app.list().display[0].quantity, 1);
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn each_item_alerts_independently() {
    let store = MemoryStore::new();
    store.add(InventoryItem::new("Tape", "", 1, ""));
    store.add(InventoryItem::new("Glue", "", 1, ""));
    let count = Arc::new(AtomicUsize::new(0));
    let (mut app, _dir) = app_with_counter(store, Arc::clone(&count));

    app.decrement_selected();
    app.dispatch_list(InventoryIntent::SelectDown);
    app.decrement_selected();
    assert_eq!(count.load(Ordering::SeqCst), 2);
}
