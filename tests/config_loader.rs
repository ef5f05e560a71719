use stockpile::config::{Config, ConfigStore, LayoutMode, StoreMode};
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.store.mode, StoreMode::Memory);
    assert_eq!(config.store.collection, "inventory");
    assert_eq!(config.alerts.recipient, "1234567890");
    assert_eq!(config.ui.tick_ms, 250);
}

#[test]
fn full_config_parses() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"[store]
mode = "remote"
base_url = "https://stock.example.com"
collection = "warehouse"

[alerts]
enabled = true
gateway_url = "https://sms.example.com/send"
recipient = "5550001111"

[ui]
tick_ms = 100
default_layout = "grid"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.store.mode, StoreMode::Remote);
    assert_eq!(config.store.base_url, "https://stock.example.com");
    assert_eq!(config.store.collection, "warehouse");
    assert_eq!(config.alerts.gateway_url, "https://sms.example.com/send");
    assert_eq!(config.ui.tick_ms, 100);
    assert_eq!(config.ui.default_layout, LayoutMode::Grid);
}

#[test]
fn partial_config_keeps_defaults_elsewhere() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[ui]\ntick_ms = 500\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.tick_ms, 500);
    assert_eq!(config.store.mode, StoreMode::Memory);
    assert!(config.alerts.enabled);
}

#[test]
fn remote_mode_requires_base_url() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[store]\nmode = \"remote\"\n").unwrap();
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn zero_tick_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[ui]\ntick_ms = 0\n").unwrap();
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[store\nmode =").unwrap();
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn reload_keeps_old_config_on_failure() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[ui]\ntick_ms = 100\n").unwrap();

    let store = ConfigStore::new(Config::load_from(&path).unwrap(), path.clone());
    std::fs::write(&path, "not toml at all [").unwrap();
    assert!(store.reload().is_err());
    assert_eq!(store.get().ui.tick_ms, 100);
}

#[test]
fn reload_picks_up_changes() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[ui]\ntick_ms = 100\n").unwrap();

    let store = ConfigStore::new(Config::load_from(&path).unwrap(), path.clone());
    std::fs::write(&path, "[ui]\ntick_ms = 750\n").unwrap();
    store.reload().unwrap();
    assert_eq!(store.get().ui.tick_ms, 750);
}
