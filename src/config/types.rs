use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub alerts: AlertConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Which backing store the app talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreMode {
    /// In-process store seeded with sample rows.
    #[default]
    Memory,
    /// Live remote collection over HTTP.
    Remote,
    /// Embedded single-table database.
    Sqlite,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub mode: StoreMode,
    /// Base URL of the remote database, e.g. "https://stock.example.com".
    #[serde(default)]
    pub base_url: String,
    /// Collection node under the base URL.
    #[serde(default = "default_collection")]
    pub collection: String,
    /// Path of the embedded database. Empty means the platform data dir.
    #[serde(default)]
    pub database_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// SMS gateway endpoint. Empty disables the SMS sink.
    #[serde(default)]
    pub gateway_url: String,
    /// Destination number. Still the placeholder until operators can set
    /// their own from inside the app.
    #[serde(default = "default_recipient")]
    pub recipient: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event-loop tick interval in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Layout used when the session has no preference saved.
    #[serde(default)]
    pub default_layout: LayoutMode,
}

/// How the inventory body is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    List,
    Grid,
}

impl LayoutMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::List => Self::Grid,
            Self::Grid => Self::List,
        }
    }
}

fn default_collection() -> String {
    "inventory".to_string()
}

fn default_recipient() -> String {
    "1234567890".to_string()
}

fn default_tick_ms() -> u64 {
    250
}

fn default_true() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            mode: StoreMode::default(),
            base_url: String::new(),
            collection: default_collection(),
            database_path: String::new(),
        }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            gateway_url: String::new(),
            recipient: default_recipient(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            default_layout: LayoutMode::default(),
        }
    }
}
