use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use stockpile::auth::LocalAuthenticator;
use stockpile::cli::Args;
use stockpile::config::{Config, ConfigStore, StoreMode};
use stockpile::session::SessionStore;
use stockpile::shutdown::ShutdownHandle;
use stockpile::store::{ItemStore, MemoryStore, RemoteStore, SqliteStore};
use stockpile::ui::runtime::{run, AppContext};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stockpile");
    fs::create_dir_all(&data_dir)
        .with_context(|| format!("creating data dir {}", data_dir.display()))?;
    init_logging(&data_dir, &args.log_level)?;

    let config_path = args.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path).context("loading config")?;
    let config_store = ConfigStore::new(config.clone(), config_path);

    let session_store = SessionStore::new(SessionStore::default_path());
    let session = session_store.load().context("loading session")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;
    let shutdown = ShutdownHandle::new();

    let store = build_store(&args, &config, &data_dir, runtime.handle(), &shutdown)?;
    let authenticator = LocalAuthenticator::open(&data_dir.join("login.db"))
        .context("opening credential database")?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");
    let result = run(AppContext {
        config: config_store,
        session_store,
        session,
        store,
        authenticator: Arc::new(authenticator),
        runtime: runtime.handle().clone(),
        shutdown: shutdown.clone(),
    });

    shutdown.signal();
    runtime.shutdown_timeout(std::time::Duration::from_secs(2));
    result.context("running ui")
}

/// Pick the backing store: CLI flags first, then config.
fn build_store(
    args: &Args,
    config: &Config,
    data_dir: &std::path::Path,
    runtime: &tokio::runtime::Handle,
    shutdown: &ShutdownHandle,
) -> anyhow::Result<Arc<dyn ItemStore>> {
    if args.memory {
        return Ok(Arc::new(MemoryStore::with_sample_items(20)));
    }
    if let Some(path) = &args.legacy_db {
        let store = SqliteStore::open(path).context("opening legacy database")?;
        return Ok(Arc::new(store));
    }
    match config.store.mode {
        StoreMode::Memory => Ok(Arc::new(MemoryStore::with_sample_items(20))),
        StoreMode::Sqlite => {
            let path = if config.store.database_path.trim().is_empty() {
                data_dir.join("inventory.db")
            } else {
                PathBuf::from(&config.store.database_path)
            };
            let store = SqliteStore::open(&path).context("opening embedded database")?;
            Ok(Arc::new(store))
        }
        StoreMode::Remote => {
            let store = RemoteStore::new(
                &config.store.base_url,
                &config.store.collection,
                runtime.clone(),
            );
            store.spawn_listener(shutdown.clone());
            Ok(Arc::new(store))
        }
    }
}

fn init_logging(data_dir: &std::path::Path, filter: &str) -> anyhow::Result<()> {
    let log_file = fs::File::options()
        .create(true)
        .append(true)
        .open(data_dir.join("stockpile.log"))
        .context("opening log file")?;
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}
