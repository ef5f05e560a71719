//! Event loop wiring.
//!
//! Builds the event channel, hooks the store subscription and alert sinks
//! into it, and drives draw/handle rounds on the main thread until quit or
//! shutdown.

use std::io::{self, Stdout};
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::cursor::Show;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::alert::{Alerter, FnSink, SmsGatewaySink, StockAlert};
use crate::auth::Authenticator;
use crate::config::ConfigStore;
use crate::session::{SessionContext, SessionStore};
use crate::shutdown::ShutdownHandle;
use crate::store::{ItemStore, StoreEvent, StoreSubscription};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;

/// Everything the UI needs, assembled by `main`.
pub struct AppContext {
    pub config: ConfigStore,
    pub session_store: SessionStore,
    pub session: SessionContext,
    pub store: Arc<dyn ItemStore>,
    pub authenticator: Arc<dyn Authenticator>,
    pub runtime: tokio::runtime::Handle,
    pub shutdown: ShutdownHandle,
}

pub fn run(ctx: AppContext) -> io::Result<()> {
    let cfg = ctx.config.get();
    let tick_rate = Duration::from_millis(cfg.ui.tick_ms);
    let events = EventHandler::new(tick_rate, ctx.shutdown.clone());

    let alerter = build_alerter(&ctx, events.sender());
    let mut app = App::new(
        ctx.config,
        ctx.session_store,
        ctx.session,
        Arc::clone(&ctx.store),
        ctx.authenticator,
        alerter,
    );

    spawn_store_forwarder(ctx.store.subscribe(), events.sender(), ctx.shutdown.clone());

    let (mut terminal, guard) = setup_terminal()?;
    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() || ctx.shutdown.is_shutting_down() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // ratatui re-measures the frame on the next draw.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::StoreSnapshot(items)) => app.on_snapshot(items),
            Ok(AppEvent::StoreCancelled(reason)) => app.on_store_cancelled(reason),
            Ok(AppEvent::Notice(message)) => app.on_notice(message),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    ctx.shutdown.signal();
    drop(guard);
    Ok(())
}

fn build_alerter(ctx: &AppContext, notices: Sender<AppEvent>) -> Alerter {
    let cfg = ctx.config.get();
    if !cfg.alerts.enabled {
        return Alerter::new();
    }
    // Sender is not Sync; the sink shares it behind a mutex.
    let notices = std::sync::Mutex::new(notices);
    let mut alerter = Alerter::new().with_sink(Box::new(FnSink(move |alert: &StockAlert| {
        if let Ok(notices) = notices.lock() {
            let _ = notices.send(AppEvent::Notice(alert.message()));
        }
    })));
    if !cfg.alerts.gateway_url.trim().is_empty() {
        alerter = alerter.with_sink(Box::new(SmsGatewaySink::new(
            &cfg.alerts.gateway_url,
            &cfg.alerts.recipient,
            ctx.runtime.clone(),
        )));
    }
    alerter
}

/// Marshal subscription events onto the UI thread's channel.
fn spawn_store_forwarder(
    mut subscription: StoreSubscription,
    tx: Sender<AppEvent>,
    shutdown: ShutdownHandle,
) {
    thread::spawn(move || {
        while let Some(event) = subscription.blocking_recv() {
            if shutdown.is_shutting_down() {
                break;
            }
            let forwarded = match event {
                StoreEvent::Snapshot(items) => AppEvent::StoreSnapshot(items),
                StoreEvent::Cancelled { reason } => AppEvent::StoreCancelled(reason),
            };
            if tx.send(forwarded).is_err() {
                break;
            }
        }
    });
}

/// Alternate-screen terminal with restore-on-drop and restore-on-panic.
pub struct TerminalGuard;

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, TerminalGuard))
}
