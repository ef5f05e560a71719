use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Cooperative stop flag shared by the input thread, the store listener,
/// and the UI loop.
#[derive(Clone, Default)]
pub struct ShutdownHandle {
    flag: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signal(&self) {
        if !self.flag.swap(true, Ordering::SeqCst) {
            tracing::info!("shutdown signalled");
            self.notify.notify_waiters();
        }
    }

    pub fn is_shutting_down(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    pub async fn wait(&self) {
        // Subscribe before checking the flag so a signal between the check
        // and the await is not lost.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_shutting_down() {
            return;
        }
        notified.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_is_idempotent() {
        let handle = ShutdownHandle::new();
        assert!(!handle.is_shutting_down());
        handle.signal();
        handle.signal();
        assert!(handle.is_shutting_down());
    }

    #[tokio::test]
    async fn wait_returns_after_signal() {
        let handle = ShutdownHandle::new();
        handle.signal();
        handle.wait().await;
    }
}
