//! Out-of-stock alerting.
//!
//! An alert fires when a decrement takes an item's quantity to exactly
//! zero. Delivery is fan-out to sinks; every sink is fire-and-forget and
//! failures never bubble back into the inventory flow.

pub mod sms;

pub use sms::SmsGatewaySink;

/// One out-of-stock occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockAlert {
    pub item_name: String,
}

impl StockAlert {
    pub fn message(&self) -> String {
        format!("Item {} is out of stock!", self.item_name)
    }
}

/// A delivery channel for stock alerts.
pub trait AlertSink: Send + Sync {
    fn deliver(&self, alert: &StockAlert);
}

/// Fans each alert out to every configured sink.
#[derive(Default)]
pub struct Alerter {
    sinks: Vec<Box<dyn AlertSink>>,
}

impl Alerter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sink(mut self, sink: Box<dyn AlertSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn out_of_stock(&self, item_name: &str) {
        let alert = StockAlert {
            item_name: item_name.to_string(),
        };
        tracing::info!(item = %alert.item_name, "out of stock");
        for sink in &self.sinks {
            sink.deliver(&alert);
        }
    }
}

/// Sink backed by any closure; the UI uses this to turn alerts into
/// transient status messages.
pub struct FnSink<F>(pub F);

impl<F> AlertSink for FnSink<F>
where
    F: Fn(&StockAlert) + Send + Sync,
{
    fn deliver(&self, alert: &StockAlert) {
        (self.0)(alert);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn alerts_reach_every_sink() {
        let count = Arc::new(AtomicUsize::new(0));
        let a = Arc::clone(&count);
        let b = Arc::clone(&count);
        let alerter = Alerter::new()
            .with_sink(Box::new(FnSink(move |_: &StockAlert| {
                a.fetch_add(1, Ordering::SeqCst);
            })))
            .with_sink(Box::new(FnSink(move |_: &StockAlert| {
                b.fetch_add(1, Ordering::SeqCst);
            })));

        alerter.out_of_stock("Bolts");
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn message_names_the_item() {
        let alert = StockAlert {
            item_name: "Bolts".to_string(),
        };
        assert_eq!(alert.message(), "Item Bolts is out of stock!");
    }
}
