//! SMS delivery through an HTTP gateway.

use serde::Serialize;
use tokio::runtime::Handle;

use crate::alert::{AlertSink, StockAlert};

#[derive(Serialize)]
struct OutboundSms<'a> {
    to: &'a str,
    body: &'a str,
}

/// POSTs each alert to a gateway endpoint as `{"to", "body"}`.
///
/// The recipient comes from config and currently defaults to a placeholder
/// number; delivery errors are logged and dropped.
pub struct SmsGatewaySink {
    client: reqwest::Client,
    gateway_url: String,
    recipient: String,
    runtime: Handle,
}

impl SmsGatewaySink {
    pub fn new(gateway_url: &str, recipient: &str, runtime: Handle) -> Self {
        Self {
            client: reqwest::Client::new(),
            gateway_url: gateway_url.to_string(),
            recipient: recipient.to_string(),
            runtime,
        }
    }
}

impl AlertSink for SmsGatewaySink {
    fn deliver(&self, alert: &StockAlert) {
        let client = self.client.clone();
        let url = self.gateway_url.clone();
        let recipient = self.recipient.clone();
        let body = alert.message();
        self.runtime.spawn(async move {
            let payload = OutboundSms {
                to: &recipient,
                body: &body,
            };
            let result = async {
                client
                    .post(&url)
                    .json(&payload)
                    .send()
                    .await?
                    .error_for_status()?;
                Ok::<_, reqwest::Error>(())
            }
            .await;
            match result {
                Ok(()) => tracing::debug!(to = %recipient, "sms dispatched"),
                Err(err) => tracing::warn!(%url, error = %err, "sms send failed"),
            }
        });
    }
}
