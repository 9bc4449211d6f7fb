//! SOARCA backend health check

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use soarca_gui_core::traits::HealthProbe;
use soarca_gui_core::types::BackendStatus;
use soarca_gui_core::{CoreError, CoreResult};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use super::BackendEvent;

/// Expected body of `GET {base}/status/ping`
const PONG: &str = "pong";

/// Status for a ping response body
fn status_from_body(body: &str) -> BackendStatus {
    if body.trim() == PONG {
        BackendStatus::Ok
    } else {
        BackendStatus::Error
    }
}

/// `GET {base}/status/ping`, expecting `pong`
pub struct HttpHealthProbe {
    client: reqwest::Client,
    base_uri: Option<String>,
}

impl HttpHealthProbe {
    pub fn new(base_uri: Option<String>) -> CoreResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| {
                log::error!("Failed to build the health check HTTP client: {e}");
                CoreError::NetworkError(e.to_string())
            })?;
        Ok(Self { client, base_uri })
    }
}

#[async_trait]
impl HealthProbe for HttpHealthProbe {
    async fn ping(&self) -> BackendStatus {
        let Some(base) = self.base_uri.as_deref() else {
            log::error!("SOARCA_URI is not configured");
            return BackendStatus::Error;
        };
        let url = format!("{}/status/ping", base.trim_end_matches('/'));

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Ping to {url} failed: {e}");
                return BackendStatus::Error;
            }
        };
        if !response.status().is_success() {
            log::warn!("Ping to {url} returned HTTP {}", response.status());
            return BackendStatus::Error;
        }
        match response.text().await {
            Ok(body) => status_from_body(&body),
            Err(e) => {
                log::warn!("Reading ping response failed: {e}");
                BackendStatus::Error
            }
        }
    }
}

/// Probe now and then every `interval`, reporting each result on `events`
///
/// Stops when the receiving side is dropped.
pub fn spawn_health_monitor(
    runtime: &tokio::runtime::Handle,
    probe: Arc<dyn HealthProbe>,
    interval: Duration,
    events: UnboundedSender<BackendEvent>,
) -> JoinHandle<()> {
    runtime.spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let status = probe.ping().await;
            if events.send(BackendEvent::Health(status)).is_err() {
                break;
            }
        }
    })
}
