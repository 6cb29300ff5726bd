//! Client for the hit-statistics service.
//!
//! Hits are posted in the background after a public event read has been served. A
//! failing or unreachable statistics service never affects the response.

use chrono::Utc;

use crate::server::model::stats::EndpointHit;

/// Write-only sink for endpoint hits.
///
/// Cloning is cheap: `reqwest::Client` shares its connection pool between clones.
#[derive(Clone)]
pub struct StatsClient {
    http: reqwest::Client,
    /// Base URL of the statistics service, e.g. `http://stats-server:9090`.
    base_url: Option<String>,
}

impl StatsClient {
    /// Creates a new StatsClient.
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client
    /// - `base_url` - Statistics service URL; `None` disables posting
    pub fn new(http: reqwest::Client, base_url: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.map(|url| url.trim_end_matches('/').to_string()),
        }
    }

    /// Client that only logs hits.
    pub fn disabled() -> Self {
        Self::new(reqwest::Client::new(), None)
    }

    /// URL of the `/hit` endpoint, if a statistics service is configured.
    pub fn hit_url(&self) -> Option<String> {
        self.base_url.as_ref().map(|base| format!("{}/hit", base))
    }

    /// Records that `uri` was served to `ip`.
    ///
    /// Returns immediately; the POST runs on a spawned task and failures are logged.
    pub fn record_hit(&self, uri: &str, ip: &str) {
        let hit = EndpointHit::new(uri, ip, Utc::now());

        let Some(url) = self.hit_url() else {
            tracing::debug!("Statistics disabled, dropping hit for {}", hit.uri);
            return;
        };

        let http = self.http.clone();
        tokio::spawn(async move {
            let result = http
                .post(&url)
                .json(&hit)
                .send()
                .await
                .and_then(|response| response.error_for_status());

            match result {
                Ok(_) => tracing::debug!("Recorded hit for {}", hit.uri),
                Err(e) => tracing::warn!("Failed to record hit for {} at {}: {}", hit.uri, url, e),
            }
        });
    }
}
