//! Hit record sent to the statistics service.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Application name reported with every hit.
pub const APP_NAME: &str = "ewm-main-service";

/// One served request, as the statistics service's `/hit` endpoint expects it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointHit {
    pub app: String,
    pub uri: String,
    pub ip: String,
    /// `YYYY-MM-DD HH:MM:SS` in UTC.
    pub timestamp: String,
}

impl EndpointHit {
    /// Builds a hit for this application.
    ///
    /// # Arguments
    /// - `uri` - Request path that was served
    /// - `ip` - Client address
    /// - `at` - Time the request was served
    pub fn new(uri: impl Into<String>, ip: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            app: APP_NAME.to_string(),
            uri: uri.into(),
            ip: ip.into(),
            timestamp: crate::model::datetime::format(&at),
        }
    }
}
