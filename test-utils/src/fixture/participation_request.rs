//! Participation request fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::participation_request;

/// Creates a PENDING request model with id `1` from user `2` on event `1`.
pub fn entity() -> participation_request::Model {
    participation_request::Model {
        id: 1,
        requester_id: 2,
        event_id: 1,
        created: Utc.with_ymd_and_hms(2026, 1, 2, 9, 30, 0).unwrap(),
        status: "PENDING".to_string(),
    }
}

/// Creates a request model with the given status string.
pub fn entity_with_status(status: &str) -> participation_request::Model {
    participation_request::Model {
        status: status.to_string(),
        ..entity()
    }
}
