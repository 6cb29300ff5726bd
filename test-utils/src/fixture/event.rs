//! Event fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::event;

/// Default test event title.
pub const DEFAULT_TITLE: &str = "Test Event";

/// Default test event id.
pub const DEFAULT_ID: i32 = 1;

/// Default initiator id.
pub const DEFAULT_INITIATOR_ID: i32 = 1;

/// Default category id.
pub const DEFAULT_CATEGORY_ID: i32 = 1;

/// Creates a published, unlimited, moderated event model.
///
/// # Default Values
/// - id: `1`
/// - participant_limit: `0`
/// - request_moderation: `true`
/// - confirmed_requests: `0`
/// - state: `"PUBLISHED"`
///
/// # Example
///
/// ```rust,ignore
/// let event = fixture::event::entity();
/// assert_eq!(event.state, "PUBLISHED");
/// ```
pub fn entity() -> event::Model {
    let created_on = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();

    event::Model {
        id: DEFAULT_ID,
        title: DEFAULT_TITLE.to_string(),
        annotation: "Test event annotation".to_string(),
        description: "Test event description".to_string(),
        category_id: DEFAULT_CATEGORY_ID,
        initiator_id: DEFAULT_INITIATOR_ID,
        event_date: Utc.with_ymd_and_hms(2026, 2, 1, 18, 0, 0).unwrap(),
        created_on,
        published_on: Some(created_on),
        paid: false,
        participant_limit: 0,
        request_moderation: true,
        confirmed_requests: 0,
        state: "PUBLISHED".to_string(),
    }
}

/// Creates an event model with the given ledger values.
///
/// # Arguments
/// - `participant_limit` - Participant limit, `0` meaning unlimited
/// - `request_moderation` - Whether requests need moderation
/// - `confirmed_requests` - Current confirmed counter
pub fn entity_with_capacity(
    participant_limit: i32,
    request_moderation: bool,
    confirmed_requests: i32,
) -> event::Model {
    event::Model {
        participant_limit,
        request_moderation,
        confirmed_requests,
        ..entity()
    }
}
