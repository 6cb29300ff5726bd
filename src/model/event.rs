use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Publication state of an event. Requests may only target `Published` events.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventState {
    Pending,
    Published,
    Canceled,
}

/// State changes an initiator may request for their own unpublished event.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStateAction {
    SendToReview,
    CancelReview,
}

/// Moderation decisions an administrator may apply to a pending event.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdminStateAction {
    PublishEvent,
    RejectEvent,
}

fn default_request_moderation() -> bool {
    true
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventDto {
    pub title: String,
    pub annotation: String,
    pub description: String,
    pub category: i32,
    #[serde(with = "crate::model::datetime")]
    #[schema(value_type = String, example = "2026-11-01 18:00:00")]
    pub event_date: DateTime<Utc>,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub participant_limit: u32,
    #[serde(default = "default_request_moderation")]
    pub request_moderation: bool,
}

#[derive(Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventUserDto {
    pub title: Option<String>,
    pub annotation: Option<String>,
    pub description: Option<String>,
    pub category: Option<i32>,
    #[serde(default, deserialize_with = "crate::model::datetime::option::deserialize")]
    #[schema(value_type = Option<String>, example = "2026-11-01 18:00:00")]
    pub event_date: Option<DateTime<Utc>>,
    pub paid: Option<bool>,
    pub participant_limit: Option<u32>,
    pub request_moderation: Option<bool>,
    pub state_action: Option<UserStateAction>,
}

/// Administrator's changes to an event awaiting review. Every field is optional.
#[derive(Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventAdminDto {
    pub title: Option<String>,
    pub annotation: Option<String>,
    pub description: Option<String>,
    pub category: Option<i32>,
    #[serde(default, deserialize_with = "crate::model::datetime::option::deserialize")]
    #[schema(value_type = Option<String>, example = "2026-11-01 18:00:00")]
    pub event_date: Option<DateTime<Utc>>,
    pub paid: Option<bool>,
    pub participant_limit: Option<u32>,
    pub request_moderation: Option<bool>,
    pub state_action: Option<AdminStateAction>,
}

/// Filters of the public event search.
#[derive(Deserialize, Debug, Default, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PublicEventQuery {
    /// Case-insensitive text searched in title and annotation.
    pub text: Option<String>,
    /// Comma-separated category IDs.
    #[serde(default, deserialize_with = "crate::model::query::comma_separated")]
    #[param(value_type = Option<String>, example = "1,2")]
    pub categories: Option<Vec<i32>>,
    pub paid: Option<bool>,
    #[serde(default, deserialize_with = "crate::model::datetime::option::deserialize")]
    #[param(value_type = Option<String>, example = "2026-11-01 00:00:00")]
    pub range_start: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::model::datetime::option::deserialize")]
    #[param(value_type = Option<String>, example = "2026-12-01 00:00:00")]
    pub range_end: Option<DateTime<Utc>>,
    /// Only events with seats left.
    #[serde(default)]
    pub only_available: bool,
}

/// Filters of the administrator's event search.
#[derive(Deserialize, Debug, Default, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AdminEventQuery {
    /// Comma-separated initiator IDs.
    #[serde(default, deserialize_with = "crate::model::query::comma_separated")]
    #[param(value_type = Option<String>, example = "1,2")]
    pub users: Option<Vec<i32>>,
    /// Comma-separated states, e.g. `PENDING,PUBLISHED`.
    #[serde(default, deserialize_with = "crate::model::query::comma_separated")]
    #[param(value_type = Option<String>, example = "PENDING")]
    pub states: Option<Vec<EventState>>,
    /// Comma-separated category IDs.
    #[serde(default, deserialize_with = "crate::model::query::comma_separated")]
    #[param(value_type = Option<String>, example = "1,2")]
    pub categories: Option<Vec<i32>>,
    #[serde(default, deserialize_with = "crate::model::datetime::option::deserialize")]
    #[param(value_type = Option<String>, example = "2026-11-01 00:00:00")]
    pub range_start: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::model::datetime::option::deserialize")]
    #[param(value_type = Option<String>, example = "2026-12-01 00:00:00")]
    pub range_end: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: i32,
    pub title: String,
    pub annotation: String,
    pub description: String,
    pub category: i32,
    pub initiator: i32,
    #[serde(serialize_with = "crate::model::datetime::serialize")]
    #[schema(value_type = String)]
    pub event_date: DateTime<Utc>,
    #[serde(serialize_with = "crate::model::datetime::serialize")]
    #[schema(value_type = String)]
    pub created_on: DateTime<Utc>,
    #[serde(serialize_with = "crate::model::datetime::option::serialize")]
    #[schema(value_type = Option<String>)]
    pub published_on: Option<DateTime<Utc>>,
    pub paid: bool,
    pub participant_limit: u32,
    pub request_moderation: bool,
    pub confirmed_requests: u32,
    pub state: EventState,
}
