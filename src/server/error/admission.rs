use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Business rule violations raised by participation request admission and event
/// state management.
///
/// These are never retried: each one means the requested change is not allowed
/// in the current state, not that something failed transiently.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AdmissionError {
    /// The user already holds a non-canceled request for the event.
    #[error("User {user_id} already has an active request for event {event_id}")]
    DuplicateRequest { user_id: i32, event_id: i32 },

    /// A new request was submitted for an event whose participant limit is met.
    #[error("Event {event_id} has reached its participant limit of {limit}")]
    CapacityExceeded { event_id: i32, limit: i32 },

    /// A bulk status update was issued for an event whose participant limit is met.
    #[error("The participant limit of {limit} has been reached for event {event_id}")]
    CapacityReached { event_id: i32, limit: i32 },

    /// The event is not in a state that allows the operation.
    #[error("Event {event_id} is {state}, expected {expected}")]
    InvalidEventState {
        event_id: i32,
        state: String,
        expected: String,
    },

    /// The event's initiator tried to apply to their own event.
    #[error("Initiator {user_id} cannot request participation in own event {event_id}")]
    InitiatorRequest { user_id: i32, event_id: i32 },

    /// Only pending or confirmed requests can be canceled.
    #[error("Request {request_id} is {status} and cannot be canceled")]
    RequestNotCancelable { request_id: i32, status: String },
}

/// Converts admission errors into 409 Conflict responses carrying the rule message.
impl IntoResponse for AdmissionError {
    fn into_response(self) -> Response {
        tracing::debug!("Admission rule violated: {}", self);

        (
            StatusCode::CONFLICT,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
