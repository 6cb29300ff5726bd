use thiserror::Error;

/// Internal issues with stored data indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A status column holds a value outside the known set.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown {kind} '{value}' stored in database")]
    UnknownStatus {
        /// Which column was being parsed, e.g. "event state"
        kind: &'static str,
        /// The value that failed to parse
        value: String,
    },

    /// A counter column holds a negative value.
    #[error("Negative {field} ({value}) stored for event {event_id}")]
    NegativeCounter {
        event_id: i32,
        field: &'static str,
        value: i32,
    },
}
