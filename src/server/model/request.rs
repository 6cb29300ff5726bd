//! Participation request domain models.
//!
//! A request moves through `PENDING -> {CONFIRMED, REJECTED, CANCELED}` and
//! `CONFIRMED -> CANCELED`. REJECTED and CANCELED are terminal and nothing returns
//! to PENDING.

use chrono::{DateTime, Utc};

use crate::{
    model::request::{
        EventRequestStatusUpdateResultDto, ParticipationRequestDto, RequestDecision,
        RequestStatus,
    },
    server::error::internal::InternalError,
};

impl RequestStatus {
    /// Value stored in the `participation_request.status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Rejected => "REJECTED",
            Self::Canceled => "CANCELED",
        }
    }

    /// Parses a stored status value.
    pub fn parse(value: &str) -> Result<Self, InternalError> {
        match value {
            "PENDING" => Ok(Self::Pending),
            "CONFIRMED" => Ok(Self::Confirmed),
            "REJECTED" => Ok(Self::Rejected),
            "CANCELED" => Ok(Self::Canceled),
            other => Err(InternalError::UnknownStatus {
                kind: "request status",
                value: other.to_string(),
            }),
        }
    }

    pub fn can_transition_to(&self, next: RequestStatus) -> bool {
        matches!(
            (self, next),
            (
                Self::Pending,
                Self::Confirmed | Self::Rejected | Self::Canceled
            ) | (Self::Confirmed, Self::Canceled)
        )
    }
}

impl From<RequestDecision> for RequestStatus {
    fn from(decision: RequestDecision) -> Self {
        match decision {
            RequestDecision::Confirmed => Self::Confirmed,
            RequestDecision::Rejected => Self::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticipationRequest {
    pub id: i32,
    pub requester_id: i32,
    pub event_id: i32,
    pub created: DateTime<Utc>,
    pub status: RequestStatus,
}

impl ParticipationRequest {
    /// Converts an entity model to a request domain model at the repository boundary.
    pub fn from_entity(
        entity: entity::participation_request::Model,
    ) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            requester_id: entity.requester_id,
            event_id: entity.event_id,
            created: entity.created,
            status: RequestStatus::parse(&entity.status)?,
        })
    }

    /// Converts a list of entity models, failing on the first unknown status.
    pub fn from_entities(
        entities: Vec<entity::participation_request::Model>,
    ) -> Result<Vec<Self>, InternalError> {
        entities.into_iter().map(Self::from_entity).collect()
    }

    pub fn into_dto(self) -> ParticipationRequestDto {
        ParticipationRequestDto {
            id: self.id,
            created: self.created,
            event: self.event_id,
            requester: self.requester_id,
            status: self.status,
        }
    }
}

/// Status change decided for one request during a bulk update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub request_id: i32,
    pub status: RequestStatus,
}

/// Confirmed/rejected partition of an event's requests after a bulk update.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusUpdateResult {
    pub confirmed: Vec<ParticipationRequest>,
    pub rejected: Vec<ParticipationRequest>,
}

impl StatusUpdateResult {
    pub fn into_dto(self) -> EventRequestStatusUpdateResultDto {
        EventRequestStatusUpdateResultDto {
            confirmed_requests: self.confirmed.into_iter().map(|r| r.into_dto()).collect(),
            rejected_requests: self.rejected.into_iter().map(|r| r.into_dto()).collect(),
        }
    }
}
