//! Event domain models and parameters.
//!
//! Provides the event domain model with its parsed publication state, the parameter
//! types for creating, updating and searching events, and the state string conversions
//! used at the repository boundary.

use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::{
    model::event::{
        AdminEventQuery, AdminStateAction, CreateEventDto, EventDto, EventState,
        PublicEventQuery, UpdateEventAdminDto, UpdateEventUserDto, UserStateAction,
    },
    server::{error::internal::InternalError, model::ledger::CapacityLedger},
};

impl EventState {
    /// Value stored in the `event.state` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Published => "PUBLISHED",
            Self::Canceled => "CANCELED",
        }
    }

    /// Parses a stored `event.state` value.
    ///
    /// # Returns
    /// - `Ok(EventState)` - Known state
    /// - `Err(InternalError::UnknownStatus)` - Value outside the known set
    pub fn parse(value: &str) -> Result<Self, InternalError> {
        match value {
            "PENDING" => Ok(Self::Pending),
            "PUBLISHED" => Ok(Self::Published),
            "CANCELED" => Ok(Self::Canceled),
            other => Err(InternalError::UnknownStatus {
                kind: "event state",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for EventState {
    type Err = InternalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl UserStateAction {
    /// State the event moves to when its initiator applies this action.
    pub fn target_state(&self) -> EventState {
        match self {
            Self::SendToReview => EventState::Pending,
            Self::CancelReview => EventState::Canceled,
        }
    }
}

impl AdminStateAction {
    /// State a pending event moves to when an administrator applies this action.
    pub fn target_state(&self) -> EventState {
        match self {
            Self::PublishEvent => EventState::Published,
            Self::RejectEvent => EventState::Canceled,
        }
    }
}

/// Event with its capacity ledger and parsed state.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub annotation: String,
    pub description: String,
    pub category_id: i32,
    pub initiator_id: i32,
    pub event_date: DateTime<Utc>,
    pub created_on: DateTime<Utc>,
    pub published_on: Option<DateTime<Utc>>,
    pub paid: bool,
    pub ledger: CapacityLedger,
    pub state: EventState,
}

impl Event {
    /// Converts an entity model to an event domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Event)` - The converted event
    /// - `Err(InternalError)` - Unknown state string or negative ledger values
    pub fn from_entity(entity: entity::event::Model) -> Result<Self, InternalError> {
        let ledger = CapacityLedger::from_entity(&entity)?;
        let state = EventState::parse(&entity.state)?;

        Ok(Self {
            id: entity.id,
            title: entity.title,
            annotation: entity.annotation,
            description: entity.description,
            category_id: entity.category_id,
            initiator_id: entity.initiator_id,
            event_date: entity.event_date,
            created_on: entity.created_on,
            published_on: entity.published_on,
            paid: entity.paid,
            ledger,
            state,
        })
    }

    /// Converts the event domain model to a DTO for API responses.
    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            title: self.title,
            annotation: self.annotation,
            description: self.description,
            category: self.category_id,
            initiator: self.initiator_id,
            event_date: self.event_date,
            created_on: self.created_on,
            published_on: self.published_on,
            paid: self.paid,
            participant_limit: self.ledger.participant_limit.unsigned_abs(),
            request_moderation: self.ledger.request_moderation,
            confirmed_requests: self.ledger.confirmed_requests.unsigned_abs(),
            state: self.state,
        }
    }
}

/// Parameters for creating an event. New events start PENDING with no confirmations.
#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub initiator_id: i32,
    pub category_id: i32,
    pub title: String,
    pub annotation: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub paid: bool,
    pub participant_limit: i32,
    pub request_moderation: bool,
}

impl CreateEventParams {
    pub fn from_dto(initiator_id: i32, dto: CreateEventDto) -> Self {
        Self {
            initiator_id,
            category_id: dto.category,
            title: dto.title,
            annotation: dto.annotation,
            description: dto.description,
            event_date: dto.event_date,
            paid: dto.paid,
            participant_limit: clamp_limit(dto.participant_limit),
            request_moderation: dto.request_moderation,
        }
    }
}

/// Partial update applied by the event's initiator or an administrator. `None` leaves a
/// field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateEventParams {
    pub title: Option<String>,
    pub annotation: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<i32>,
    pub event_date: Option<DateTime<Utc>>,
    pub paid: Option<bool>,
    pub participant_limit: Option<i32>,
    pub request_moderation: Option<bool>,
    pub state: Option<EventState>,
}

impl UpdateEventParams {
    pub fn from_dto(dto: UpdateEventUserDto) -> Self {
        Self {
            title: dto.title,
            annotation: dto.annotation,
            description: dto.description,
            category_id: dto.category,
            event_date: dto.event_date,
            paid: dto.paid,
            participant_limit: dto.participant_limit.map(clamp_limit),
            request_moderation: dto.request_moderation,
            state: dto.state_action.map(|action| action.target_state()),
        }
    }

    pub fn from_admin_dto(dto: UpdateEventAdminDto) -> Self {
        Self {
            title: dto.title,
            annotation: dto.annotation,
            description: dto.description,
            category_id: dto.category,
            event_date: dto.event_date,
            paid: dto.paid,
            participant_limit: dto.participant_limit.map(clamp_limit),
            request_moderation: dto.request_moderation,
            state: dto.state_action.map(|action| action.target_state()),
        }
    }
}

/// Filters of the public search. Only PUBLISHED events are ever returned.
#[derive(Debug, Clone, Default)]
pub struct PublishedEventFilter {
    pub text: Option<String>,
    pub category_ids: Option<Vec<i32>>,
    pub paid: Option<bool>,
    pub range_start: Option<DateTime<Utc>>,
    pub range_end: Option<DateTime<Utc>>,
    pub only_available: bool,
}

impl PublishedEventFilter {
    pub fn from_query(query: PublicEventQuery) -> Self {
        Self {
            text: query.text.filter(|text| !text.trim().is_empty()),
            category_ids: query.categories,
            paid: query.paid,
            range_start: query.range_start,
            range_end: query.range_end,
            only_available: query.only_available,
        }
    }
}

/// Filters of the administrator's search. `None` matches everything.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub initiator_ids: Option<Vec<i32>>,
    pub states: Option<Vec<EventState>>,
    pub category_ids: Option<Vec<i32>>,
    pub range_start: Option<DateTime<Utc>>,
    pub range_end: Option<DateTime<Utc>>,
}

impl EventFilter {
    pub fn from_query(query: AdminEventQuery) -> Self {
        Self {
            initiator_ids: query.users,
            states: query.states,
            category_ids: query.categories,
            range_start: query.range_start,
            range_end: query.range_end,
        }
    }
}

fn clamp_limit(limit: u32) -> i32 {
    i32::try_from(limit).unwrap_or(i32::MAX)
}
