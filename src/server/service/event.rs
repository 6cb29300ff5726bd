//! Event service for business logic.
//!
//! Events carry the capacity ledger that participation requests are admitted against.
//! This service creates events, lets initiators reconfigure them, moves them through
//! review and publication, and serves the public and administrative event lists.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::event::EventState,
    server::{
        data::{category::CategoryRepository, event::EventRepository, user::UserRepository},
        error::{admission::AdmissionError, AppError},
        model::event::{
            CreateEventParams, Event, EventFilter, PublishedEventFilter, UpdateEventParams,
        },
        service::event_lock::EventLocks,
    },
};

/// Minimum lead time for an event date set by its initiator.
const INITIATOR_LEAD_TIME_HOURS: i64 = 2;

/// Minimum lead time for an event date set by an administrator.
const ADMIN_LEAD_TIME_HOURS: i64 = 1;

/// Service providing business logic for event management.
pub struct EventService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a EventLocks,
}

impl<'a> EventService<'a> {
    /// Creates a new EventService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `locks` - Shared per-event locks, taken when a ledger field changes
    pub fn new(db: &'a DatabaseConnection, locks: &'a EventLocks) -> Self {
        Self { db, locks }
    }

    /// Creates an event awaiting review.
    ///
    /// # Returns
    /// - `Ok(Event)` - The new PENDING event with no confirmations
    /// - `Err(AppError::NotFound)` - Initiator or category does not exist
    /// - `Err(AppError::BadRequest)` - Event date is less than two hours away
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateEventParams) -> Result<Event, AppError> {
        check_event_date(params.event_date, INITIATOR_LEAD_TIME_HOURS)?;

        UserRepository::new(self.db)
            .find_by_id(params.initiator_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "User with id={} was not found",
                    params.initiator_id
                ))
            })?;

        CategoryRepository::new(self.db)
            .find_by_id(params.category_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Category with id={} was not found",
                    params.category_id
                ))
            })?;

        let event = EventRepository::new(self.db).create(params).await?;

        tracing::info!(
            "User {} created event {} with participant limit {}",
            event.initiator_id,
            event.id,
            event.participant_limit
        );

        Ok(Event::from_entity(event)?)
    }

    /// Applies an initiator's changes to an unpublished event.
    ///
    /// Runs under the event lock since the limit and moderation flag decide how
    /// concurrent requests are admitted.
    ///
    /// # Returns
    /// - `Ok(Event)` - The updated event
    /// - `Err(AppError::NotFound)` - Event missing, initiated by someone else, or the new
    ///   category does not exist
    /// - `Err(AppError::BadRequest)` - New event date is less than two hours away
    /// - `Err(AppError::AdmissionErr)` - Event is already published
    pub async fn update_by_initiator(
        &self,
        user_id: i32,
        event_id: i32,
        params: UpdateEventParams,
    ) -> Result<Event, AppError> {
        let _guard = self.locks.acquire(event_id).await;
        let txn = self.db.begin().await?;

        let repo = EventRepository::new(&txn);

        let event = repo
            .find_by_id_and_initiator(event_id, user_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Event with id={} was not found for user {}",
                    event_id, user_id
                ))
            })?;
        let event = Event::from_entity(event)?;

        if let Some(event_date) = params.event_date {
            check_event_date(event_date, INITIATOR_LEAD_TIME_HOURS)?;
        }

        if event.state == EventState::Published {
            return Err(AdmissionError::InvalidEventState {
                event_id,
                state: event.state.as_str().to_string(),
                expected: "PENDING or CANCELED".to_string(),
            }
            .into());
        }

        check_category(&txn, params.category_id).await?;

        let updated = repo.update(event_id, params).await?;

        txn.commit().await?;

        tracing::info!("User {} updated event {}", user_id, event_id);

        Ok(Event::from_entity(updated)?)
    }

    /// Edits an event awaiting review and optionally publishes or rejects it.
    ///
    /// # Arguments
    /// - `event_id` - Event to change
    /// - `params` - Field changes; `state` is PUBLISHED or CANCELED when an action was given
    ///
    /// # Returns
    /// - `Ok(Event)` - The event in its new state, with `published_on` set when published
    /// - `Err(AppError::NotFound)` - Event or new category does not exist
    /// - `Err(AppError::BadRequest)` - New event date is less than an hour away
    /// - `Err(AppError::AdmissionErr)` - Event is not PENDING
    pub async fn update_by_admin(
        &self,
        event_id: i32,
        params: UpdateEventParams,
    ) -> Result<Event, AppError> {
        let _guard = self.locks.acquire(event_id).await;
        let txn = self.db.begin().await?;

        let repo = EventRepository::new(&txn);

        let event = repo.find_by_id(event_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Event with id={} was not found", event_id))
        })?;
        let event = Event::from_entity(event)?;

        if let Some(event_date) = params.event_date {
            check_event_date(event_date, ADMIN_LEAD_TIME_HOURS)?;
        }

        if event.state != EventState::Pending {
            return Err(AdmissionError::InvalidEventState {
                event_id,
                state: event.state.as_str().to_string(),
                expected: EventState::Pending.as_str().to_string(),
            }
            .into());
        }

        check_category(&txn, params.category_id).await?;

        let state = params.state;
        let mut updated = repo.update(event_id, params).await?;

        if state == Some(EventState::Published) {
            updated = repo
                .update_state(event_id, EventState::Published, Some(Utc::now()))
                .await?;
        }

        txn.commit().await?;

        match state {
            Some(state) => tracing::info!("Event {} moved to {}", event_id, state.as_str()),
            None => tracing::info!("Administrator updated event {}", event_id),
        }

        Ok(Event::from_entity(updated)?)
    }

    /// Gets a published event for public display.
    ///
    /// # Returns
    /// - `Ok(Event)` - The published event
    /// - `Err(AppError::NotFound)` - Event missing or not published
    pub async fn get_published(&self, event_id: i32) -> Result<Event, AppError> {
        let event = EventRepository::new(self.db)
            .find_published_by_id(event_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Event with id={} was not found", event_id))
            })?;

        Ok(Event::from_entity(event)?)
    }

    /// Gets all events created by a user, ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Event>)` - The user's events, possibly empty
    /// - `Err(AppError::NotFound)` - User does not exist
    pub async fn get_user_events(&self, user_id: i32) -> Result<Vec<Event>, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id={} was not found", user_id)))?;

        let events = EventRepository::new(self.db)
            .find_by_initiator(user_id)
            .await?;

        to_events(events)
    }

    /// Gets one of a user's own events in any state.
    ///
    /// # Returns
    /// - `Ok(Event)` - The event
    /// - `Err(AppError::NotFound)` - Event missing or initiated by someone else
    pub async fn get_user_event(&self, user_id: i32, event_id: i32) -> Result<Event, AppError> {
        let event = EventRepository::new(self.db)
            .find_by_id_and_initiator(event_id, user_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Event with id={} was not found for user {}",
                    event_id, user_id
                ))
            })?;

        Ok(Event::from_entity(event)?)
    }

    /// Searches published events, latest event date first.
    ///
    /// # Returns
    /// - `Ok(Vec<Event>)` - Matching published events
    /// - `Err(AppError::BadRequest)` - Non-positive category ID or inverted date range
    pub async fn search_published(
        &self,
        filter: PublishedEventFilter,
    ) -> Result<Vec<Event>, AppError> {
        check_ids("categories", filter.category_ids.as_deref())?;
        check_range(filter.range_start, filter.range_end)?;

        let events = EventRepository::new(self.db)
            .search_published(&filter, Utc::now())
            .await?;

        tracing::debug!("Public event search matched {} events", events.len());

        to_events(events)
    }

    /// Searches events in any state for administrators, ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Event>)` - Matching events
    /// - `Err(AppError::BadRequest)` - Non-positive user or category ID, or inverted range
    pub async fn search(&self, filter: EventFilter) -> Result<Vec<Event>, AppError> {
        check_ids("users", filter.initiator_ids.as_deref())?;
        check_ids("categories", filter.category_ids.as_deref())?;
        check_range(filter.range_start, filter.range_end)?;

        let events = EventRepository::new(self.db).search(&filter).await?;

        to_events(events)
    }
}

/// Requires an event date at least `hours` after now.
fn check_event_date(event_date: DateTime<Utc>, hours: i64) -> Result<(), AppError> {
    let earliest = Utc::now() + Duration::hours(hours);

    if event_date < earliest {
        return Err(AppError::BadRequest(format!(
            "Event date must be at least {} hours from now",
            hours
        )));
    }

    Ok(())
}

/// Requires a new category, when given, to exist.
async fn check_category<C: ConnectionTrait>(
    db: &C,
    category_id: Option<i32>,
) -> Result<(), AppError> {
    let Some(category_id) = category_id else {
        return Ok(());
    };

    CategoryRepository::new(db)
        .find_by_id(category_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Category with id={} was not found", category_id))
        })?;

    Ok(())
}

fn check_ids(name: &str, ids: Option<&[i32]>) -> Result<(), AppError> {
    match ids.and_then(|ids| ids.iter().find(|id| **id <= 0)) {
        Some(id) => Err(AppError::BadRequest(format!(
            "Invalid value {} in {}",
            id, name
        ))),
        None => Ok(()),
    }
}

fn check_range(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<(), AppError> {
    match (start, end) {
        (Some(start), Some(end)) if start > end => Err(AppError::BadRequest(
            "rangeStart must not be after rangeEnd".to_string(),
        )),
        _ => Ok(()),
    }
}

fn to_events(events: Vec<entity::event::Model>) -> Result<Vec<Event>, AppError> {
    events
        .into_iter()
        .map(|event| Event::from_entity(event).map_err(AppError::from))
        .collect()
}
