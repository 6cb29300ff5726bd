//! Event factory for creating test event entities.
//!
//! Events are created PUBLISHED by default since most admission tests need a
//! published event; use `state` to build pending or canceled events.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable ledger fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::event::EventFactory;
///
/// let event = EventFactory::new(&db, category.id, initiator.id)
///     .participant_limit(2)
///     .request_moderation(true)
///     .state("PENDING")
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    category_id: i32,
    initiator_id: i32,
    title: String,
    event_date: DateTime<Utc>,
    paid: bool,
    participant_limit: i32,
    request_moderation: bool,
    confirmed_requests: i32,
    state: String,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Event {id}"` where id is auto-incremented
    /// - event_date: 3 days from now
    /// - paid: `false`
    /// - participant_limit: `0` (unlimited)
    /// - request_moderation: `true`
    /// - confirmed_requests: `0`
    /// - state: `"PUBLISHED"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `category_id` - Category the event belongs to
    /// - `initiator_id` - User who owns the event
    pub fn new(db: &'a DatabaseConnection, category_id: i32, initiator_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            category_id,
            initiator_id,
            title: format!("Event {}", id),
            event_date: Utc::now() + Duration::days(3),
            paid: false,
            participant_limit: 0,
            request_moderation: true,
            confirmed_requests: 0,
            state: "PUBLISHED".to_string(),
        }
    }

    /// Sets the event title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the event date.
    pub fn event_date(mut self, event_date: DateTime<Utc>) -> Self {
        self.event_date = event_date;
        self
    }

    /// Sets whether participation is paid.
    pub fn paid(mut self, paid: bool) -> Self {
        self.paid = paid;
        self
    }

    /// Sets the participant limit (`0` means unlimited).
    pub fn participant_limit(mut self, participant_limit: i32) -> Self {
        self.participant_limit = participant_limit;
        self
    }

    /// Sets whether requests require moderation.
    pub fn request_moderation(mut self, request_moderation: bool) -> Self {
        self.request_moderation = request_moderation;
        self
    }

    /// Sets the confirmed request counter.
    pub fn confirmed_requests(mut self, confirmed_requests: i32) -> Self {
        self.confirmed_requests = confirmed_requests;
        self
    }

    /// Sets the event state (`PENDING`, `PUBLISHED` or `CANCELED`).
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Builds and inserts the event entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::event::Model)` - Created event entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let now = Utc::now();
        let published_on = (self.state == "PUBLISHED").then_some(now);

        entity::event::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            annotation: ActiveValue::Set("Test event annotation".to_string()),
            description: ActiveValue::Set("Test event description".to_string()),
            category_id: ActiveValue::Set(self.category_id),
            initiator_id: ActiveValue::Set(self.initiator_id),
            event_date: ActiveValue::Set(self.event_date),
            created_on: ActiveValue::Set(now),
            published_on: ActiveValue::Set(published_on),
            paid: ActiveValue::Set(self.paid),
            participant_limit: ActiveValue::Set(self.participant_limit),
            request_moderation: ActiveValue::Set(self.request_moderation),
            confirmed_requests: ActiveValue::Set(self.confirmed_requests),
            state: ActiveValue::Set(self.state),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a published, unlimited, moderated event.
///
/// Shorthand for `EventFactory::new(db, category_id, initiator_id).build().await`.
pub async fn create_event(
    db: &DatabaseConnection,
    category_id: i32,
    initiator_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, category_id, initiator_id)
        .build()
        .await
}
