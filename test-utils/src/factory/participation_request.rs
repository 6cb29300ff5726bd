//! Participation request factory.
//!
//! Inserts request rows directly, bypassing admission control, so tests can set up
//! arbitrary status mixes on an event.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test participation requests.
pub struct ParticipationRequestFactory<'a> {
    db: &'a DatabaseConnection,
    requester_id: i32,
    event_id: i32,
    status: String,
}

impl<'a> ParticipationRequestFactory<'a> {
    /// Creates a new factory for a PENDING request.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `requester_id` - User submitting the request
    /// - `event_id` - Event the request targets
    pub fn new(db: &'a DatabaseConnection, requester_id: i32, event_id: i32) -> Self {
        Self {
            db,
            requester_id,
            event_id,
            status: "PENDING".to_string(),
        }
    }

    /// Sets the request status (`PENDING`, `CONFIRMED`, `REJECTED` or `CANCELED`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the request entity into the database.
    pub async fn build(self) -> Result<entity::participation_request::Model, DbErr> {
        entity::participation_request::ActiveModel {
            id: ActiveValue::NotSet,
            requester_id: ActiveValue::Set(self.requester_id),
            event_id: ActiveValue::Set(self.event_id),
            created: ActiveValue::Set(Utc::now()),
            status: ActiveValue::Set(self.status),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a PENDING request for the requester on the event.
pub async fn create_request(
    db: &DatabaseConnection,
    requester_id: i32,
    event_id: i32,
) -> Result<entity::participation_request::Model, DbErr> {
    ParticipationRequestFactory::new(db, requester_id, event_id)
        .build()
        .await
}
