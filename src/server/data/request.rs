//! Participation request data repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::{model::request::RequestStatus, server::model::request::StatusChange};

/// Repository providing database operations for participation requests.
pub struct ParticipationRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParticipationRequestRepository<'a, C> {
    /// Creates a new ParticipationRequestRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new request.
    ///
    /// # Arguments
    /// - `requester_id` - User submitting the request
    /// - `event_id` - Target event
    /// - `status` - Initial status decided by admission control
    /// - `created` - Creation timestamp, never changed afterwards
    pub async fn create(
        &self,
        requester_id: i32,
        event_id: i32,
        status: RequestStatus,
        created: DateTime<Utc>,
    ) -> Result<entity::participation_request::Model, DbErr> {
        entity::participation_request::ActiveModel {
            requester_id: ActiveValue::Set(requester_id),
            event_id: ActiveValue::Set(event_id),
            created: ActiveValue::Set(created),
            status: ActiveValue::Set(status.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::participation_request::Model>, DbErr> {
        entity::prelude::ParticipationRequest::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets all requests submitted by a user, oldest first.
    pub async fn find_by_requester(
        &self,
        requester_id: i32,
    ) -> Result<Vec<entity::participation_request::Model>, DbErr> {
        entity::prelude::ParticipationRequest::find()
            .filter(entity::participation_request::Column::RequesterId.eq(requester_id))
            .order_by_asc(entity::participation_request::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all requests for an event, oldest first.
    pub async fn find_by_event(
        &self,
        event_id: i32,
    ) -> Result<Vec<entity::participation_request::Model>, DbErr> {
        entity::prelude::ParticipationRequest::find()
            .filter(entity::participation_request::Column::EventId.eq(event_id))
            .order_by_asc(entity::participation_request::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all requests for an event in the given status, oldest first.
    pub async fn find_by_event_and_status(
        &self,
        event_id: i32,
        status: RequestStatus,
    ) -> Result<Vec<entity::participation_request::Model>, DbErr> {
        entity::prelude::ParticipationRequest::find()
            .filter(entity::participation_request::Column::EventId.eq(event_id))
            .filter(entity::participation_request::Column::Status.eq(status.as_str()))
            .order_by_asc(entity::participation_request::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the requests with the given IDs. Unknown IDs are skipped and the result
    /// is ordered by ID, not by the order of `ids`.
    pub async fn find_all_by_ids(
        &self,
        ids: &[i32],
    ) -> Result<Vec<entity::participation_request::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::ParticipationRequest::find()
            .filter(entity::participation_request::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::participation_request::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds the user's non-canceled request for an event, if any.
    pub async fn find_active_by_requester_and_event(
        &self,
        requester_id: i32,
        event_id: i32,
    ) -> Result<Option<entity::participation_request::Model>, DbErr> {
        entity::prelude::ParticipationRequest::find()
            .filter(entity::participation_request::Column::RequesterId.eq(requester_id))
            .filter(entity::participation_request::Column::EventId.eq(event_id))
            .filter(
                entity::participation_request::Column::Status
                    .ne(RequestStatus::Canceled.as_str()),
            )
            .one(self.db)
            .await
    }

    /// Sets the status of a single request.
    pub async fn update_status(
        &self,
        id: i32,
        status: RequestStatus,
    ) -> Result<entity::participation_request::Model, DbErr> {
        entity::participation_request::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(status.as_str().to_string()),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Writes a batch of status changes.
    ///
    /// Changes are grouped by target status and written with one `UPDATE ... WHERE id IN`
    /// per status, so a bulk confirm/reject costs at most two statements.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated
    /// - `Err(DbErr)` - Database error during update
    pub async fn save_statuses(&self, changes: &[StatusChange]) -> Result<u64, DbErr> {
        let mut updated = 0;

        for status in [
            RequestStatus::Confirmed,
            RequestStatus::Rejected,
            RequestStatus::Canceled,
            RequestStatus::Pending,
        ] {
            let ids: Vec<i32> = changes
                .iter()
                .filter(|change| change.status == status)
                .map(|change| change.request_id)
                .collect();

            if ids.is_empty() {
                continue;
            }

            let result = entity::prelude::ParticipationRequest::update_many()
                .col_expr(
                    entity::participation_request::Column::Status,
                    Expr::value(status.as_str()),
                )
                .filter(entity::participation_request::Column::Id.is_in(ids))
                .exec(self.db)
                .await?;

            updated += result.rows_affected;
        }

        Ok(updated)
    }
}
