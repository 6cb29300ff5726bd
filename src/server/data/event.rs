//! Event data repository.
//!
//! Besides plain CRUD this repository persists the capacity ledger: the confirmed
//! counter is only ever written through `save_confirmed_requests`, which the request
//! service calls while holding the event lock inside a transaction.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    model::event::EventState,
    server::model::event::{
        CreateEventParams, EventFilter, PublishedEventFilter, UpdateEventParams,
    },
};

/// Repository providing database operations for events and their ledgers.
pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    /// Creates a new EventRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new PENDING event with a zero confirmed counter.
    ///
    /// # Arguments
    /// - `params` - Event fields including initiator and category
    ///
    /// # Returns
    /// - `Ok(entity::event::Model)` - The created event
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateEventParams) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            title: ActiveValue::Set(params.title),
            annotation: ActiveValue::Set(params.annotation),
            description: ActiveValue::Set(params.description),
            category_id: ActiveValue::Set(params.category_id),
            initiator_id: ActiveValue::Set(params.initiator_id),
            event_date: ActiveValue::Set(params.event_date),
            created_on: ActiveValue::Set(Utc::now()),
            published_on: ActiveValue::Set(None),
            paid: ActiveValue::Set(params.paid),
            participant_limit: ActiveValue::Set(params.participant_limit),
            request_moderation: ActiveValue::Set(params.request_moderation),
            confirmed_requests: ActiveValue::Set(0),
            state: ActiveValue::Set(EventState::Pending.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds an event by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find_by_id(id).one(self.db).await
    }

    /// Finds an event by ID only if it was created by the given user.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Event exists and belongs to `initiator_id`
    /// - `Ok(None)` - Event missing or owned by someone else
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id_and_initiator(
        &self,
        id: i32,
        initiator_id: i32,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find_by_id(id)
            .filter(entity::event::Column::InitiatorId.eq(initiator_id))
            .one(self.db)
            .await
    }

    /// Finds an event by ID only if it is published.
    pub async fn find_published_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find_by_id(id)
            .filter(entity::event::Column::State.eq(EventState::Published.as_str()))
            .one(self.db)
            .await
    }

    /// Gets all events created by a user, ordered by ID.
    pub async fn find_by_initiator(
        &self,
        initiator_id: i32,
    ) -> Result<Vec<entity::event::Model>, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::InitiatorId.eq(initiator_id))
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await
    }

    /// Searches published events, latest event date first.
    ///
    /// Without a date range only events after `now` are returned.
    ///
    /// # Arguments
    /// - `filter` - Text, category, paid, date range and availability filters
    /// - `now` - Lower bound on the event date when no range is given
    pub async fn search_published(
        &self,
        filter: &PublishedEventFilter,
        now: DateTime<Utc>,
    ) -> Result<Vec<entity::event::Model>, DbErr> {
        let mut condition = Condition::all()
            .add(entity::event::Column::State.eq(EventState::Published.as_str()))
            .add_option(filter.text.as_ref().map(|text| {
                Condition::any()
                    .add(entity::event::Column::Title.contains(text))
                    .add(entity::event::Column::Annotation.contains(text))
            }))
            .add_option(
                filter
                    .category_ids
                    .as_ref()
                    .map(|ids| entity::event::Column::CategoryId.is_in(ids.iter().copied())),
            )
            .add_option(filter.paid.map(|paid| entity::event::Column::Paid.eq(paid)));

        condition = match (filter.range_start, filter.range_end) {
            (None, None) => condition.add(entity::event::Column::EventDate.gt(now)),
            (start, end) => condition
                .add_option(start.map(|start| entity::event::Column::EventDate.gte(start)))
                .add_option(end.map(|end| entity::event::Column::EventDate.lte(end))),
        };

        if filter.only_available {
            condition = condition.add(
                Condition::any()
                    .add(entity::event::Column::ParticipantLimit.eq(0))
                    .add(
                        Expr::col(entity::event::Column::ConfirmedRequests)
                            .lt(Expr::col(entity::event::Column::ParticipantLimit)),
                    ),
            );
        }

        entity::prelude::Event::find()
            .filter(condition)
            .order_by_desc(entity::event::Column::EventDate)
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await
    }

    /// Searches events in any state, ordered by ID. `None` filters match everything.
    pub async fn search(&self, filter: &EventFilter) -> Result<Vec<entity::event::Model>, DbErr> {
        let condition = Condition::all()
            .add_option(
                filter
                    .initiator_ids
                    .as_ref()
                    .map(|ids| entity::event::Column::InitiatorId.is_in(ids.iter().copied())),
            )
            .add_option(filter.states.as_ref().map(|states| {
                entity::event::Column::State.is_in(states.iter().map(|state| state.as_str()))
            }))
            .add_option(
                filter
                    .category_ids
                    .as_ref()
                    .map(|ids| entity::event::Column::CategoryId.is_in(ids.iter().copied())),
            )
            .add_option(
                filter
                    .range_start
                    .map(|start| entity::event::Column::EventDate.gte(start)),
            )
            .add_option(
                filter
                    .range_end
                    .map(|end| entity::event::Column::EventDate.lte(end)),
            );

        entity::prelude::Event::find()
            .filter(condition)
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await
    }

    /// True when at least one event belongs to the category.
    pub async fn exists_for_category(&self, category_id: i32) -> Result<bool, DbErr> {
        let event = entity::prelude::Event::find()
            .filter(entity::event::Column::CategoryId.eq(category_id))
            .one(self.db)
            .await?;

        Ok(event.is_some())
    }

    /// Applies a partial update. Fields left as `None` are not written.
    ///
    /// # Returns
    /// - `Ok(entity::event::Model)` - The updated event
    /// - `Err(DbErr::RecordNotFound)` - No event with that ID
    pub async fn update(
        &self,
        id: i32,
        params: UpdateEventParams,
    ) -> Result<entity::event::Model, DbErr> {
        let event = entity::prelude::Event::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Event with id {} not found", id)))?;

        let mut active_model: entity::event::ActiveModel = event.into();

        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(annotation) = params.annotation {
            active_model.annotation = ActiveValue::Set(annotation);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(category_id) = params.category_id {
            active_model.category_id = ActiveValue::Set(category_id);
        }
        if let Some(event_date) = params.event_date {
            active_model.event_date = ActiveValue::Set(event_date);
        }
        if let Some(paid) = params.paid {
            active_model.paid = ActiveValue::Set(paid);
        }
        if let Some(participant_limit) = params.participant_limit {
            active_model.participant_limit = ActiveValue::Set(participant_limit);
        }
        if let Some(request_moderation) = params.request_moderation {
            active_model.request_moderation = ActiveValue::Set(request_moderation);
        }
        if let Some(state) = params.state {
            active_model.state = ActiveValue::Set(state.as_str().to_string());
        }

        active_model.update(self.db).await
    }

    /// Moves an event to a new state, stamping the publication time when given.
    pub async fn update_state(
        &self,
        id: i32,
        state: EventState,
        published_on: Option<DateTime<Utc>>,
    ) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            id: ActiveValue::Unchanged(id),
            state: ActiveValue::Set(state.as_str().to_string()),
            published_on: ActiveValue::Set(published_on),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Writes the confirmed counter of an event's ledger.
    ///
    /// # Arguments
    /// - `id` - Event ID
    /// - `confirmed_requests` - New counter value
    ///
    /// # Returns
    /// - `Ok(entity::event::Model)` - The updated event
    /// - `Err(DbErr)` - Database error, `RecordNotFound` if the event vanished
    pub async fn save_confirmed_requests(
        &self,
        id: i32,
        confirmed_requests: i32,
    ) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            id: ActiveValue::Unchanged(id),
            confirmed_requests: ActiveValue::Set(confirmed_requests),
            ..Default::default()
        }
        .update(self.db)
        .await
    }
}
