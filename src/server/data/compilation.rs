//! Compilation data repository.
//!
//! Compilations link to events through the `compilation_event` join table. Linked
//! events are always returned ordered by event ID.

use std::collections::BTreeSet;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::compilation::UpdateCompilationParams;

pub struct CompilationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CompilationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        title: String,
        pinned: bool,
    ) -> Result<entity::compilation::Model, DbErr> {
        entity::compilation::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(title),
            pinned: ActiveValue::Set(pinned),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::compilation::Model>, DbErr> {
        entity::prelude::Compilation::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets compilations with their linked events, ordered by compilation ID.
    ///
    /// # Arguments
    /// - `pinned` - Only compilations with this flag, or all when `None`
    pub async fn find_all_with_events(
        &self,
        pinned: Option<bool>,
    ) -> Result<Vec<(entity::compilation::Model, Vec<entity::event::Model>)>, DbErr> {
        let mut query = entity::prelude::Compilation::find();
        if let Some(pinned) = pinned {
            query = query.filter(entity::compilation::Column::Pinned.eq(pinned));
        }

        query
            .find_with_related(entity::prelude::Event)
            .order_by_asc(entity::compilation::Column::Id)
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the events linked to a compilation, ordered by event ID.
    pub async fn find_events(
        &self,
        compilation: &entity::compilation::Model,
    ) -> Result<Vec<entity::event::Model>, DbErr> {
        compilation
            .find_related(entity::prelude::Event)
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies a partial update to title and pinned flag. Linked events are untouched.
    pub async fn update(
        &self,
        compilation: entity::compilation::Model,
        params: &UpdateCompilationParams,
    ) -> Result<entity::compilation::Model, DbErr> {
        let mut active_model: entity::compilation::ActiveModel = compilation.into();

        if let Some(title) = &params.title {
            active_model.title = ActiveValue::Set(title.clone());
        }
        if let Some(pinned) = params.pinned {
            active_model.pinned = ActiveValue::Set(pinned);
        }

        active_model.update(self.db).await
    }

    /// Replaces the events linked to a compilation.
    ///
    /// Duplicate IDs are linked once and IDs of events that do not exist are skipped.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of events now linked
    /// - `Err(DbErr)` - Database error during delete or insert
    pub async fn replace_events(
        &self,
        compilation_id: i32,
        event_ids: &[i32],
    ) -> Result<usize, DbErr> {
        entity::prelude::CompilationEvent::delete_many()
            .filter(entity::compilation_event::Column::CompilationId.eq(compilation_id))
            .exec(self.db)
            .await?;

        let requested: BTreeSet<i32> = event_ids.iter().copied().collect();
        if requested.is_empty() {
            return Ok(0);
        }

        let existing: Vec<i32> = entity::prelude::Event::find()
            .select_only()
            .column(entity::event::Column::Id)
            .filter(entity::event::Column::Id.is_in(requested))
            .into_tuple()
            .all(self.db)
            .await?;

        if existing.is_empty() {
            return Ok(0);
        }

        let linked = existing.len();

        entity::prelude::CompilationEvent::insert_many(existing.into_iter().map(|event_id| {
            entity::compilation_event::ActiveModel {
                compilation_id: ActiveValue::Set(compilation_id),
                event_id: ActiveValue::Set(event_id),
            }
        }))
        .exec_without_returning(self.db)
        .await?;

        Ok(linked)
    }

    /// Deletes a compilation and its event links, returning the number of compilations removed.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Compilation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
