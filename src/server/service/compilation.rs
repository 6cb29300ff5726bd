//! Compilation service for business logic.
//!
//! A compilation and its event links are always written in one transaction.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::compilation::CompilationRepository,
    error::AppError,
    model::compilation::{Compilation, CreateCompilationParams, UpdateCompilationParams},
};

pub struct CompilationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompilationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a compilation linked to the given events.
    ///
    /// # Returns
    /// - `Ok(Compilation)` - The new compilation with the events that exist
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateCompilationParams) -> Result<Compilation, AppError> {
        let txn = self.db.begin().await?;
        let repo = CompilationRepository::new(&txn);

        let compilation = repo.create(params.title, params.pinned).await?;
        let linked = repo.replace_events(compilation.id, &params.event_ids).await?;
        let events = repo.find_events(&compilation).await?;

        txn.commit().await?;

        tracing::info!(
            "Created compilation {} with {} events",
            compilation.id,
            linked
        );

        Ok(Compilation::from_entity(compilation, events)?)
    }

    /// Updates title, pinned flag and, when given, the linked events.
    ///
    /// # Returns
    /// - `Ok(Compilation)` - The updated compilation
    /// - `Err(AppError::NotFound)` - No compilation with that ID
    pub async fn update(
        &self,
        id: i32,
        params: UpdateCompilationParams,
    ) -> Result<Compilation, AppError> {
        let txn = self.db.begin().await?;
        let repo = CompilationRepository::new(&txn);

        let compilation = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        let compilation = repo.update(compilation, &params).await?;

        if let Some(event_ids) = &params.event_ids {
            repo.replace_events(id, event_ids).await?;
        }

        let events = repo.find_events(&compilation).await?;

        txn.commit().await?;

        tracing::info!("Updated compilation {}", id);

        Ok(Compilation::from_entity(compilation, events)?)
    }

    /// Deletes a compilation. Its events are not affected.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = CompilationRepository::new(self.db).delete(id).await?;
        if deleted == 0 {
            return Err(not_found(id));
        }

        tracing::info!("Deleted compilation {}", id);

        Ok(())
    }

    /// Gets a compilation with its events.
    pub async fn get_by_id(&self, id: i32) -> Result<Compilation, AppError> {
        let repo = CompilationRepository::new(self.db);

        let compilation = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        let events = repo.find_events(&compilation).await?;

        Ok(Compilation::from_entity(compilation, events)?)
    }

    /// Gets compilations ordered by ID, optionally only pinned or unpinned ones.
    pub async fn get_all(&self, pinned: Option<bool>) -> Result<Vec<Compilation>, AppError> {
        let compilations = CompilationRepository::new(self.db)
            .find_all_with_events(pinned)
            .await?;

        compilations
            .into_iter()
            .map(|(compilation, events)| {
                Compilation::from_entity(compilation, events).map_err(AppError::from)
            })
            .collect()
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Compilation with id={} was not found", id))
}
