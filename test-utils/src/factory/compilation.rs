//! Compilation factory for creating test compilations and their event links.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Factory for creating test compilations.
///
/// # Example
///
/// ```rust,ignore
/// let compilation = CompilationFactory::new(&db)
///     .pinned(true)
///     .events(vec![event.id])
///     .build()
///     .await?;
/// ```
pub struct CompilationFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    pinned: bool,
    event_ids: Vec<i32>,
}

impl<'a> CompilationFactory<'a> {
    /// Creates a new unpinned, empty CompilationFactory titled `"Compilation {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Compilation {}", id),
            pinned: false,
            event_ids: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    /// Sets the events linked to the compilation. The events must exist.
    pub fn events(mut self, event_ids: Vec<i32>) -> Self {
        self.event_ids = event_ids;
        self
    }

    /// Inserts the compilation and its event links.
    pub async fn build(self) -> Result<entity::compilation::Model, DbErr> {
        let compilation = entity::compilation::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            pinned: ActiveValue::Set(self.pinned),
        }
        .insert(self.db)
        .await?;

        if !self.event_ids.is_empty() {
            entity::prelude::CompilationEvent::insert_many(self.event_ids.into_iter().map(
                |event_id| entity::compilation_event::ActiveModel {
                    compilation_id: ActiveValue::Set(compilation.id),
                    event_id: ActiveValue::Set(event_id),
                },
            ))
            .exec_without_returning(self.db)
            .await?;
        }

        Ok(compilation)
    }
}

/// Creates an empty, unpinned compilation.
pub async fn create_compilation(
    db: &DatabaseConnection,
) -> Result<entity::compilation::Model, DbErr> {
    CompilationFactory::new(db).build().await
}
