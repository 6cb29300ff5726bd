//! Compilation domain model and parameters.

use crate::{
    model::compilation::{CompilationDto, CreateCompilationDto, UpdateCompilationDto},
    server::{error::internal::InternalError, model::event::Event},
};

/// Curated list of events, ordered by event ID.
#[derive(Debug, Clone, PartialEq)]
pub struct Compilation {
    pub id: i32,
    pub title: String,
    pub pinned: bool,
    pub events: Vec<Event>,
}

impl Compilation {
    /// Converts a compilation and its linked events at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Compilation)` - The converted compilation
    /// - `Err(InternalError)` - One of the events holds invalid stored values
    pub fn from_entity(
        entity: entity::compilation::Model,
        events: Vec<entity::event::Model>,
    ) -> Result<Self, InternalError> {
        let events = events
            .into_iter()
            .map(Event::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: entity.id,
            title: entity.title,
            pinned: entity.pinned,
            events,
        })
    }

    pub fn into_dto(self) -> CompilationDto {
        CompilationDto {
            id: self.id,
            title: self.title,
            pinned: self.pinned,
            events: self.events.into_iter().map(Event::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCompilationParams {
    pub title: String,
    pub pinned: bool,
    pub event_ids: Vec<i32>,
}

impl CreateCompilationParams {
    pub fn from_dto(dto: CreateCompilationDto) -> Self {
        Self {
            title: dto.title,
            pinned: dto.pinned,
            event_ids: dto.events,
        }
    }
}

/// Partial update. `event_ids` replaces the linked events when given.
#[derive(Debug, Clone, Default)]
pub struct UpdateCompilationParams {
    pub title: Option<String>,
    pub pinned: Option<bool>,
    pub event_ids: Option<Vec<i32>>,
}

impl UpdateCompilationParams {
    pub fn from_dto(dto: UpdateCompilationDto) -> Self {
        Self {
            title: dto.title,
            pinned: dto.pinned,
            event_ids: dto.events,
        }
    }
}
