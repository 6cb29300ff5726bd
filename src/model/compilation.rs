use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::event::EventDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompilationDto {
    pub title: String,
    #[serde(default)]
    pub pinned: bool,
    /// IDs of the events to include; unknown IDs are ignored
    #[serde(default)]
    pub events: Vec<i32>,
}

/// Partial update. A given `events` list replaces the compilation's events.
#[derive(Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompilationDto {
    pub title: Option<String>,
    pub pinned: Option<bool>,
    pub events: Option<Vec<i32>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompilationDto {
    pub id: i32,
    pub title: String,
    pub pinned: bool,
    pub events: Vec<EventDto>,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CompilationQuery {
    /// Only compilations with this pinned flag
    pub pinned: Option<bool>,
}
