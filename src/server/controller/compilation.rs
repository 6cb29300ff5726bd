use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        compilation::{
            CompilationDto, CompilationQuery, CreateCompilationDto, UpdateCompilationDto,
        },
    },
    server::{
        error::AppError,
        model::compilation::{CreateCompilationParams, UpdateCompilationParams},
        service::compilation::CompilationService,
        state::AppState,
    },
};

/// Tag for grouping compilation endpoints in OpenAPI documentation
pub static COMPILATION_TAG: &str = "compilation";

/// Create a compilation of events.
///
/// Event IDs that do not exist are ignored.
///
/// # Returns
/// - `201 Created` - The created compilation with its events
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/admin/compilations",
    tag = COMPILATION_TAG,
    request_body = CreateCompilationDto,
    responses(
        (status = 201, description = "Successfully created compilation", body = CompilationDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_compilation(
    State(state): State<AppState>,
    Json(payload): Json<CreateCompilationDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CompilationService::new(&state.db);

    let compilation = service
        .create(CreateCompilationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(compilation.into_dto())))
}

/// Update a compilation. A given `events` list replaces its events.
///
/// # Returns
/// - `200 OK` - The updated compilation
/// - `404 Not Found` - No compilation with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/admin/compilations/{compilation_id}",
    tag = COMPILATION_TAG,
    params(
        ("compilation_id" = i32, Path, description = "Compilation ID")
    ),
    request_body = UpdateCompilationDto,
    responses(
        (status = 200, description = "Successfully updated compilation", body = CompilationDto),
        (status = 404, description = "Compilation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_compilation(
    State(state): State<AppState>,
    Path(compilation_id): Path<i32>,
    Json(payload): Json<UpdateCompilationDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CompilationService::new(&state.db);

    let compilation = service
        .update(compilation_id, UpdateCompilationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(compilation.into_dto())))
}

/// Delete a compilation. Its events are kept.
///
/// # Returns
/// - `204 No Content` - Compilation deleted
/// - `404 Not Found` - No compilation with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/admin/compilations/{compilation_id}",
    tag = COMPILATION_TAG,
    params(
        ("compilation_id" = i32, Path, description = "Compilation ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted compilation"),
        (status = 404, description = "Compilation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_compilation(
    State(state): State<AppState>,
    Path(compilation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CompilationService::new(&state.db);

    service.delete(compilation_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List compilations ordered by ID.
#[utoipa::path(
    get,
    path = "/compilations",
    tag = COMPILATION_TAG,
    params(CompilationQuery),
    responses(
        (status = 200, description = "Successfully retrieved compilations", body = Vec<CompilationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_compilations(
    State(state): State<AppState>,
    Query(query): Query<CompilationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = CompilationService::new(&state.db);

    let compilations = service.get_all(query.pinned).await?;

    Ok((
        StatusCode::OK,
        Json(
            compilations
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a compilation with its events.
///
/// # Returns
/// - `200 OK` - The compilation
/// - `404 Not Found` - No compilation with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/compilations/{compilation_id}",
    tag = COMPILATION_TAG,
    params(
        ("compilation_id" = i32, Path, description = "Compilation ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved compilation", body = CompilationDto),
        (status = 404, description = "Compilation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_compilation(
    State(state): State<AppState>,
    Path(compilation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CompilationService::new(&state.db);

    let compilation = service.get_by_id(compilation_id).await?;

    Ok((StatusCode::OK, Json(compilation.into_dto())))
}
