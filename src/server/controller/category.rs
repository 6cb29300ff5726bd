use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto},
    },
    server::{error::AppError, service::category::CategoryService, state::AppState},
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// Create an event category.
///
/// # Returns
/// - `201 Created` - The created category
/// - `409 Conflict` - A category with that name exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/admin/categories",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Successfully created category", body = CategoryDto),
        (status = 409, description = "Category name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let category = service.create(payload.name).await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}

/// Get a category by ID.
///
/// # Returns
/// - `200 OK` - The category
/// - `404 Not Found` - No category with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/categories/{category_id}",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved category", body = CategoryDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let category = service.get_by_id(category_id).await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Rename a category.
///
/// # Returns
/// - `200 OK` - The renamed category
/// - `404 Not Found` - No category with that ID
/// - `409 Conflict` - Another category has that name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/admin/categories/{category_id}",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Successfully renamed category", body = CategoryDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 409, description = "Category name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
    Json(payload): Json<UpdateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let category = service.update(category_id, payload.name).await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Delete a category that no event uses.
///
/// # Returns
/// - `204 No Content` - Category deleted
/// - `404 Not Found` - No category with that ID
/// - `409 Conflict` - Events still belong to the category
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/admin/categories/{category_id}",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted category"),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 409, description = "Category in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    service.delete(category_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List all categories ordered by ID.
#[utoipa::path(
    get,
    path = "/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved categories", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let categories = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            categories
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}
