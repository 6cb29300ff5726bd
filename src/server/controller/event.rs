use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, OriginalUri, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        event::{
            AdminEventQuery, CreateEventDto, EventDto, PublicEventQuery, UpdateEventAdminDto,
            UpdateEventUserDto,
        },
    },
    server::{
        error::AppError,
        model::event::{
            CreateEventParams, Event, EventFilter, PublishedEventFilter, UpdateEventParams,
        },
        service::event::EventService,
        state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// Create an event.
///
/// The event starts in review (`PENDING`) with no confirmed participants.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user_id` - Initiator of the event
/// - `payload` - Event details and capacity settings
///
/// # Returns
/// - `201 Created` - The created event
/// - `400 Bad Request` - Event date is less than two hours away
/// - `404 Not Found` - User or category does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/users/{user_id}/events",
    tag = EVENT_TAG,
    params(
        ("user_id" = i32, Path, description = "Initiator user ID")
    ),
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Successfully created event", body = EventDto),
        (status = 400, description = "Event date too soon", body = ErrorDto),
        (status = 404, description = "User or category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db, &state.event_locks);

    let event = service
        .create(CreateEventParams::from_dto(user_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

/// Update an unpublished event as its initiator.
///
/// # Returns
/// - `200 OK` - The updated event
/// - `400 Bad Request` - New event date is less than two hours away
/// - `404 Not Found` - Event missing or owned by another user
/// - `409 Conflict` - Event already published
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/users/{user_id}/events/{event_id}",
    tag = EVENT_TAG,
    params(
        ("user_id" = i32, Path, description = "Initiator user ID"),
        ("event_id" = i32, Path, description = "Event ID")
    ),
    request_body = UpdateEventUserDto,
    responses(
        (status = 200, description = "Successfully updated event", body = EventDto),
        (status = 400, description = "Event date too soon", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 409, description = "Event already published", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event_by_initiator(
    State(state): State<AppState>,
    Path((user_id, event_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateEventUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db, &state.event_locks);

    let event = service
        .update_by_initiator(user_id, event_id, UpdateEventParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Edit, publish or reject an event awaiting review.
///
/// # Returns
/// - `200 OK` - The event in its new state
/// - `400 Bad Request` - New event date is less than an hour away
/// - `404 Not Found` - Event or category does not exist
/// - `409 Conflict` - Event is not awaiting review
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/admin/events/{event_id}",
    tag = EVENT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    request_body = UpdateEventAdminDto,
    responses(
        (status = 200, description = "Successfully moderated event", body = EventDto),
        (status = 400, description = "Event date too soon", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 409, description = "Event not awaiting review", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event_by_admin(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
    Json(payload): Json<UpdateEventAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db, &state.event_locks);

    let event = service
        .update_by_admin(event_id, UpdateEventParams::from_admin_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Get a published event.
///
/// Serving the event records a hit with the statistics service in the background.
///
/// # Returns
/// - `200 OK` - The published event
/// - `404 Not Found` - Event missing or not published
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/events/{event_id}",
    tag = EVENT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved event", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_published_event(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    OriginalUri(uri): OriginalUri,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db, &state.event_locks);

    let event = service.get_published(event_id).await?;

    state
        .stats
        .record_hit(uri.path(), &addr.ip().to_string());

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Search published events.
///
/// Without `rangeStart` or `rangeEnd` only upcoming events are listed. Serving the list
/// records a hit with the statistics service.
///
/// # Returns
/// - `200 OK` - Matching events, latest event date first
/// - `400 Bad Request` - Invalid category ID or date range
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/events",
    tag = EVENT_TAG,
    params(PublicEventQuery),
    responses(
        (status = 200, description = "Successfully searched events", body = Vec<EventDto>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_published_events(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<PublicEventQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db, &state.event_locks);

    let events = service
        .search_published(PublishedEventFilter::from_query(query))
        .await?;

    state
        .stats
        .record_hit(uri.path(), &addr.ip().to_string());

    Ok((StatusCode::OK, Json(into_dtos(events))))
}

/// Search events in any state.
///
/// # Returns
/// - `200 OK` - Matching events ordered by ID
/// - `400 Bad Request` - Invalid user or category ID, or date range
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/admin/events",
    tag = EVENT_TAG,
    params(AdminEventQuery),
    responses(
        (status = 200, description = "Successfully searched events", body = Vec<EventDto>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_events(
    State(state): State<AppState>,
    Query(query): Query<AdminEventQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db, &state.event_locks);

    let events = service.search(EventFilter::from_query(query)).await?;

    Ok((StatusCode::OK, Json(into_dtos(events))))
}

/// List the events a user created.
///
/// # Returns
/// - `200 OK` - The user's events ordered by ID
/// - `404 Not Found` - User does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/{user_id}/events",
    tag = EVENT_TAG,
    params(
        ("user_id" = i32, Path, description = "Initiator user ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved events", body = Vec<EventDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_events(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db, &state.event_locks);

    let events = service.get_user_events(user_id).await?;

    Ok((StatusCode::OK, Json(into_dtos(events))))
}

/// Get one of the user's own events in any state.
#[utoipa::path(
    get,
    path = "/users/{user_id}/events/{event_id}",
    tag = EVENT_TAG,
    params(
        ("user_id" = i32, Path, description = "Initiator user ID"),
        ("event_id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved event", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_event(
    State(state): State<AppState>,
    Path((user_id, event_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db, &state.event_locks);

    let event = service.get_user_event(user_id, event_id).await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

fn into_dtos(events: Vec<Event>) -> Vec<EventDto> {
    events.into_iter().map(Event::into_dto).collect()
}
