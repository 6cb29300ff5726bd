use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        request::{
            CreateRequestQuery, EventRequestStatusUpdateDto, EventRequestStatusUpdateResultDto,
            ParticipationRequestDto,
        },
    },
    server::{error::AppError, service::request::RequestService, state::AppState},
};

/// Tag for grouping participation request endpoints in OpenAPI documentation
pub static REQUEST_TAG: &str = "request";

/// Apply to an event.
///
/// The request is confirmed immediately when the event does not moderate requests or
/// has no participant limit, otherwise it waits for the initiator's decision.
///
/// # Arguments
/// - `state` - Application state containing the database connection and event locks
/// - `user_id` - Applying user
/// - `query` - `eventId` of the event to apply to
///
/// # Returns
/// - `201 Created` - The created request
/// - `404 Not Found` - User or event does not exist
/// - `409 Conflict` - Own event, unpublished event, duplicate request or no seats left
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/users/{user_id}/requests",
    tag = REQUEST_TAG,
    params(
        ("user_id" = i32, Path, description = "Requesting user ID"),
        CreateRequestQuery
    ),
    responses(
        (status = 201, description = "Successfully created request", body = ParticipationRequestDto),
        (status = 404, description = "User or event not found", body = ErrorDto),
        (status = 409, description = "Admission rule violated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_request(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Query(query): Query<CreateRequestQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = RequestService::new(&state.db, &state.event_locks);

    let request = service.create(user_id, query.event_id).await?;

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}

/// Cancel one of the user's own requests.
///
/// # Returns
/// - `200 OK` - The canceled request
/// - `404 Not Found` - Request missing or owned by another user
/// - `409 Conflict` - Request was rejected
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/users/{user_id}/requests/{request_id}/cancel",
    tag = REQUEST_TAG,
    params(
        ("user_id" = i32, Path, description = "Requesting user ID"),
        ("request_id" = i32, Path, description = "Request ID")
    ),
    responses(
        (status = 200, description = "Successfully canceled request", body = ParticipationRequestDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 409, description = "Request cannot be canceled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_request(
    State(state): State<AppState>,
    Path((user_id, request_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let service = RequestService::new(&state.db, &state.event_locks);

    let request = service.cancel(user_id, request_id).await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// List the user's own requests.
///
/// # Returns
/// - `200 OK` - The user's requests
/// - `404 Not Found` - User does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/{user_id}/requests",
    tag = REQUEST_TAG,
    params(
        ("user_id" = i32, Path, description = "Requesting user ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved requests", body = Vec<ParticipationRequestDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_requests(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = RequestService::new(&state.db, &state.event_locks);

    let requests = service.get_user_requests(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(requests.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>()),
    ))
}

/// List the requests for an event, as its initiator.
///
/// # Returns
/// - `200 OK` - The event's requests
/// - `404 Not Found` - Event missing or owned by another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/{user_id}/events/{event_id}/requests",
    tag = REQUEST_TAG,
    params(
        ("user_id" = i32, Path, description = "Initiator user ID"),
        ("event_id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved requests", body = Vec<ParticipationRequestDto>),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event_requests(
    State(state): State<AppState>,
    Path((user_id, event_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let service = RequestService::new(&state.db, &state.event_locks);

    let requests = service.get_event_requests(user_id, event_id).await?;

    Ok((
        StatusCode::OK,
        Json(requests.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Confirm or reject pending requests for an event, as its initiator.
///
/// Requests are processed in the order given. On a moderated event with a limit,
/// confirmations stop once the limit is met and the remaining pending requests in
/// the batch are rejected.
///
/// # Returns
/// - `200 OK` - All confirmed and rejected requests of the event
/// - `404 Not Found` - Event missing or owned by another user
/// - `409 Conflict` - Participant limit already reached
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/users/{user_id}/events/{event_id}/requests",
    tag = REQUEST_TAG,
    params(
        ("user_id" = i32, Path, description = "Initiator user ID"),
        ("event_id" = i32, Path, description = "Event ID")
    ),
    request_body = EventRequestStatusUpdateDto,
    responses(
        (status = 200, description = "Successfully updated requests", body = EventRequestStatusUpdateResultDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 409, description = "Participant limit reached", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_request_statuses(
    State(state): State<AppState>,
    Path((user_id, event_id)): Path<(i32, i32)>,
    Json(payload): Json<EventRequestStatusUpdateDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = RequestService::new(&state.db, &state.event_locks);

    let result = service
        .update_statuses(user_id, event_id, &payload.request_ids, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}
