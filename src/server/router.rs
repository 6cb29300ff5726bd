//! Axum route configuration and API documentation.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto},
        compilation::{CompilationDto, CreateCompilationDto, UpdateCompilationDto},
        event::{
            AdminStateAction, CreateEventDto, EventDto, EventState, UpdateEventAdminDto,
            UpdateEventUserDto, UserStateAction,
        },
        request::{
            EventRequestStatusUpdateDto, EventRequestStatusUpdateResultDto,
            ParticipationRequestDto, RequestDecision, RequestStatus,
        },
        user::{CreateUserDto, UserDto},
    },
    server::{
        controller::{category, compilation, event, request, user},
        state::AppState,
    },
};

/// OpenAPI documentation for the event participation API
#[derive(OpenApi)]
#[openapi(
    paths(
        user::create_user,
        user::get_users,
        user::delete_user,
        category::create_category,
        category::update_category,
        category::delete_category,
        category::get_category,
        category::get_categories,
        event::create_event,
        event::update_event_by_initiator,
        event::update_event_by_admin,
        event::get_published_event,
        event::search_published_events,
        event::search_events,
        event::get_user_events,
        event::get_user_event,
        compilation::create_compilation,
        compilation::update_compilation,
        compilation::delete_compilation,
        compilation::get_compilations,
        compilation::get_compilation,
        request::create_request,
        request::cancel_request,
        request::get_user_requests,
        request::get_event_requests,
        request::update_request_statuses,
    ),
    components(schemas(
        ErrorDto,
        CreateUserDto,
        UserDto,
        CreateCategoryDto,
        UpdateCategoryDto,
        CategoryDto,
        CreateCompilationDto,
        UpdateCompilationDto,
        CompilationDto,
        CreateEventDto,
        UpdateEventUserDto,
        UpdateEventAdminDto,
        EventDto,
        EventState,
        UserStateAction,
        AdminStateAction,
        ParticipationRequestDto,
        RequestStatus,
        RequestDecision,
        EventRequestStatusUpdateDto,
        EventRequestStatusUpdateResultDto,
    )),
    tags(
        (name = "user", description = "User administration"),
        (name = "category", description = "Event categories"),
        (name = "event", description = "Events and their participant limits"),
        (name = "compilation", description = "Curated event compilations"),
        (name = "request", description = "Participation requests and admission")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/users", post(user::create_user).get(user::get_users))
        .route("/admin/users/{user_id}", delete(user::delete_user))
        .route("/admin/categories", post(category::create_category))
        .route(
            "/admin/categories/{category_id}",
            patch(category::update_category).delete(category::delete_category),
        )
        .route("/categories", get(category::get_categories))
        .route("/categories/{category_id}", get(category::get_category))
        .route("/admin/events", get(event::search_events))
        .route("/admin/events/{event_id}", patch(event::update_event_by_admin))
        .route(
            "/users/{user_id}/events",
            get(event::get_user_events).post(event::create_event),
        )
        .route(
            "/users/{user_id}/events/{event_id}",
            get(event::get_user_event).patch(event::update_event_by_initiator),
        )
        .route("/events", get(event::search_published_events))
        .route("/events/{event_id}", get(event::get_published_event))
        .route("/admin/compilations", post(compilation::create_compilation))
        .route(
            "/admin/compilations/{compilation_id}",
            patch(compilation::update_compilation).delete(compilation::delete_compilation),
        )
        .route("/compilations", get(compilation::get_compilations))
        .route(
            "/compilations/{compilation_id}",
            get(compilation::get_compilation),
        )
        .route(
            "/users/{user_id}/requests",
            get(request::get_user_requests).post(request::create_request),
        )
        .route(
            "/users/{user_id}/requests/{request_id}/cancel",
            patch(request::cancel_request),
        )
        .route(
            "/users/{user_id}/events/{event_id}/requests",
            get(request::get_event_requests).patch(request::update_request_statuses),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
