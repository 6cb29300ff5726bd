//! HTTP request handlers.
//!
//! Controllers extract path, query and body parameters, convert DTOs into server
//! parameters, call a service and convert the resulting domain model back into a DTO.
//! Every handler carries a `utoipa::path` annotation collected by `router::ApiDoc`.

pub mod category;
pub mod compilation;
pub mod event;
pub mod request;
pub mod user;
