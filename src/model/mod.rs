//! API data transfer objects.
//!
//! These types define the JSON shapes accepted and returned by the HTTP layer.
//! Field names are camelCase on the wire and timestamps use the
//! `YYYY-MM-DD HH:MM:SS` format handled by [`datetime`].

pub mod api;
pub mod category;
pub mod compilation;
pub mod datetime;
pub mod event;
pub mod query;
pub mod request;
pub mod user;
