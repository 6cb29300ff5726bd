//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. The capacity ledger lives here
//! because both the event and request services reason about it.

pub mod category;
pub mod compilation;
pub mod event;
pub mod ledger;
pub mod request;
pub mod stats;
pub mod user;
