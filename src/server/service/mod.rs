//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Admission Control**: Deciding participation requests against each event's ledger
//! - **Orchestration**: Coordinating repository calls inside one transaction
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Locking**: Serializing ledger updates per event through `EventLocks`

pub mod category;
pub mod compilation;
pub mod event;
pub mod event_lock;
pub mod request;
pub mod stats;
pub mod user;
