//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use super::service::{event_lock::EventLocks, stats::StatsClient};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `EventLocks` wraps its lock map in an `Arc`
/// - `StatsClient` holds a `reqwest::Client`, which uses an `Arc` internally
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Per-event locks serializing capacity ledger updates.
    ///
    /// Must be a single instance for the whole process; two instances would let
    /// requests for the same event decide on the same counter.
    pub event_locks: EventLocks,

    /// Sink for public endpoint hits.
    pub stats: StatsClient,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `stats` - Statistics client for endpoint hits
    pub fn new(db: DatabaseConnection, stats: StatsClient) -> Self {
        Self {
            db,
            event_locks: EventLocks::new(),
            stats,
        }
    }
}
