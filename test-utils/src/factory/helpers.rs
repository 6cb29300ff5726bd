//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names and emails in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a published event together with its initiator and category.
///
/// This is a convenience method that creates:
/// 1. User (as event initiator)
/// 2. Category
/// 3. Event (published, unlimited, moderated)
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((initiator, category, event))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::category::Model,
        entity::event::Model,
    ),
    DbErr,
> {
    let initiator = crate::factory::user::create_user(db).await?;
    let category = crate::factory::category::create_category(db).await?;
    let event = crate::factory::event::create_event(db, category.id, initiator.id).await?;

    Ok((initiator, category, event))
}

/// Creates a published event with the given capacity settings.
///
/// Creates a fresh initiator and category, then an event with the provided participant
/// limit and moderation flag. Used by admission tests that only care about the ledger.
///
/// # Arguments
/// - `db` - Database connection
/// - `participant_limit` - Participant limit, `0` meaning unlimited
/// - `request_moderation` - Whether requests wait for the initiator's decision
///
/// # Returns
/// - `Ok((initiator, event))` - The initiator and the created event
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_capacity(
    db: &DatabaseConnection,
    participant_limit: i32,
    request_moderation: bool,
) -> Result<(entity::user::Model, entity::event::Model), DbErr> {
    let initiator = crate::factory::user::create_user(db).await?;
    let category = crate::factory::category::create_category(db).await?;
    let event = crate::factory::event::EventFactory::new(db, category.id, initiator.id)
        .participant_limit(participant_limit)
        .request_moderation(request_moderation)
        .build()
        .await?;

    Ok((initiator, event))
}

/// Creates `count` users, each with a request on the event in the given status.
///
/// # Arguments
/// - `db` - Database connection
/// - `event_id` - Event the requests target
/// - `count` - Number of requests to create
/// - `status` - Status string stored on every request
///
/// # Returns
/// - `Ok(Vec<entity::participation_request::Model>)` - Requests in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_requests_for_event(
    db: &DatabaseConnection,
    event_id: i32,
    count: usize,
    status: &str,
) -> Result<Vec<entity::participation_request::Model>, DbErr> {
    let mut requests = Vec::with_capacity(count);

    for _ in 0..count {
        let requester = crate::factory::user::create_user(db).await?;
        let request =
            crate::factory::participation_request::ParticipationRequestFactory::new(
                db,
                requester.id,
                event_id,
            )
            .status(status)
            .build()
            .await?;
        requests.push(request);
    }

    Ok(requests)
}
