//! Participation request admission.
//!
//! `RequestService` decides whether a participation request is admitted, held for
//! moderation or refused, and keeps each event's confirmed counter in step with the
//! requests it confirms. Every operation that reads or writes a ledger takes the
//! event's lock from [`EventLocks`] first and then runs inside a single database
//! transaction, so two admissions for the same event never decide on the same counter.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        event::EventState,
        request::{RequestDecision, RequestStatus},
    },
    server::{
        data::{
            event::EventRepository, request::ParticipationRequestRepository,
            user::UserRepository,
        },
        error::{admission::AdmissionError, AppError},
        model::{
            event::Event,
            ledger::CapacityLedger,
            request::{ParticipationRequest, StatusChange, StatusUpdateResult},
        },
        service::event_lock::EventLocks,
    },
};

/// Service implementing the admission rules for participation requests.
pub struct RequestService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a EventLocks,
}

impl<'a> RequestService<'a> {
    /// Creates a new RequestService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `locks` - Shared per-event locks guarding capacity ledgers
    pub fn new(db: &'a DatabaseConnection, locks: &'a EventLocks) -> Self {
        Self { db, locks }
    }

    /// Submits a participation request for a user.
    ///
    /// The request is confirmed immediately when the event does not moderate requests
    /// or has no participant limit, and the event's counter is incremented in the same
    /// transaction as the insert. Otherwise it starts PENDING and the counter is left
    /// alone.
    ///
    /// # Arguments
    /// - `user_id` - User applying to the event
    /// - `event_id` - Event being applied to
    ///
    /// # Returns
    /// - `Ok(ParticipationRequest)` - The created request with its initial status
    /// - `Err(AppError::NotFound)` - User or event does not exist
    /// - `Err(AppError::AdmissionErr)` - Initiator applying to own event, event not
    ///   published, active request already present, or participant limit met
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(
        &self,
        user_id: i32,
        event_id: i32,
    ) -> Result<ParticipationRequest, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id={} was not found", user_id)))?;

        let _guard = self.locks.acquire(event_id).await;
        let txn = self.db.begin().await?;

        let event_repo = EventRepository::new(&txn);
        let request_repo = ParticipationRequestRepository::new(&txn);

        let event = event_repo.find_by_id(event_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Event with id={} was not found", event_id))
        })?;
        let event = Event::from_entity(event)?;

        if event.initiator_id == user_id {
            return Err(AdmissionError::InitiatorRequest { user_id, event_id }.into());
        }

        if event.state != EventState::Published {
            return Err(AdmissionError::InvalidEventState {
                event_id,
                state: event.state.as_str().to_string(),
                expected: EventState::Published.as_str().to_string(),
            }
            .into());
        }

        if request_repo
            .find_active_by_requester_and_event(user_id, event_id)
            .await?
            .is_some()
        {
            return Err(AdmissionError::DuplicateRequest { user_id, event_id }.into());
        }

        let mut ledger = event.ledger;
        if ledger.is_full() {
            return Err(AdmissionError::CapacityExceeded {
                event_id,
                limit: ledger.participant_limit,
            }
            .into());
        }

        let status = ledger.initial_status();
        if status == RequestStatus::Confirmed {
            ledger.record_confirmation();
            event_repo
                .save_confirmed_requests(event_id, ledger.confirmed_requests)
                .await?;

            tracing::debug!(
                "Event {} auto-confirmed a request, seats left: {:?}",
                event_id,
                ledger.remaining()
            );
        }

        let request = request_repo
            .create(user_id, event_id, status, Utc::now())
            .await?;

        txn.commit().await?;

        tracing::info!(
            "User {} requested participation in event {}: {}",
            user_id,
            event_id,
            status.as_str()
        );

        Ok(ParticipationRequest::from_entity(request)?)
    }

    /// Cancels a user's own request.
    ///
    /// A confirmed request keeps its seat in the event's confirmed counter after it is
    /// canceled. Canceling an already canceled request returns it unchanged.
    ///
    /// # Returns
    /// - `Ok(ParticipationRequest)` - The canceled request
    /// - `Err(AppError::NotFound)` - Request missing or owned by another user
    /// - `Err(AppError::AdmissionErr)` - Request was rejected
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn cancel(
        &self,
        user_id: i32,
        request_id: i32,
    ) -> Result<ParticipationRequest, AppError> {
        let not_found = || {
            AppError::NotFound(format!(
                "Request with id={} was not found for user {}",
                request_id, user_id
            ))
        };

        let request = ParticipationRequestRepository::new(self.db)
            .find_by_id(request_id)
            .await?
            .filter(|request| request.requester_id == user_id)
            .ok_or_else(not_found)?;

        let _guard = self.locks.acquire(request.event_id).await;
        let txn = self.db.begin().await?;

        let request_repo = ParticipationRequestRepository::new(&txn);

        let request = request_repo
            .find_by_id(request_id)
            .await?
            .ok_or_else(not_found)?;
        let request = ParticipationRequest::from_entity(request)?;

        if request.status == RequestStatus::Canceled {
            return Ok(request);
        }

        if !request.status.can_transition_to(RequestStatus::Canceled) {
            return Err(AdmissionError::RequestNotCancelable {
                request_id,
                status: request.status.as_str().to_string(),
            }
            .into());
        }

        let canceled = request_repo
            .update_status(request_id, RequestStatus::Canceled)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "User {} canceled request {} for event {} (was {})",
            user_id,
            request_id,
            request.event_id,
            request.status.as_str()
        );

        Ok(ParticipationRequest::from_entity(canceled)?)
    }

    /// Gets every request the user has submitted.
    ///
    /// # Returns
    /// - `Ok(Vec<ParticipationRequest>)` - The user's requests, oldest first
    /// - `Err(AppError::NotFound)` - User does not exist
    pub async fn get_user_requests(
        &self,
        user_id: i32,
    ) -> Result<Vec<ParticipationRequest>, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id={} was not found", user_id)))?;

        let requests = ParticipationRequestRepository::new(self.db)
            .find_by_requester(user_id)
            .await?;

        Ok(ParticipationRequest::from_entities(requests)?)
    }

    /// Gets every request for an event initiated by the user.
    ///
    /// # Returns
    /// - `Ok(Vec<ParticipationRequest>)` - The event's requests, oldest first
    /// - `Err(AppError::NotFound)` - Event missing or initiated by someone else
    pub async fn get_event_requests(
        &self,
        user_id: i32,
        event_id: i32,
    ) -> Result<Vec<ParticipationRequest>, AppError> {
        EventRepository::new(self.db)
            .find_by_id_and_initiator(event_id, user_id)
            .await?
            .ok_or_else(|| event_not_owned(user_id, event_id))?;

        let requests = ParticipationRequestRepository::new(self.db)
            .find_by_event(event_id)
            .await?;

        Ok(ParticipationRequest::from_entities(requests)?)
    }

    /// Confirms or rejects a batch of pending requests for an event.
    ///
    /// The event lock is held for the whole batch. Requests are processed in the
    /// order of `request_ids`; IDs that are unknown, belong to another event or are
    /// not PENDING are skipped. See [`decide_batch`] for how each request is decided.
    /// All status changes and the counter are written in one transaction.
    ///
    /// # Arguments
    /// - `user_id` - Initiator of the event
    /// - `event_id` - Event whose requests are being moderated
    /// - `request_ids` - Requests to process, in order
    /// - `decision` - Target status for the batch
    ///
    /// # Returns
    /// - `Ok(StatusUpdateResult)` - All confirmed and all rejected requests of the
    ///   event after the update
    /// - `Err(AppError::NotFound)` - Event missing or initiated by someone else
    /// - `Err(AppError::AdmissionErr)` - Participant limit already met
    /// - `Err(AppError::DbErr)` - Database error, nothing is written
    pub async fn update_statuses(
        &self,
        user_id: i32,
        event_id: i32,
        request_ids: &[i32],
        decision: RequestDecision,
    ) -> Result<StatusUpdateResult, AppError> {
        let _guard = self.locks.acquire(event_id).await;
        let txn = self.db.begin().await?;

        let event_repo = EventRepository::new(&txn);
        let request_repo = ParticipationRequestRepository::new(&txn);

        let event = event_repo
            .find_by_id_and_initiator(event_id, user_id)
            .await?
            .ok_or_else(|| event_not_owned(user_id, event_id))?;
        let mut ledger = CapacityLedger::from_entity(&event)?;

        if ledger.is_full() {
            return Err(AdmissionError::CapacityReached {
                event_id,
                limit: ledger.participant_limit,
            }
            .into());
        }

        let found =
            ParticipationRequest::from_entities(request_repo.find_all_by_ids(request_ids).await?)?;
        let batch = order_batch(event_id, request_ids, found);

        let confirmed_before = ledger.confirmed_requests;
        let changes = decide_batch(&mut ledger, &batch, decision);

        if ledger.confirmed_requests != confirmed_before {
            event_repo
                .save_confirmed_requests(event_id, ledger.confirmed_requests)
                .await?;
        }

        if ledger.is_over_limit() {
            tracing::warn!(
                "Event {} confirmed {} requests over its participant limit of {}",
                event_id,
                ledger.confirmed_requests,
                ledger.participant_limit
            );
        }

        request_repo.save_statuses(&changes).await?;

        let confirmed = request_repo
            .find_by_event_and_status(event_id, RequestStatus::Confirmed)
            .await?;
        let rejected = request_repo
            .find_by_event_and_status(event_id, RequestStatus::Rejected)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Processed {} of {} requests for event {} ({} confirmed in total)",
            changes.len(),
            request_ids.len(),
            event_id,
            ledger.confirmed_requests
        );

        Ok(StatusUpdateResult {
            confirmed: ParticipationRequest::from_entities(confirmed)?,
            rejected: ParticipationRequest::from_entities(rejected)?,
        })
    }
}

fn event_not_owned(user_id: i32, event_id: i32) -> AppError {
    AppError::NotFound(format!(
        "Event with id={} was not found for user {}",
        event_id, user_id
    ))
}

/// Arranges loaded requests in the order their IDs were given, dropping duplicates
/// and requests of other events.
fn order_batch(
    event_id: i32,
    request_ids: &[i32],
    found: Vec<ParticipationRequest>,
) -> Vec<ParticipationRequest> {
    let mut by_id: HashMap<i32, ParticipationRequest> = found
        .into_iter()
        .filter(|request| request.event_id == event_id)
        .map(|request| (request.id, request))
        .collect();

    let mut seen = HashSet::new();
    request_ids
        .iter()
        .filter(|id| seen.insert(**id))
        .filter_map(|id| by_id.remove(id))
        .collect()
}

/// Decides the new status of every PENDING request in a batch, advancing the ledger
/// for each confirmation.
///
/// When the event auto-confirms, a confirm decision confirms every pending request
/// without checking the limit. Otherwise requests are confirmed in order until the
/// limit is met and every later pending request is rejected. A reject decision
/// rejects all pending requests. Requests in any other status get no change.
pub(crate) fn decide_batch(
    ledger: &mut CapacityLedger,
    batch: &[ParticipationRequest],
    decision: RequestDecision,
) -> Vec<StatusChange> {
    let auto_confirm_all = ledger.auto_confirms();
    let mut changes = Vec::new();

    for request in batch
        .iter()
        .filter(|request| request.status == RequestStatus::Pending)
    {
        let status = match decision {
            RequestDecision::Rejected => RequestStatus::Rejected,
            RequestDecision::Confirmed if !auto_confirm_all && ledger.is_full() => {
                RequestStatus::Rejected
            }
            RequestDecision::Confirmed => {
                ledger.record_confirmation();
                RequestStatus::Confirmed
            }
        };

        tracing::debug!(
            "Request {} for event {}: {}",
            request.id,
            ledger.event_id,
            status.as_str()
        );

        changes.push(StatusChange {
            request_id: request.id,
            status,
        });
    }

    changes
}
