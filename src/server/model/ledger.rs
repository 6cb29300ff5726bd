//! Per-event capacity ledger.
//!
//! The ledger is the participant limit, moderation flag and confirmed counter of a
//! single event. Every admission decision reads it, and every confirmation goes
//! through [`CapacityLedger::record_confirmation`] so the counter written back to the
//! event row is the one the decision was based on. Callers must hold the event's
//! lock (see `service::event_lock`) between loading a ledger and persisting it.

use crate::{model::request::RequestStatus, server::error::internal::InternalError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityLedger {
    pub event_id: i32,
    /// `0` means unlimited.
    pub participant_limit: i32,
    pub request_moderation: bool,
    pub confirmed_requests: i32,
}

impl CapacityLedger {
    /// Reads the ledger fields of an event row.
    ///
    /// # Returns
    /// - `Ok(CapacityLedger)` - Ledger for the event
    /// - `Err(InternalError::NegativeCounter)` - Limit or counter stored as a negative value
    pub fn from_entity(event: &entity::event::Model) -> Result<Self, InternalError> {
        for (field, value) in [
            ("participant_limit", event.participant_limit),
            ("confirmed_requests", event.confirmed_requests),
        ] {
            if value < 0 {
                return Err(InternalError::NegativeCounter {
                    event_id: event.id,
                    field,
                    value,
                });
            }
        }

        Ok(Self {
            event_id: event.id,
            participant_limit: event.participant_limit,
            request_moderation: event.request_moderation,
            confirmed_requests: event.confirmed_requests,
        })
    }

    pub fn is_unlimited(&self) -> bool {
        self.participant_limit == 0
    }

    /// True when a nonzero limit has been met.
    pub fn is_full(&self) -> bool {
        !self.is_unlimited() && self.confirmed_requests >= self.participant_limit
    }

    /// True when the counter is above a nonzero limit. Only reachable through the
    /// unmoderated branch of the bulk update, which does not check the limit.
    pub fn is_over_limit(&self) -> bool {
        !self.is_unlimited() && self.confirmed_requests > self.participant_limit
    }

    /// Requests skip moderation when the event does not moderate or has no limit.
    pub fn auto_confirms(&self) -> bool {
        !self.request_moderation || self.is_unlimited()
    }

    /// Status a newly created request starts in.
    pub fn initial_status(&self) -> RequestStatus {
        if self.auto_confirms() {
            RequestStatus::Confirmed
        } else {
            RequestStatus::Pending
        }
    }

    pub fn record_confirmation(&mut self) {
        self.confirmed_requests += 1;
    }

    /// Seats left under a nonzero limit, `None` when unlimited.
    pub fn remaining(&self) -> Option<i32> {
        (!self.is_unlimited()).then(|| (self.participant_limit - self.confirmed_requests).max(0))
    }
}
