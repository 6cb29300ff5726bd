//! In-memory entity fixtures.
//!
//! Fixtures build entity models with fixed default values without touching the
//! database. Use them for unit tests of domain conversions and ledger rules.

pub mod event;
pub mod participation_request;
