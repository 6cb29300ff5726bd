//! Database repository layer for all domain entities.
//!
//! Repositories handle database operations for each domain and return entity models
//! that the service layer converts to domain models. They are generic over
//! `ConnectionTrait` so the same queries run against the pool or inside a
//! `DatabaseTransaction` when an operation must be atomic.

pub mod category;
pub mod compilation;
pub mod event;
pub mod request;
pub mod user;

#[cfg(test)]
mod test;
