//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of the rows they reference, and
//! `helpers` creates whole dependency chains in one call.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!
//!     // Create a published event with its initiator and category
//!     let (initiator, category, event) =
//!         factory::helpers::create_event_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let event = factory::event::EventFactory::new(&db, category.id, initiator.id)
//!     .participant_limit(2)
//!     .request_moderation(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `category` - Create category entities
//! - `event` - Create event entities (published by default)
//! - `compilation` - Create compilations linked to existing events
//! - `participation_request` - Create participation request entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod category;
pub mod compilation;
pub mod event;
pub mod helpers;
pub mod participation_request;
pub mod user;

pub use category::create_category;
pub use compilation::create_compilation;
pub use event::create_event;
pub use participation_request::create_request;
pub use user::create_user;
