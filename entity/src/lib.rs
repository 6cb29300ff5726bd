//! SeaORM entity definitions for the event board schema.

pub mod prelude;

pub mod category;
pub mod compilation;
pub mod compilation_event;
pub mod event;
pub mod participation_request;
pub mod user;
