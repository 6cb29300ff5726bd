use crate::server::data::compilation::CompilationRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_all_with_events;
mod replace_events;
