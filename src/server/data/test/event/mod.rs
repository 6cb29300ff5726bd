use crate::{
    model::event::EventState,
    server::{
        data::event::EventRepository,
        model::event::{CreateEventParams, EventFilter, PublishedEventFilter, UpdateEventParams},
    },
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_id_and_initiator;
mod save_confirmed_requests;
mod search;
mod update;
