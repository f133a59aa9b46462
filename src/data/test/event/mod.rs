use crate::data::event::EventRepository;
use crate::model::event::{CreateEventParams, UpdateEventParams};
use chrono::{Duration, Utc};
use entity::event::EventStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_id;
