use crate::data::registration::RegistrationRepository;
use crate::model::registration::{
    CreateRegistrationParams, ListRegistrationsByEventParams, RegisterDto, ReminderWave,
};
use chrono::{Duration, Utc};
use entity::registration::RegistrationStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod transitions;

/// Builds a participant payload with the given names and email.
fn participant(first_name: &str, last_name: &str, email: &str) -> RegisterDto {
    RegisterDto {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        phone: None,
        address: None,
        university: None,
        academic_unit: None,
        level: None,
        dietary_requirements: None,
        accessibility_needs: None,
        custom_answers: None,
    }
}
