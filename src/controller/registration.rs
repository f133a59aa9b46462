use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use sea_orm::ActiveEnum;
use serde::Deserialize;

use entity::registration::RegistrationStatus;

use crate::error::AppError;
use crate::middleware::actor::ActingUser;
use crate::model::api::PaginationQuery;
use crate::model::registration::{
    CancelDto, ListRegistrationsByEventParams, PaginatedRegistrationsDto, RegisterDto,
    RegistrationDetailDto, RegistrationDto,
};
use crate::service::registration::RegistrationService;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListRegistrationsQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    pub status: Option<String>,
    pub search: Option<String>,
}

fn default_per_page() -> u64 {
    10
}

/// `POST /api/events/{id}/register`
pub async fn register(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
    ActingUser(acting_user): ActingUser,
    Json(dto): Json<RegisterDto>,
) -> Result<(StatusCode, Json<RegistrationDto>), AppError> {
    let registration = RegistrationService::new(&state.db, state.notifier.clone())
        .register(event_id, dto, acting_user)
        .await?;

    Ok((StatusCode::CREATED, Json(registration)))
}

/// `GET /api/events/{id}/registrations`
pub async fn get_event_registrations(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
    Query(query): Query<ListRegistrationsQuery>,
) -> Result<Json<PaginatedRegistrationsDto>, AppError> {
    let status = query
        .status
        .map(|value| {
            RegistrationStatus::try_from_value(&value)
                .map_err(|_| AppError::BadRequest(format!("Unknown registration status: {}", value)))
        })
        .transpose()?;

    let registrations = RegistrationService::new(&state.db, state.notifier.clone())
        .list_by_event(ListRegistrationsByEventParams {
            event_id,
            status,
            search: query.search,
            page: query.page,
            per_page: query.per_page,
        })
        .await?;

    Ok(Json(registrations))
}

/// `GET /api/registrations/{id}`
pub async fn get_registration(
    State(state): State<AppState>,
    Path(registration_id): Path<i32>,
) -> Result<Json<RegistrationDetailDto>, AppError> {
    let registration = RegistrationService::new(&state.db, state.notifier.clone())
        .get_by_id(registration_id)
        .await?;

    Ok(Json(registration))
}

/// `DELETE /api/registrations/{id}`
///
/// The JSON body is optional; when present it may carry a cancellation reason.
pub async fn cancel_registration(
    State(state): State<AppState>,
    Path(registration_id): Path<i32>,
    body: Option<Json<CancelDto>>,
) -> Result<Json<RegistrationDto>, AppError> {
    let reason = body.and_then(|Json(dto)| dto.reason);

    let registration = RegistrationService::new(&state.db, state.notifier.clone())
        .cancel(registration_id, reason)
        .await?;

    Ok(Json(registration))
}

/// `PATCH /api/registrations/{id}/check-in`
pub async fn check_in_registration(
    State(state): State<AppState>,
    Path(registration_id): Path<i32>,
    ActingUser(acting_user): ActingUser,
) -> Result<Json<RegistrationDto>, AppError> {
    let registration = RegistrationService::new(&state.db, state.notifier.clone())
        .check_in(registration_id, acting_user)
        .await?;

    Ok(Json(registration))
}

/// `GET /api/users/{id}/registrations`
pub async fn get_user_registrations(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<PaginatedRegistrationsDto>, AppError> {
    let registrations = RegistrationService::new(&state.db, state.notifier.clone())
        .list_by_user(user_id, query.page, query.per_page)
        .await?;

    Ok(Json(registrations))
}
