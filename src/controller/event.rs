use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::model::event::{CreateEventDto, EventDto, EventStatsDto, PaginatedEventsDto, UpdateEventDto};
use crate::service::event::EventService;
use crate::service::stats::EventStatsService;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListEventsQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    pub status: Option<String>,
}

fn default_per_page() -> u64 {
    10
}

/// `POST /api/events`
pub async fn create_event(
    State(state): State<AppState>,
    Json(dto): Json<CreateEventDto>,
) -> Result<(StatusCode, Json<EventDto>), AppError> {
    let event = EventService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(event)))
}

/// `GET /api/events`
pub async fn get_events(
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> Result<Json<PaginatedEventsDto>, AppError> {
    let events = EventService::new(&state.db)
        .list(query.page, query.per_page, query.status)
        .await?;

    Ok(Json(events))
}

/// `GET /api/events/{id}`
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
) -> Result<Json<EventDto>, AppError> {
    let event = EventService::new(&state.db).get_by_id(event_id).await?;

    Ok(Json(event))
}

/// `PATCH /api/events/{id}`
pub async fn update_event(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
    Json(dto): Json<UpdateEventDto>,
) -> Result<Json<EventDto>, AppError> {
    let event = EventService::new(&state.db).update(event_id, dto).await?;

    Ok(Json(event))
}

/// `GET /api/events/{id}/stats`
pub async fn get_event_stats(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
) -> Result<Json<EventStatsDto>, AppError> {
    let stats = EventStatsService::new(&state.db)
        .get_for_event(event_id)
        .await?;

    Ok(Json(stats))
}
