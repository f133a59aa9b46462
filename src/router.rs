use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::controller::{event, registration};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/events",
            get(event::get_events).post(event::create_event),
        )
        .route(
            "/api/events/{id}",
            get(event::get_event).patch(event::update_event),
        )
        .route("/api/events/{id}/stats", get(event::get_event_stats))
        .route("/api/events/{id}/register", post(registration::register))
        .route(
            "/api/events/{id}/registrations",
            get(registration::get_event_registrations),
        )
        .route(
            "/api/registrations/{id}",
            get(registration::get_registration).delete(registration::cancel_registration),
        )
        .route(
            "/api/registrations/{id}/check-in",
            patch(registration::check_in_registration),
        )
        .route(
            "/api/users/{id}/registrations",
            get(registration::get_user_registrations),
        )
}
