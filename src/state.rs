//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

use crate::service::notification::NotificationService;

/// Application state containing shared resources and dependencies.
///
/// Initialized once during server startup and then cloned (cheaply, everything
/// is pooled or reference-counted internally) for each incoming request via
/// Axum's state extraction.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for outbound requests.
    ///
    /// Configured without redirects; used by the notification dispatcher.
    pub http_client: reqwest::Client,

    /// Fire-and-forget notification dispatcher.
    pub notifier: NotificationService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        notifier: NotificationService,
    ) -> Self {
        Self {
            db,
            http_client,
            notifier,
        }
    }
}
