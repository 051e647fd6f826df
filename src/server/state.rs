//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::service::chatbot::location::LocationIndex;

/// Application state containing shared resources.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool and the
/// location index sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing the outlet database.
    pub db: DatabaseConnection,

    /// Place names known to the chatbot, built from outlet addresses at startup.
    pub locations: Arc<LocationIndex>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, locations: LocationIndex) -> Self {
        Self {
            db,
            locations: Arc::new(locations),
        }
    }
}
