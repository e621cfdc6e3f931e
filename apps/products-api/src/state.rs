//! Application state management

use database::postgres::DatabaseConnection;

/// Shared application state; cloning only clones pool handles.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: DatabaseConnection,
}
