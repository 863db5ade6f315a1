//! REST surface over the store and the coach.
//!
//! Routes:
//!   GET  /health
//!   POST /users/login
//!   GET  /users/{user_id}
//!   PUT  /users/{user_id}/goal
//!   POST /users/{user_id}/habits
//!   GET  /users/{user_id}/habits
//!   POST /habits/{definition_id}/toggle
//!   GET  /habits/{definition_id}/history
//!   GET  /dashboard/{user_id}
//!   POST /journal/{user_id}
//!   GET  /journal/{user_id}
//!   POST /coach/ask
//!   POST /coach/suggest-habits

pub mod coach;
pub mod dashboard;
pub mod error;
pub mod habits;
pub mod journal;
pub mod users;

use std::sync::{Arc, Mutex};

use axum::routing::{get, post, put};
use axum::{Json, Router};
use rusqlite::Connection;
use serde_json::{json, Value};

use crate::coach::CoachProvider;
use crate::store::StoreError;
use error::ApiError;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<Connection>>,
    /// `None` when no API key is configured; coach routes then return 503.
    pub coach: Option<Arc<dyn CoachProvider>>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/users/login", post(users::login))
        .route("/users/{user_id}", get(users::get_user))
        .route("/users/{user_id}/goal", put(users::update_goal))
        .route(
            "/users/{user_id}/habits",
            post(habits::create_definition).get(habits::list_definitions),
        )
        .route("/habits/{definition_id}/toggle", post(habits::toggle))
        .route("/habits/{definition_id}/history", get(habits::history))
        .route("/dashboard/{user_id}", get(dashboard::get_dashboard))
        .route(
            "/journal/{user_id}",
            post(journal::add_entry).get(journal::list_entries),
        )
        .route("/coach/ask", post(coach::ask))
        .route("/coach/suggest-habits", post(coach::suggest_habits))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}

/// Run a closure against the database on the blocking pool.
///
/// rusqlite is synchronous; every handler goes through here so the async
/// runtime never blocks on SQLite.
pub(crate) async fn with_db<T, F>(db: Arc<Mutex<Connection>>, f: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&Connection) -> Result<T, StoreError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let conn = db
            .lock()
            .map_err(|_| ApiError::internal("database lock poisoned"))?;
        f(&conn).map_err(ApiError::from)
    })
    .await
    .map_err(|e| ApiError::internal(format!("database task failed: {e}")))?
}
