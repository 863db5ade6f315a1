use axum::extract::{Path, State};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::store::status::{self, HabitHistory};
use crate::store::types::HabitDefinition;
use crate::store::{habits, ledger, parse_date};

use super::error::ApiError;
use super::{with_db, AppState};

#[derive(Debug, Deserialize)]
pub struct DefinitionCreateRequest {
    pub name: String,
    pub icon: String,
}

pub async fn create_definition(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<DefinitionCreateRequest>,
) -> Result<Json<HabitDefinition>, ApiError> {
    let name = body.name.trim().to_string();
    let icon = body.icon.trim().to_string();
    if name.is_empty() {
        return Err(ApiError::bad_request("name must not be empty"));
    }
    if icon.is_empty() {
        return Err(ApiError::bad_request("icon must not be empty"));
    }

    let definition = with_db(state.db, move |conn| {
        habits::create_definition(conn, &user_id, &name, &icon)
    })
    .await?;
    Ok(Json(definition))
}

pub async fn list_definitions(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<HabitDefinition>>, ApiError> {
    let definitions = with_db(state.db, move |conn| {
        habits::list_definitions(conn, &user_id)
    })
    .await?;
    Ok(Json(definitions))
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub completed: bool,
    pub date: NaiveDate,
}

/// Flip a habit's completion state for one date.
pub async fn toggle(
    State(state): State<AppState>,
    Path(definition_id): Path<String>,
    Json(body): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, ApiError> {
    let date = parse_date(&body.date)?;

    tracing::info!(definition_id = %definition_id, date = %date, "toggle requested");

    let completed = with_db(state.db, move |conn| {
        ledger::toggle(conn, &definition_id, date)
    })
    .await?;
    Ok(Json(ToggleResponse { completed, date }))
}

/// Streak and full completion history for a habit, as of today (UTC).
pub async fn history(
    State(state): State<AppState>,
    Path(definition_id): Path<String>,
) -> Result<Json<HabitHistory>, ApiError> {
    let today = chrono::Utc::now().date_naive();
    let history = with_db(state.db, move |conn| {
        status::streak(conn, &definition_id, today)
    })
    .await?;
    Ok(Json(history))
}
