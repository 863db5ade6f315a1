use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::store::types::{JournalEntry, Mood};
use crate::store::{journal, parse_date};

use super::error::ApiError;
use super::{with_db, AppState};

#[derive(Debug, Deserialize)]
pub struct JournalCreateRequest {
    pub date: String,
    pub mood: String,
    pub content: Option<String>,
}

pub async fn add_entry(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<JournalCreateRequest>,
) -> Result<Json<JournalEntry>, ApiError> {
    let date = parse_date(&body.date)?;
    let mood: Mood = body.mood.parse().map_err(ApiError::bad_request)?;
    // an entry may omit content, but blank text is treated as absent
    let content = body
        .content
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());

    let content = content.map(str::to_string);
    let entry = with_db(state.db, move |conn| {
        journal::add_entry(conn, &user_id, date, mood, content.as_deref())
    })
    .await?;
    Ok(Json(entry))
}

pub async fn list_entries(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<JournalEntry>>, ApiError> {
    let entries = with_db(state.db, move |conn| {
        journal::list_entries(conn, &user_id)
    })
    .await?;
    Ok(Json(entries))
}
