use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::coach::HabitSuggestion;

use super::error::ApiError;
use super::AppState;

#[derive(Debug, Deserialize)]
pub struct CoachQuestion {
    pub text: String,
}

/// Forward a wellness question to the coach model.
pub async fn ask(
    State(state): State<AppState>,
    Json(body): Json<CoachQuestion>,
) -> Result<Json<Value>, ApiError> {
    let question = body.text.trim();
    if question.is_empty() {
        return Err(ApiError::bad_request("text must not be empty"));
    }

    let coach = state
        .coach
        .as_ref()
        .ok_or_else(ApiError::coach_not_configured)?;
    let answer = coach.ask(question).await?;
    Ok(Json(json!({ "answer": answer })))
}

#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    pub objective: String,
}

/// Ask the coach model for habit ideas serving an objective.
pub async fn suggest_habits(
    State(state): State<AppState>,
    Json(body): Json<SuggestionRequest>,
) -> Result<Json<Vec<HabitSuggestion>>, ApiError> {
    let objective = body.objective.trim();
    if objective.is_empty() {
        return Err(ApiError::bad_request("objective must not be empty"));
    }

    let coach = state
        .coach
        .as_ref()
        .ok_or_else(ApiError::coach_not_configured)?;
    let suggestions = coach.suggest_habits(objective).await?;
    Ok(Json(suggestions))
}
