use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::store::status::{self, HabitStatus};
use crate::store::{parse_date, users};

use super::error::ApiError;
use super::{with_db, AppState};

// TODO: replace the placeholder activity/sleep blocks once device ingestion lands
const PLACEHOLDER_STEPS: u32 = 7890;
const PLACEHOLDER_SLEEP: &str = "5h42min";
const DAILY_INSIGHT: &str =
    "On days when you hit your step goal, your deep sleep improves by about 15%.";

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// Date to render, `YYYY-MM-DD`. Defaults to today (UTC).
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ActivityData {
    pub steps: u32,
}

#[derive(Debug, Serialize)]
pub struct SleepData {
    pub duration: String,
}

/// The mobile client's home-screen payload. Field names are camelCase to
/// match what the client already parses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub user_name: String,
    pub date: NaiveDate,
    pub activity: ActivityData,
    pub sleep: SleepData,
    pub daily_insight: String,
    pub habits: Vec<HabitStatus>,
}

pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let date = match &query.date {
        Some(raw) => parse_date(raw)?,
        None => chrono::Utc::now().date_naive(),
    };

    let (user, habits) = with_db(state.db, move |conn| {
        let user = users::get_user(conn, &user_id)?;
        let habits = status::dashboard_status(conn, &user.id, date)?;
        Ok((user, habits))
    })
    .await?;

    let first_name = user
        .name
        .split_whitespace()
        .next()
        .unwrap_or(user.name.as_str());

    Ok(Json(DashboardResponse {
        user_name: first_name.to_string(),
        date,
        activity: ActivityData {
            steps: PLACEHOLDER_STEPS,
        },
        sleep: SleepData {
            duration: PLACEHOLDER_SLEEP.to_string(),
        },
        daily_insight: DAILY_INSIGHT.to_string(),
        habits,
    }))
}
