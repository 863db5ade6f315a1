use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::store::types::User;
use crate::store::users;

use super::error::ApiError;
use super::{with_db, AppState};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub email: String,
}

/// Find-or-create a user by email. No passwords; the email is the identity.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<User>, ApiError> {
    let name = body.name.trim().to_string();
    let email = body.email.trim().to_string();
    if name.is_empty() {
        return Err(ApiError::bad_request("name must not be empty"));
    }
    if email.is_empty() {
        return Err(ApiError::bad_request("email must not be empty"));
    }

    let user = with_db(state.db, move |conn| {
        users::find_or_create_user(conn, &name, &email)
    })
    .await?;
    Ok(Json(user))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user = with_db(state.db, move |conn| users::get_user(conn, &user_id)).await?;
    Ok(Json(user))
}

#[derive(Debug, Deserialize)]
pub struct GoalUpdateRequest {
    pub main_goal: String,
}

pub async fn update_goal(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<GoalUpdateRequest>,
) -> Result<Json<User>, ApiError> {
    let goal = body.main_goal.trim().to_string();
    if goal.is_empty() {
        return Err(ApiError::bad_request("main_goal must not be empty"));
    }

    let user = with_db(state.db, move |conn| {
        users::update_main_goal(conn, &user_id, &goal)
    })
    .await?;
    Ok(Json(user))
}
