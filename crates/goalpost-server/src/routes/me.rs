use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use goalpost_audit::events::AuditEvent;
use goalpost_core::models::user::{GoalAction, User};

use crate::error::ApiError;
use crate::state::AppState;

/// Whose goal list a mutation lands in.
#[derive(Clone, Copy)]
enum Recipient<'a> {
    CurrentUser,
    User(&'a str),
}

pub async fn get_me(State(state): State<AppState>) -> Result<Json<User>, ApiError> {
    let store = state.store.lock().await;
    let user = store
        .current_user()
        .cloned()
        .ok_or_else(ApiError::user_not_found)?;
    Ok(Json(user))
}

pub async fn accept_goal(
    State(state): State<AppState>,
    Path(goal_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    record(&state, &goal_id, Recipient::CurrentUser, GoalAction::Accept).await
}

pub async fn achieve_goal(
    State(state): State<AppState>,
    Path(goal_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    record(&state, &goal_id, Recipient::CurrentUser, GoalAction::Achieve).await
}

pub async fn challenge_goal(
    State(state): State<AppState>,
    Path((goal_id, user_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    record(&state, &goal_id, Recipient::User(&user_id), GoalAction::Challenge).await
}

pub async fn gift_goal(
    State(state): State<AppState>,
    Path((goal_id, user_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    record(&state, &goal_id, Recipient::User(&user_id), GoalAction::Gift).await
}

/// Look up the goal and the recipient, append, persist all users.
///
/// Nothing is written unless both lookups succeed.
async fn record(
    state: &AppState,
    goal_id: &str,
    recipient: Recipient<'_>,
    action: GoalAction,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.lock().await;

    let goal = store
        .find_goal(goal_id)
        .cloned()
        .ok_or_else(ApiError::goal_not_found)?;
    let slot = match recipient {
        Recipient::CurrentUser => store.current_user_slot(),
        Recipient::User(user_id) => store.user_slot(user_id),
    }
    .ok_or_else(ApiError::user_not_found)?;

    let actor_id = store
        .current_user()
        .map(|user| user.id.canonical())
        .unwrap_or_else(|| "anonymous".to_string());
    let mut event = AuditEvent::new(action.as_str(), "goal", goal.id.canonical(), actor_id)
        .with_details(json!({ "description": goal.description }));

    let user = store.record_goal(slot, action, goal)?;
    if let Recipient::User(_) = recipient {
        event = event.with_target(user.id.canonical());
    }
    event.emit();

    Ok(StatusCode::OK)
}
