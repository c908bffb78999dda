use axum::extract::{Query, State};
use axum::Json;

use goalpost_core::models::goal::Goal;
use goalpost_core::query::{filter_and_sort, ListParams};

use crate::state::AppState;

/// `GET /v1/goals?query=&sort=`: substring match on `description`.
pub async fn list_goals(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Goal>> {
    let store = state.store.lock().await;
    let goals = filter_and_sort(store.goals(), &params)
        .into_iter()
        .cloned()
        .collect();
    Json(goals)
}
