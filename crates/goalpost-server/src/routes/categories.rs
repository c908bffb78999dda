use axum::extract::{Path, Query, State};
use axum::Json;

use goalpost_core::models::category::Category;
use goalpost_core::models::goal::Goal;
use goalpost_core::query::{filter_and_sort, ListParams};

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /v1/categories?query=&sort=`: substring match on `name`.
pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Category>> {
    let store = state.store.lock().await;
    let categories = filter_and_sort(store.categories(), &params)
        .into_iter()
        .cloned()
        .collect();
    Json(categories)
}

pub async fn list_category_goals(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<Json<Vec<Goal>>, ApiError> {
    let store = state.store.lock().await;
    if store.find_category(&category_id).is_none() {
        return Err(ApiError::category_not_found());
    }

    let goals = store
        .goals_in_category(&category_id)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(goals))
}
