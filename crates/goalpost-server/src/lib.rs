//! goalpost-server
//!
//! HTTP surface of the Goalpost service: route table, handlers and the
//! shared state they run against.

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower::Layer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::NormalizePathLayer;

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the full route table over `state`.
///
/// A trailing slash is trimmed before routing, so `/v1/goals/` and
/// `/v1/goals` are the same route. Anything that matches neither path nor
/// method ends in [`routes::fallback::not_found`].
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        .route("/health", get(routes::health::health_check))
        // Goals
        .route("/v1/goals", get(routes::goals::list_goals))
        // Current user
        .route("/v1/me", get(routes::me::get_me))
        .route(
            "/v1/me/goals/{goal_id}/accept",
            post(routes::me::accept_goal),
        )
        .route(
            "/v1/me/goals/{goal_id}/achieve",
            post(routes::me::achieve_goal),
        )
        .route(
            "/v1/me/goals/{goal_id}/challenge/{user_id}",
            post(routes::me::challenge_goal),
        )
        .route(
            "/v1/me/goals/{goal_id}/gift/{user_id}",
            post(routes::me::gift_goal),
        )
        // Categories
        .route("/v1/categories", get(routes::categories::list_categories))
        .route(
            "/v1/categories/{category_id}/goals",
            get(routes::categories::list_category_goals),
        )
        .fallback(routes::fallback::not_found)
        .method_not_allowed_fallback(routes::fallback::not_found)
        .layer(axum_mw::from_fn(middleware::request_log::log_request))
        .layer(cors)
        .with_state(state);

    // Router::layer runs after routing, so path rewriting has to wrap it.
    Router::new().fallback_service(NormalizePathLayer::trim_trailing_slash().layer(routes))
}
