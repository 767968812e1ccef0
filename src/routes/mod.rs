pub mod auth;
pub mod plans;
pub mod workouts;

use crate::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

/// Routes that require an authenticated user. The unauthenticated auth
/// routes are assembled in `main.rs` so the auth middleware does not wrap
/// them.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/auth/profile", get(auth::get_profile))
        .route("/plans/generate", post(plans::generate_plan))
        .route("/plans", get(plans::get_plans))
        .route("/plans", put(plans::update_plan))
        .route("/plans", delete(plans::delete_plan))
        .route("/plans/:plan_id", get(plans::get_plan))
        .route("/workouts", get(workouts::get_calendar))
        .route("/workouts/:workout_id/log", put(workouts::log_workout))
        .route("/workouts/:workout_id/skip", put(workouts::skip_workout))
        .with_state(state)
}
