use crate::{
    AppState,
    db::models::api::ApiResponse,
    db::models::auth::AuthUser,
    db::models::workout::{CalendarQuery, LogWorkoutRequest, SkipWorkoutRequest},
    services::context::RequestContext,
    services::workouts_service::WorkoutsService,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

pub async fn get_calendar(
    State(state): State<Arc<AppState>>,
    auth_user: AuthUser,
    Query(params): Query<CalendarQuery>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let ctx = RequestContext {
        user_id: auth_user.id,
    };

    match WorkoutsService::calendar(&mut conn, &ctx, &params) {
        Ok(entries) => {
            let response = ApiResponse::success(entries, "Workouts retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn log_workout(
    State(state): State<Arc<AppState>>,
    auth_user: AuthUser,
    Path(workout_id): Path<Uuid>,
    Json(payload): Json<LogWorkoutRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let ctx = RequestContext {
        user_id: auth_user.id,
    };

    match WorkoutsService::log(&mut conn, &ctx, workout_id, &payload) {
        Ok(workout) => {
            let response = ApiResponse::success(workout, "Workout logged successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn skip_workout(
    State(state): State<Arc<AppState>>,
    auth_user: AuthUser,
    Path(workout_id): Path<Uuid>,
    Json(payload): Json<SkipWorkoutRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let ctx = RequestContext {
        user_id: auth_user.id,
    };

    match WorkoutsService::skip(&mut conn, &ctx, workout_id, &payload) {
        Ok(workout) => {
            let response = ApiResponse::success(workout, "Workout skipped");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}
