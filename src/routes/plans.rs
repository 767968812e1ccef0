use crate::{
    AppState,
    db::models::api::ApiResponse,
    db::models::auth::AuthUser,
    db::models::plan::{DeletePlanRequest, GeneratePlanRequest, PlanListQuery, UpdatePlanRequest},
    services::context::RequestContext,
    services::plans_service::PlansService,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

pub async fn generate_plan(
    State(state): State<Arc<AppState>>,
    auth_user: AuthUser,
    Json(payload): Json<GeneratePlanRequest>,
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

    match PlansService::generate(&mut conn, &ctx, &state.llm, &payload).await {
        Ok(plan) => {
            let response = ApiResponse::success(plan, "Training plan generated successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn get_plans(
    State(state): State<Arc<AppState>>,
    auth_user: AuthUser,
    Query(params): Query<PlanListQuery>,
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

    match PlansService::list(&mut conn, &ctx, params.active.unwrap_or(false)) {
        Ok(plans) => {
            let response = ApiResponse::success(plans, "Training plans retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn get_plan(
    State(state): State<Arc<AppState>>,
    auth_user: AuthUser,
    Path(plan_id): Path<Uuid>,
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

    match PlansService::get(&mut conn, &ctx, plan_id) {
        Ok(plan) => {
            let response = ApiResponse::success(plan, "Training plan retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn update_plan(
    State(state): State<Arc<AppState>>,
    auth_user: AuthUser,
    Json(payload): Json<UpdatePlanRequest>,
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

    match PlansService::update(&mut conn, &ctx, &payload) {
        Ok(plan) => {
            let response = ApiResponse::success(plan, "Training plan updated successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn delete_plan(
    State(state): State<Arc<AppState>>,
    auth_user: AuthUser,
    Json(payload): Json<DeletePlanRequest>,
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

    match PlansService::delete(&mut conn, &ctx, &payload) {
        Ok(()) => {
            let response = ApiResponse::<()>::ok("Training plan deleted successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}
