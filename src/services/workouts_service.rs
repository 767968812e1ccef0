use std::collections::HashMap;

use diesel::prelude::*;

use crate::{
    db::enums::DistanceUnit,
    db::models::workout::{CalendarEntry, CalendarQuery, LogWorkoutRequest, SkipWorkoutRequest, WorkoutLog},
    db::repositories::{PlansRepo, WorkoutsRepo},
    error::AppError,
    services::context::RequestContext,
    utils::distance::{convert_distance, format_distance},
    validation::workout::{validate_calendar_query, validate_log_workout},
};

pub struct WorkoutsService;

impl WorkoutsService {
    /// Record the result of an owned workout and mark it completed.
    pub fn log(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        workout_id: uuid::Uuid,
        req: &LogWorkoutRequest,
    ) -> Result<WorkoutLog, AppError> {
        validate_log_workout(req)?;

        if WorkoutsRepo::find_by_id_for_user(conn, ctx.user_id, workout_id)?.is_none() {
            return Err(AppError::not_found("workout"));
        }

        let updated = WorkoutsRepo::mark_completed(
            conn,
            ctx.user_id,
            workout_id,
            req.actual_distance,
            req.actual_duration,
            req.effort_level.clone(),
            req.notes.clone(),
        )?;
        Ok(updated)
    }

    /// Mark an owned workout completed without results.
    pub fn skip(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        workout_id: uuid::Uuid,
        req: &SkipWorkoutRequest,
    ) -> Result<WorkoutLog, AppError> {
        if WorkoutsRepo::find_by_id_for_user(conn, ctx.user_id, workout_id)?.is_none() {
            return Err(AppError::not_found("workout"));
        }

        let notes = req
            .notes
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| "Skipped".to_string());

        let updated =
            WorkoutsRepo::mark_completed(conn, ctx.user_id, workout_id, None, None, None, Some(notes))?;
        Ok(updated)
    }

    /// The caller's workouts in an inclusive date range, ordered by date,
    /// with planned distances formatted in each owning plan's display unit.
    /// Stored distances are miles; logs whose plan is gone fall back to
    /// miles.
    pub fn calendar(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        query: &CalendarQuery,
    ) -> Result<Vec<CalendarEntry>, AppError> {
        validate_calendar_query(query)?;

        let logs = WorkoutsRepo::list_between(conn, ctx.user_id, query.from, query.to)?;

        let mut units: HashMap<uuid::Uuid, DistanceUnit> = HashMap::new();
        for log in &logs {
            if let Some(plan_id) = log.training_plan_id {
                if !units.contains_key(&plan_id) {
                    if let Some(plan) = PlansRepo::find_by_id_for_user(conn, ctx.user_id, plan_id)? {
                        units.insert(plan_id, plan.distance_unit);
                    }
                }
            }
        }

        let entries = logs
            .into_iter()
            .map(|workout| {
                let unit = workout
                    .training_plan_id
                    .and_then(|plan_id| units.get(&plan_id).copied())
                    .unwrap_or(DistanceUnit::Mi);
                let display_distance = workout
                    .planned_distance
                    .map(|miles| format_distance(Some(convert_distance(miles, unit)), unit));
                CalendarEntry {
                    workout,
                    display_distance,
                }
            })
            .collect();

        Ok(entries)
    }
}
