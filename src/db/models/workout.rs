use crate::db::enums::{EffortLevel, WorkoutType};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Workout log models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::workout_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct WorkoutLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub training_plan_id: Option<Uuid>,
    pub date: chrono::NaiveDate,
    pub workout_type: WorkoutType,
    pub planned_distance: Option<f64>,
    pub planned_duration: Option<i32>,
    pub actual_distance: Option<f64>,
    pub actual_duration: Option<i32>,
    pub effort_level: Option<EffortLevel>,
    pub notes: Option<String>,
    pub completed: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable, Clone, Debug)]
#[diesel(table_name = crate::schema::workout_logs)]
pub struct NewWorkoutLog {
    pub user_id: Uuid,
    pub training_plan_id: Option<Uuid>,
    pub date: chrono::NaiveDate,
    pub workout_type: WorkoutType,
    pub planned_distance: Option<f64>,
    pub planned_duration: Option<i32>,
    pub completed: bool,
}

// Workout API DTOs
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogWorkoutRequest {
    pub actual_distance: Option<f64>,
    pub actual_duration: Option<i32>,
    pub effort_level: Option<EffortLevel>,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct SkipWorkoutRequest {
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct CalendarQuery {
    pub from: chrono::NaiveDate,
    pub to: chrono::NaiveDate,
}

/// A workout log decorated for calendar display: the planned distance is
/// formatted in the owning plan's display unit.
#[derive(Serialize)]
pub struct CalendarEntry {
    #[serde(flatten)]
    pub workout: WorkoutLog,
    pub display_distance: Option<String>,
}
