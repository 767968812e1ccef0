use crate::db::enums::{DistanceUnit, RunningGoal, WorkoutType};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Training plan models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::training_plans)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TrainingPlan {
    pub id: Uuid,
    pub user_id: Uuid,
    pub plan_name: String,
    pub goal: RunningGoal,
    pub training_frequency: i32,
    pub race_date: Option<chrono::NaiveDate>,
    pub goal_time: Option<String>,
    pub personal_best_time: Option<String>,
    pub notes: Option<String>,
    pub special_events: Option<String>,
    pub injury_history: Option<String>,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub weekly_schedule: serde_json::Value,
    pub ai_recommendations: Option<String>,
    pub is_active: bool,
    pub distance_unit: DistanceUnit,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::training_plans)]
pub struct NewTrainingPlan {
    pub user_id: Uuid,
    pub plan_name: String,
    pub goal: RunningGoal,
    pub training_frequency: i32,
    pub race_date: Option<chrono::NaiveDate>,
    pub goal_time: Option<String>,
    pub personal_best_time: Option<String>,
    pub notes: Option<String>,
    pub special_events: Option<String>,
    pub injury_history: Option<String>,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub weekly_schedule: serde_json::Value,
    pub ai_recommendations: Option<String>,
    pub is_active: bool,
    pub distance_unit: DistanceUnit,
}

/// Editable metadata columns. The generated schedule, the recommendation text
/// and the display unit are fixed at creation and never written here.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::training_plans)]
#[diesel(treat_none_as_null = true)]
pub struct PlanMetadataChanges {
    pub plan_name: String,
    pub goal: RunningGoal,
    pub training_frequency: i32,
    pub race_date: Option<chrono::NaiveDate>,
    pub goal_time: Option<String>,
    pub personal_best_time: Option<String>,
    pub notes: Option<String>,
    pub special_events: Option<String>,
    pub injury_history: Option<String>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// One week of the generated schedule, stored verbatim as jsonb on the plan.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WeekSchedule {
    pub week: i32,
    pub total_mileage: f64,
    pub workouts: Vec<ScheduledWorkout>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledWorkout {
    /// Day-of-week index, 1 through 7, relative to the week anchor.
    pub day: i64,
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    pub distance: Option<f64>,
    pub duration: Option<f64>,
    pub description: String,
    pub intensity: Option<String>,
}

// Plan API DTOs
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePlanRequest {
    pub plan_name: Option<String>,
    pub goal: Option<RunningGoal>,
    pub training_frequency: Option<i32>,
    pub race_date: Option<chrono::NaiveDate>,
    pub goal_time: Option<String>,
    pub personal_best_time: Option<String>,
    pub notes: Option<String>,
    pub special_events: Option<String>,
    pub injury_history: Option<String>,
    pub distance_unit: Option<DistanceUnit>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlanRequest {
    pub plan_id: Option<Uuid>,
    pub plan_name: Option<String>,
    pub goal: Option<RunningGoal>,
    pub training_frequency: Option<i32>,
    pub race_date: Option<chrono::NaiveDate>,
    pub goal_time: Option<String>,
    pub personal_best_time: Option<String>,
    pub notes: Option<String>,
    pub special_events: Option<String>,
    pub injury_history: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePlanRequest {
    pub plan_id: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct PlanListQuery {
    pub active: Option<bool>,
}
