use chrono::{Datelike, Duration, NaiveDate, Utc};
use diesel::prelude::*;

use crate::{
    db::enums::{DistanceUnit, RunningGoal},
    db::models::plan::{
        DeletePlanRequest, GeneratePlanRequest, NewTrainingPlan, PlanMetadataChanges, TrainingPlan,
        UpdatePlanRequest, WeekSchedule,
    },
    db::models::workout::NewWorkoutLog,
    db::repositories::{PlansRepo, WorkoutsRepo},
    error::AppError,
    llm::{CompletionClient, SYSTEM_PROMPT, build_plan_prompt, parse_generated_plan},
    services::context::RequestContext,
    validation::plan::{validate_delete_plan, validate_generate_plan, validate_update_plan},
};

/// Goal to plan length, as configuration data rather than branching.
const PLAN_DURATION_WEEKS: &[(RunningGoal, i64)] = &[
    (RunningGoal::FiveK, 8),
    (RunningGoal::TenK, 10),
    (RunningGoal::HalfMarathon, 12),
    (RunningGoal::Marathon, 16),
    (RunningGoal::Custom, 12),
];

const DEFAULT_PLAN_WEEKS: i64 = 12;

pub fn duration_weeks(goal: &RunningGoal) -> i64 {
    PLAN_DURATION_WEEKS
        .iter()
        .find(|(candidate, _)| candidate == goal)
        .map(|(_, weeks)| *weeks)
        .unwrap_or(DEFAULT_PLAN_WEEKS)
}

/// Start/end dates for a plan: counted back from the race when one is set,
/// forward from `today` otherwise. `today` is a parameter so tests control
/// the clock.
pub fn plan_window(
    goal: &RunningGoal,
    race_date: Option<NaiveDate>,
    today: NaiveDate,
) -> (NaiveDate, NaiveDate) {
    let weeks = duration_weeks(goal);
    let start = race_date
        .map(|race| race - Duration::weeks(weeks))
        .unwrap_or(today);
    let end = start + Duration::weeks(weeks);
    (start, end)
}

/// The Sunday on or before the given date; workout dates are laid out from
/// this anchor.
pub fn week_anchor(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// Turn the generated weekly schedule into one workout-log row per session.
/// Each week's workouts are dated anchor + (day - 1); the anchor advances
/// seven days per week.
pub fn expand_schedule(
    owner: uuid::Uuid,
    plan_id: uuid::Uuid,
    start_date: NaiveDate,
    weeks: &[WeekSchedule],
) -> Vec<NewWorkoutLog> {
    let mut rows = Vec::new();
    let mut anchor = week_anchor(start_date);
    for week in weeks {
        for workout in &week.workouts {
            rows.push(NewWorkoutLog {
                user_id: owner,
                training_plan_id: Some(plan_id),
                date: anchor + Duration::days(workout.day - 1),
                workout_type: workout.workout_type.clone(),
                planned_distance: workout.distance,
                planned_duration: workout.duration.map(|minutes| minutes.round() as i32),
                completed: false,
            });
        }
        anchor = anchor + Duration::weeks(1);
    }
    rows
}

pub struct PlansService;

impl PlansService {
    /// Generate a plan: validate, call the completion service, expand the
    /// schedule, persist. The plan row and its workout rows are written in
    /// one transaction so a failed bulk insert cannot leave a plan without
    /// its schedule.
    pub async fn generate(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        llm: &CompletionClient,
        req: &GeneratePlanRequest,
    ) -> Result<TrainingPlan, AppError> {
        let fields = validate_generate_plan(req)?;
        let unit = req.distance_unit.unwrap_or(DistanceUnit::Mi);
        let weeks = duration_weeks(&fields.goal);
        let (start_date, end_date) =
            plan_window(&fields.goal, req.race_date, Utc::now().date_naive());

        let prompt = build_plan_prompt(req, weeks, unit);
        let completion = llm
            .complete(SYSTEM_PROMPT, &prompt)
            .await
            .map_err(|e| AppError::upstream(e.to_string()))?;
        let generated =
            parse_generated_plan(&completion).map_err(|e| AppError::upstream(e.to_string()))?;

        let weekly_schedule = serde_json::to_value(&generated.weekly_schedule)
            .map_err(|e| AppError::internal(format!("Failed to encode schedule: {}", e)))?;

        let new_plan = NewTrainingPlan {
            user_id: ctx.user_id,
            plan_name: fields.plan_name,
            goal: fields.goal,
            training_frequency: fields.training_frequency,
            race_date: req.race_date,
            goal_time: req.goal_time.clone(),
            personal_best_time: req.personal_best_time.clone(),
            notes: req.notes.clone(),
            special_events: req.special_events.clone(),
            injury_history: req.injury_history.clone(),
            start_date,
            end_date,
            weekly_schedule,
            ai_recommendations: generated.recommendations.clone(),
            is_active: true,
            distance_unit: unit,
        };

        let plan = conn.transaction::<TrainingPlan, AppError, _>(|conn| {
            let plan = PlansRepo::insert(conn, &new_plan)?;
            let rows =
                expand_schedule(ctx.user_id, plan.id, start_date, &generated.weekly_schedule);
            if !rows.is_empty() {
                WorkoutsRepo::insert_batch(conn, &rows)?;
            }
            Ok(plan)
        })?;

        Ok(plan)
    }

    pub fn get(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        plan_id: uuid::Uuid,
    ) -> Result<TrainingPlan, AppError> {
        PlansRepo::find_by_id_for_user(conn, ctx.user_id, plan_id)?
            .ok_or_else(|| AppError::not_found("plan"))
    }

    pub fn list(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        only_active: bool,
    ) -> Result<Vec<TrainingPlan>, AppError> {
        Ok(PlansRepo::list_for_user(conn, ctx.user_id, only_active)?)
    }

    /// Update the editable metadata columns. The existence check is scoped to
    /// the caller, so a plan owned by someone else reads as missing.
    pub fn update(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        req: &UpdatePlanRequest,
    ) -> Result<TrainingPlan, AppError> {
        let (plan_id, fields) = validate_update_plan(req)?;

        if PlansRepo::find_by_id_for_user(conn, ctx.user_id, plan_id)?.is_none() {
            return Err(AppError::not_found("plan"));
        }

        let changes = PlanMetadataChanges {
            plan_name: fields.plan_name,
            goal: fields.goal,
            training_frequency: fields.training_frequency,
            race_date: req.race_date,
            goal_time: req.goal_time.clone(),
            personal_best_time: req.personal_best_time.clone(),
            notes: req.notes.clone(),
            special_events: req.special_events.clone(),
            injury_history: req.injury_history.clone(),
            updated_at: Utc::now(),
        };

        let updated = PlansRepo::update_metadata(conn, ctx.user_id, plan_id, &changes)?;
        Ok(updated)
    }

    /// Delete the plan row only. Workout logs keep their rows; the foreign
    /// key nulls their plan reference.
    pub fn delete(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        req: &DeletePlanRequest,
    ) -> Result<(), AppError> {
        let plan_id = validate_delete_plan(req)?;

        if PlansRepo::find_by_id_for_user(conn, ctx.user_id, plan_id)?.is_none() {
            return Err(AppError::not_found("plan"));
        }

        PlansRepo::delete_by_id_for_user(conn, ctx.user_id, plan_id)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::enums::WorkoutType;
    use crate::db::models::plan::ScheduledWorkout;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn duration_table() {
        assert_eq!(duration_weeks(&RunningGoal::FiveK), 8);
        assert_eq!(duration_weeks(&RunningGoal::TenK), 10);
        assert_eq!(duration_weeks(&RunningGoal::HalfMarathon), 12);
        assert_eq!(duration_weeks(&RunningGoal::Marathon), 16);
        assert_eq!(duration_weeks(&RunningGoal::Custom), 12);
    }

    #[test]
    fn window_counts_back_from_race_date() {
        // 10k race on 2025-06-01: ten weeks back lands on 2025-03-23.
        let (start, end) =
            plan_window(&RunningGoal::TenK, Some(date(2025, 6, 1)), date(2025, 1, 1));
        assert_eq!(start, date(2025, 3, 23));
        assert_eq!(end, date(2025, 6, 1));
    }

    #[test]
    fn window_starts_today_without_race_date() {
        let today = date(2025, 4, 15);
        let (start, end) = plan_window(&RunningGoal::Marathon, None, today);
        assert_eq!(start, today);
        assert_eq!(end, today + Duration::weeks(16));
    }

    #[test]
    fn anchor_is_previous_sunday() {
        // 2025-03-26 is a Wednesday; its week starts Sunday 2025-03-23.
        assert_eq!(week_anchor(date(2025, 3, 26)), date(2025, 3, 23));
        // A Sunday anchors itself.
        assert_eq!(week_anchor(date(2025, 3, 23)), date(2025, 3, 23));
    }

    fn workout(day: i64, workout_type: WorkoutType) -> ScheduledWorkout {
        ScheduledWorkout {
            day,
            workout_type,
            distance: Some(4.0),
            duration: Some(40.0),
            description: "Steady effort".to_string(),
            intensity: Some("easy".to_string()),
        }
    }

    #[test]
    fn expansion_yields_one_row_per_scheduled_workout() {
        let weeks = vec![
            WeekSchedule {
                week: 1,
                total_mileage: 12.0,
                workouts: vec![
                    workout(2, WorkoutType::EasyRun),
                    workout(4, WorkoutType::Tempo),
                    workout(7, WorkoutType::LongRun),
                ],
            },
            WeekSchedule {
                week: 2,
                total_mileage: 14.0,
                workouts: vec![workout(3, WorkoutType::Intervals)],
            },
        ];

        let owner = uuid::Uuid::new_v4();
        let plan_id = uuid::Uuid::new_v4();
        let rows = expand_schedule(owner, plan_id, date(2025, 3, 26), &weeks);

        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.user_id == owner));
        assert!(rows.iter().all(|r| r.training_plan_id == Some(plan_id)));
        assert!(rows.iter().all(|r| !r.completed));

        // Week anchor is Sunday 2025-03-23; day N lands on anchor + (N - 1).
        assert_eq!(rows[0].date, date(2025, 3, 24));
        assert_eq!(rows[1].date, date(2025, 3, 26));
        assert_eq!(rows[2].date, date(2025, 3, 29));
        // Second week's anchor moves forward seven days.
        assert_eq!(rows[3].date, date(2025, 4, 1));
    }

    #[test]
    fn expansion_of_empty_schedule_is_empty() {
        let rows = expand_schedule(
            uuid::Uuid::new_v4(),
            uuid::Uuid::new_v4(),
            date(2025, 3, 26),
            &[],
        );
        assert!(rows.is_empty());
    }

    #[test]
    fn expansion_rounds_duration_to_whole_minutes() {
        let weeks = vec![WeekSchedule {
            week: 1,
            total_mileage: 5.0,
            workouts: vec![ScheduledWorkout {
                day: 1,
                workout_type: WorkoutType::Recovery,
                distance: Some(3.0),
                duration: Some(32.6),
                description: "Very easy jog".to_string(),
                intensity: Some("easy".to_string()),
            }],
        }];
        let rows = expand_schedule(
            uuid::Uuid::new_v4(),
            uuid::Uuid::new_v4(),
            date(2025, 3, 23),
            &weeks,
        );
        assert_eq!(rows[0].planned_duration, Some(33));
    }
}
