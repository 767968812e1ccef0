use chrono::NaiveDate;
use runova_backend::db::enums::{RunningGoal, WorkoutType};
use runova_backend::db::models::plan::{GeneratePlanRequest, ScheduledWorkout, WeekSchedule};
use runova_backend::services::plans_service::{duration_weeks, expand_schedule, plan_window};
use runova_backend::validation::plan::validate_generate_plan;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn duration_follows_goal_table() {
    assert_eq!(duration_weeks(&RunningGoal::FiveK), 8);
    assert_eq!(duration_weeks(&RunningGoal::TenK), 10);
    assert_eq!(duration_weeks(&RunningGoal::HalfMarathon), 12);
    assert_eq!(duration_weeks(&RunningGoal::Marathon), 16);
    assert_eq!(duration_weeks(&RunningGoal::Custom), 12);
}

#[test]
fn window_example_from_race_date() {
    // 10k with a race on 2025-06-01 trains for ten weeks from 2025-03-23.
    let (start, end) = plan_window(
        &RunningGoal::TenK,
        Some(date(2025, 6, 1)),
        date(2024, 12, 25),
    );
    assert_eq!(start, date(2025, 3, 23));
    assert_eq!(end, date(2025, 6, 1));
}

#[test]
fn window_uses_injected_today_without_race_date() {
    let (start, end) = plan_window(&RunningGoal::FiveK, None, date(2025, 7, 4));
    assert_eq!(start, date(2025, 7, 4));
    assert_eq!(end, date(2025, 8, 29));
}

#[test]
fn expansion_row_count_matches_schedule() {
    let weeks: Vec<WeekSchedule> = (1..=3)
        .map(|week| WeekSchedule {
            week,
            total_mileage: 15.0,
            workouts: vec![
                ScheduledWorkout {
                    day: 2,
                    workout_type: WorkoutType::EasyRun,
                    distance: Some(3.0),
                    duration: Some(30.0),
                    description: "Easy run".to_string(),
                    intensity: Some("easy".to_string()),
                },
                ScheduledWorkout {
                    day: 6,
                    workout_type: WorkoutType::LongRun,
                    distance: Some(7.0),
                    duration: Some(70.0),
                    description: "Long run".to_string(),
                    intensity: Some("moderate".to_string()),
                },
            ],
        })
        .collect();

    let rows = expand_schedule(
        uuid::Uuid::new_v4(),
        uuid::Uuid::new_v4(),
        date(2025, 3, 23),
        &weeks,
    );

    let expected: usize = weeks.iter().map(|w| w.workouts.len()).sum();
    assert_eq!(rows.len(), expected);

    // Anchors advance exactly seven days per week.
    assert_eq!(rows[0].date, date(2025, 3, 24));
    assert_eq!(rows[2].date, date(2025, 3, 31));
    assert_eq!(rows[4].date, date(2025, 4, 7));
}

#[test]
fn missing_required_fields_fail_before_any_upstream_call() {
    let req = GeneratePlanRequest {
        plan_name: None,
        goal: Some(RunningGoal::TenK),
        training_frequency: Some(4),
        race_date: None,
        goal_time: None,
        personal_best_time: None,
        notes: None,
        special_events: None,
        injury_history: None,
        distance_unit: None,
    };
    assert!(validate_generate_plan(&req).is_err());
}
