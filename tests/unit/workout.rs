use chrono::NaiveDate;
use runova_backend::db::models::workout::{CalendarQuery, LogWorkoutRequest};
use runova_backend::validation::workout::{validate_calendar_query, validate_log_workout};

#[test]
fn log_workout_validation_rules() {
    let valid = LogWorkoutRequest {
        actual_distance: Some(6.2),
        actual_duration: Some(55),
        effort_level: None,
        notes: None,
    };
    assert!(validate_log_workout(&valid).is_ok());

    let invalid = LogWorkoutRequest {
        actual_distance: Some(-0.5),
        actual_duration: None,
        effort_level: None,
        notes: None,
    };
    assert!(validate_log_workout(&invalid).is_err());
}

#[test]
fn calendar_query_validation_rules() {
    let from = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
    let to = NaiveDate::from_ymd_opt(2025, 5, 7).unwrap();

    assert!(validate_calendar_query(&CalendarQuery { from, to }).is_ok());
    assert!(validate_calendar_query(&CalendarQuery { from, to: from }).is_ok());
    assert!(validate_calendar_query(&CalendarQuery { from: to, to: from }).is_err());
}
