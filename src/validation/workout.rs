use crate::db::models::workout::{CalendarQuery, LogWorkoutRequest};
use crate::error::AppError;

pub fn validate_log_workout(req: &LogWorkoutRequest) -> Result<(), AppError> {
    if let Some(distance) = req.actual_distance {
        if !distance.is_finite() || distance < 0.0 {
            return Err(AppError::validation("actualDistance must be non-negative"));
        }
    }
    if let Some(duration) = req.actual_duration {
        if duration < 0 {
            return Err(AppError::validation("actualDuration must be non-negative"));
        }
    }
    if let Some(notes) = &req.notes {
        if notes.len() > 10000 {
            return Err(AppError::validation(
                "notes is too long (max 10000 characters)",
            ));
        }
    }
    Ok(())
}

pub fn validate_calendar_query(query: &CalendarQuery) -> Result<(), AppError> {
    if query.from > query.to {
        return Err(AppError::validation("from must not be after to"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_workout_bounds() {
        let ok = LogWorkoutRequest {
            actual_distance: Some(5.5),
            actual_duration: Some(42),
            effort_level: None,
            notes: Some("Felt good".to_string()),
        };
        assert!(validate_log_workout(&ok).is_ok());

        let negative_distance = LogWorkoutRequest {
            actual_distance: Some(-1.0),
            actual_duration: None,
            effort_level: None,
            notes: None,
        };
        assert!(validate_log_workout(&negative_distance).is_err());

        let negative_duration = LogWorkoutRequest {
            actual_distance: None,
            actual_duration: Some(-5),
            effort_level: None,
            notes: None,
        };
        assert!(validate_log_workout(&negative_duration).is_err());
    }

    #[test]
    fn calendar_range_ordering() {
        let from = chrono::NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let to = chrono::NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        assert!(validate_calendar_query(&CalendarQuery { from, to }).is_ok());
        assert!(validate_calendar_query(&CalendarQuery { from: to, to: from }).is_err());
    }
}
