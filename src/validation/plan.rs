use crate::db::enums::RunningGoal;
use crate::db::models::plan::{DeletePlanRequest, GeneratePlanRequest, UpdatePlanRequest};
use crate::error::AppError;

/// The required fields of a generate/update request, present and in range.
pub struct ValidPlanFields {
    pub plan_name: String,
    pub goal: RunningGoal,
    pub training_frequency: i32,
}

fn required_fields(
    plan_name: &Option<String>,
    goal: &Option<RunningGoal>,
    training_frequency: Option<i32>,
) -> Result<ValidPlanFields, AppError> {
    let plan_name = match plan_name.as_deref() {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => return Err(AppError::validation("planName is required")),
    };
    let goal = goal
        .clone()
        .ok_or_else(|| AppError::validation("goal is required"))?;
    let training_frequency = match training_frequency {
        None => return Err(AppError::validation("trainingFrequency is required")),
        Some(freq) if !(1..=7).contains(&freq) => {
            return Err(AppError::validation(
                "trainingFrequency must be between 1 and 7",
            ));
        }
        Some(freq) => freq,
    };
    Ok(ValidPlanFields {
        plan_name,
        goal,
        training_frequency,
    })
}

pub fn validate_generate_plan(req: &GeneratePlanRequest) -> Result<ValidPlanFields, AppError> {
    required_fields(&req.plan_name, &req.goal, req.training_frequency)
}

pub fn validate_update_plan(
    req: &UpdatePlanRequest,
) -> Result<(uuid::Uuid, ValidPlanFields), AppError> {
    let plan_id = req
        .plan_id
        .ok_or_else(|| AppError::validation("planId is required"))?;
    let fields = required_fields(&req.plan_name, &req.goal, req.training_frequency)?;
    Ok((plan_id, fields))
}

pub fn validate_delete_plan(req: &DeletePlanRequest) -> Result<uuid::Uuid, AppError> {
    req.plan_id
        .ok_or_else(|| AppError::validation("planId is required"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate_request() -> GeneratePlanRequest {
        GeneratePlanRequest {
            plan_name: Some("Spring 10k".to_string()),
            goal: Some(RunningGoal::TenK),
            training_frequency: Some(4),
            race_date: None,
            goal_time: None,
            personal_best_time: None,
            notes: None,
            special_events: None,
            injury_history: None,
            distance_unit: None,
        }
    }

    #[test]
    fn generate_requires_name_goal_and_frequency() {
        let fields = validate_generate_plan(&generate_request()).unwrap();
        assert_eq!(fields.plan_name, "Spring 10k");
        assert_eq!(fields.goal, RunningGoal::TenK);
        assert_eq!(fields.training_frequency, 4);

        let mut req = generate_request();
        req.plan_name = None;
        assert!(validate_generate_plan(&req).is_err());

        let mut req = generate_request();
        req.plan_name = Some("   ".to_string());
        assert!(validate_generate_plan(&req).is_err());

        let mut req = generate_request();
        req.goal = None;
        assert!(validate_generate_plan(&req).is_err());

        let mut req = generate_request();
        req.training_frequency = None;
        assert!(validate_generate_plan(&req).is_err());
    }

    #[test]
    fn generate_rejects_out_of_range_frequency() {
        for freq in [0, 8, -1] {
            let mut req = generate_request();
            req.training_frequency = Some(freq);
            assert!(validate_generate_plan(&req).is_err());
        }
        for freq in 1..=7 {
            let mut req = generate_request();
            req.training_frequency = Some(freq);
            assert!(validate_generate_plan(&req).is_ok());
        }
    }

    #[test]
    fn update_requires_plan_id() {
        let req = UpdatePlanRequest {
            plan_id: None,
            plan_name: Some("Renamed".to_string()),
            goal: Some(RunningGoal::FiveK),
            training_frequency: Some(3),
            race_date: None,
            goal_time: None,
            personal_best_time: None,
            notes: None,
            special_events: None,
            injury_history: None,
        };
        assert!(validate_update_plan(&req).is_err());

        let req = UpdatePlanRequest {
            plan_id: Some(uuid::Uuid::new_v4()),
            ..req
        };
        assert!(validate_update_plan(&req).is_ok());
    }

    #[test]
    fn delete_requires_plan_id() {
        assert!(validate_delete_plan(&DeletePlanRequest { plan_id: None }).is_err());
        assert!(
            validate_delete_plan(&DeletePlanRequest {
                plan_id: Some(uuid::Uuid::new_v4())
            })
            .is_ok()
        );
    }
}
