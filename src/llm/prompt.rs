use serde::{Deserialize, Serialize};

use crate::db::enums::DistanceUnit;
use crate::db::models::plan::{GeneratePlanRequest, WeekSchedule};
use crate::llm::client::CompletionError;

pub const SYSTEM_PROMPT: &str = "You are an expert running coach who creates detailed, \
personalized training plans. Always respond with valid JSON only.";

/// The JSON object the completion service is asked to produce.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlan {
    pub plan_name: Option<String>,
    pub weekly_schedule: Vec<WeekSchedule>,
    pub recommendations: Option<String>,
}

/// Deterministic coaching prompt: same inputs, same prompt text.
pub fn build_plan_prompt(req: &GeneratePlanRequest, weeks: i64, unit: DistanceUnit) -> String {
    let goal = req
        .goal
        .as_ref()
        .map(|g| g.as_str().replace('_', " "))
        .unwrap_or_else(|| "custom".to_string());
    let race_date = req
        .race_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "Not specified".to_string());
    let unit_word = match unit {
        DistanceUnit::Km => "kilometers",
        DistanceUnit::Mi => "miles",
    };

    format!(
        r#"You are an expert running coach. Create a detailed {weeks}-week training plan with the following specifications:

Runner Profile:
- Goal: {goal}
- Training Days Per Week: {frequency}
- Target Race Date: {race_date}
- Goal Time: {goal_time}
- Personal Best Time: {personal_best}
- Notes: {notes}
- Special Events: {special_events}
- Injury History: {injury_history}

Requirements:
1. Create a progressive training plan that builds safely
2. Include variety: easy runs, long runs, tempo runs, intervals, and recovery/rest days
3. Follow the 10% rule for weekly mileage increases
4. Include a taper period if preparing for a race
5. Provide specific guidance for each workout type
6. Take into account any special events, injury history, and training frequency

Return a JSON response with this exact structure:
{{
  "planName": "string - creative name for the plan",
  "weeklySchedule": [
    {{
      "week": 1,
      "totalMileage": number,
      "workouts": [
        {{
          "day": 1,
          "type": "easy_run" | "long_run" | "tempo" | "intervals" | "recovery" | "rest",
          "distance": number (in {unit_word}, can be decimal),
          "duration": number (estimated minutes),
          "description": "string - detailed workout instructions",
          "intensity": "easy" | "moderate" | "hard"
        }}
      ]
    }}
  ],
  "recommendations": "string - overall training advice and tips specific to this runner"
}}

Important: Return ONLY valid JSON, no markdown formatting or extra text."#,
        weeks = weeks,
        goal = goal,
        frequency = req.training_frequency.unwrap_or_default(),
        race_date = race_date,
        goal_time = req.goal_time.as_deref().unwrap_or("Not specified"),
        personal_best = req.personal_best_time.as_deref().unwrap_or("Not specified"),
        notes = req.notes.as_deref().unwrap_or("None"),
        special_events = req.special_events.as_deref().unwrap_or("None"),
        injury_history = req.injury_history.as_deref().unwrap_or("None"),
    )
}

/// Parse the completion text into a [`GeneratedPlan`].
pub fn parse_generated_plan(text: &str) -> Result<GeneratedPlan, CompletionError> {
    let json_str = extract_json(text)?;
    serde_json::from_str(&json_str)
        .map_err(|e| CompletionError::Parse(format!("{}: {}", e, json_str)))
}

/// Extract JSON from the completion text (tolerates markdown code fences).
fn extract_json(text: &str) -> Result<String, CompletionError> {
    // Try direct parse first
    if text.trim().starts_with('{') {
        return Ok(text.trim().to_string());
    }

    // Look for JSON in code blocks
    if let Some(start) = text.find("```json") {
        let start = start + 7;
        if let Some(end) = text[start..].find("```") {
            return Ok(text[start..start + end].trim().to_string());
        }
    }

    // Look for plain code blocks
    if let Some(start) = text.find("```") {
        let start = start + 3;
        // Skip language identifier if present
        let content_start = text[start..]
            .find('\n')
            .map(|i| start + i + 1)
            .unwrap_or(start);
        if let Some(end) = text[content_start..].find("```") {
            return Ok(text[content_start..content_start + end].trim().to_string());
        }
    }

    // Last resort: first { to last }
    if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
        return Ok(text[start..=end].to_string());
    }

    Err(CompletionError::Parse(
        "Could not extract JSON from response".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::enums::RunningGoal;

    fn request() -> GeneratePlanRequest {
        GeneratePlanRequest {
            plan_name: Some("Spring 10k".to_string()),
            goal: Some(RunningGoal::HalfMarathon),
            training_frequency: Some(4),
            race_date: chrono::NaiveDate::from_ymd_opt(2025, 6, 1),
            goal_time: Some("1:45:00".to_string()),
            personal_best_time: None,
            notes: Some("Prefers morning runs".to_string()),
            special_events: None,
            injury_history: Some("Mild shin splints in 2023".to_string()),
            distance_unit: None,
        }
    }

    #[test]
    fn prompt_embeds_profile_and_schema() {
        let prompt = build_plan_prompt(&request(), 12, DistanceUnit::Mi);
        assert!(prompt.contains("12-week training plan"));
        assert!(prompt.contains("Goal: half marathon"));
        assert!(prompt.contains("Training Days Per Week: 4"));
        assert!(prompt.contains("Target Race Date: 2025-06-01"));
        assert!(prompt.contains("Goal Time: 1:45:00"));
        assert!(prompt.contains("Personal Best Time: Not specified"));
        assert!(prompt.contains("Injury History: Mild shin splints in 2023"));
        assert!(prompt.contains("\"weeklySchedule\""));
        assert!(prompt.contains("(in miles, can be decimal)"));
    }

    #[test]
    fn prompt_is_deterministic() {
        let a = build_plan_prompt(&request(), 12, DistanceUnit::Km);
        let b = build_plan_prompt(&request(), 12, DistanceUnit::Km);
        assert_eq!(a, b);
        assert!(a.contains("(in kilometers, can be decimal)"));
    }

    #[test]
    fn extract_json_direct() {
        let input = r#"{"planName": "Base Builder", "weeklySchedule": []}"#;
        assert!(extract_json(input).unwrap().contains("planName"));
    }

    #[test]
    fn extract_json_code_block() {
        let input = "Here is your plan:\n\n```json\n{\"planName\": \"Base Builder\", \"weeklySchedule\": []}\n```\n";
        assert!(extract_json(input).unwrap().contains("Base Builder"));
    }

    #[test]
    fn extract_json_fallback() {
        let input = r#"The plan is {"planName": "Base Builder"} as requested."#;
        assert!(extract_json(input).unwrap().contains("planName"));
    }

    #[test]
    fn parse_full_schedule() {
        let text = r#"{
            "planName": "Tempo Builder",
            "weeklySchedule": [
                {
                    "week": 1,
                    "totalMileage": 18.5,
                    "workouts": [
                        {"day": 2, "type": "easy_run", "distance": 4.0, "duration": 40, "description": "Conversational pace", "intensity": "easy"},
                        {"day": 7, "type": "long_run", "distance": 8.5, "duration": 85, "description": "Steady long run", "intensity": "moderate"}
                    ]
                }
            ],
            "recommendations": "Hydrate and sleep well."
        }"#;

        let plan = parse_generated_plan(text).unwrap();
        assert_eq!(plan.plan_name.as_deref(), Some("Tempo Builder"));
        assert_eq!(plan.weekly_schedule.len(), 1);
        assert_eq!(plan.weekly_schedule[0].workouts.len(), 2);
        assert_eq!(plan.weekly_schedule[0].workouts[1].day, 7);
    }

    #[test]
    fn parse_rejects_malformed_schedule() {
        assert!(parse_generated_plan("not json at all").is_err());
        assert!(parse_generated_plan(r#"{"weeklySchedule": "oops"}"#).is_err());
    }
}
