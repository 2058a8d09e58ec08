//! Plan response types - the roadmap and the first week of daily tasks
//!
//! These are the server-originated, immutable templates. The mutable
//! per-day task state lives in [`super::task`].

use serde::{Deserialize, Serialize};

/// One month of the roadmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPlanEntry {
    /// Month number, 1-based and consecutive
    pub month: u32,

    /// What this month accomplishes
    pub goal: String,

    /// Ordered milestones for the month
    pub milestones: Vec<String>,
}

/// A single task template within a day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    /// Task title
    pub title: String,

    /// Duration in minutes
    pub duration: u32,
}

/// One day's worth of task templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTaskSpec {
    /// Day label, e.g. "Day 1"
    pub day: String,

    /// Ordered tasks for the day
    pub tasks: Vec<TaskItem>,
}

/// The full plan: a monthly roadmap plus the first week of daily tasks
///
/// Wire field names are `monthlyPlan` and `dailyTasks` exactly; the
/// generation endpoint and the upstream generator both speak this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    /// One entry per month, months unique and consecutive from 1
    pub monthly_plan: Vec<MonthlyPlanEntry>,

    /// Seven days of task templates
    pub daily_tasks: Vec<DailyTaskSpec>,
}

impl PlanResponse {
    /// Number of months in the roadmap
    pub fn months(&self) -> usize {
        self.monthly_plan.len()
    }

    /// Look up a day's template by 1-based day number
    pub fn day(&self, day_number: usize) -> Option<&DailyTaskSpec> {
        if day_number == 0 {
            return None;
        }
        self.daily_tasks.get(day_number - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_response() -> PlanResponse {
        PlanResponse {
            monthly_plan: vec![MonthlyPlanEntry {
                month: 1,
                goal: "HTML & CSS Fundamentals".to_string(),
                milestones: vec!["Build 3 responsive web pages".to_string()],
            }],
            daily_tasks: vec![DailyTaskSpec {
                day: "Day 1".to_string(),
                tasks: vec![TaskItem {
                    title: "Watch HTML Crash Course".to_string(),
                    duration: 25,
                }],
            }],
        }
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(sample_response()).unwrap();
        assert!(json.get("monthlyPlan").is_some());
        assert!(json.get("dailyTasks").is_some());
        assert_eq!(json["dailyTasks"][0]["day"], "Day 1");
        assert_eq!(json["dailyTasks"][0]["tasks"][0]["duration"], 25);
    }

    #[test]
    fn test_day_lookup_is_one_based() {
        let response = sample_response();
        assert!(response.day(0).is_none());
        assert_eq!(response.day(1).unwrap().day, "Day 1");
        assert!(response.day(2).is_none());
    }

    #[test]
    fn test_deserialize_endpoint_body() {
        let json = r#"{
            "monthlyPlan": [
                {"month": 1, "goal": "Learn HTML", "milestones": ["Complete 10 HTML pages"]}
            ],
            "dailyTasks": [
                {"day": "Day 1", "tasks": [{"title": "Watch HTML Crash Course", "duration": 25}]}
            ]
        }"#;

        let response: PlanResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.months(), 1);
        assert_eq!(response.daily_tasks[0].tasks[0].title, "Watch HTML Crash Course");
    }
}
