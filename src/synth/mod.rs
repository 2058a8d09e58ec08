//! Deterministic plan synthesizer
//!
//! The offline fallback for plan generation: keyword matching against an
//! ordered template table selects canned roadmaps and weekly task lists,
//! and a small formula estimates the plan duration when the user leaves
//! it to us. Pure functions throughout; identical inputs always produce
//! identical output.

mod templates;

use tracing::debug;

use crate::domain::{DailyTaskSpec, MonthlyPlanEntry, PlanRequest, PlanResponse, TaskItem};

use templates::{
    DEFAULT_DURATION_RULE, DURATION_RULES, DurationRule, ROADMAP_TEMPLATES, WEEK_TEMPLATES, matches,
};

/// Minutes consumed per task slot: a 25-minute Pomodoro plus a 5-minute break
const SLOT_MINUTES: f64 = 30.0;

/// Maximum tasks per day for goals without a weekly template
const MAX_GENERIC_TASKS_PER_DAY: usize = 6;

/// Days covered by the first-week schedule
const WEEK_DAYS: usize = 7;

/// Estimate plan duration in months for a goal
///
/// Walks the ordered rule table; the first rule whose keywords occur in
/// the lowercased goal supplies the formula `max(floor, ceil(base - hours/divisor))`.
/// Unmatched goals use the default rule.
pub fn estimate_months(goal: &str, daily_hours: f64) -> u32 {
    let goal_lower = goal.to_lowercase();
    let rule: &DurationRule = DURATION_RULES
        .iter()
        .find(|r| matches(&goal_lower, r.keywords))
        .unwrap_or(&DEFAULT_DURATION_RULE);

    let estimate = (rule.base - daily_hours / rule.divisor).ceil() as u32;
    estimate.max(rule.floor)
}

/// Synthesize a full plan without any network dependency
///
/// `fixed_commitments` is carried in the request but not used to exclude
/// time windows here; only the generation backend honors it.
pub fn synthesize(request: &PlanRequest) -> PlanResponse {
    let months = if request.months > 0 {
        request.months
    } else {
        estimate_months(&request.goal, request.daily_hours)
    };

    debug!(goal = %request.goal, months, "synthesizing offline plan");

    PlanResponse {
        monthly_plan: monthly_plan(&request.goal, months),
        daily_tasks: daily_tasks(&request.goal, request.daily_hours),
    }
}

/// Build the monthly roadmap
///
/// Templated goals return the canned entries truncated to `months`;
/// requests beyond the template length are not padded. Unmatched goals
/// get exactly `months` generic phases.
fn monthly_plan(goal: &str, months: u32) -> Vec<MonthlyPlanEntry> {
    let goal_lower = goal.to_lowercase();

    if let Some(template) = ROADMAP_TEMPLATES.iter().find(|t| matches(&goal_lower, t.keywords)) {
        let mut entries = (template.build)();
        entries.truncate(months as usize);
        return entries;
    }

    (1..=months)
        .map(|month| MonthlyPlanEntry {
            month,
            goal: format!("{} - Phase {}", goal, month),
            milestones: vec![
                format!("Complete foundational learning for month {}", month),
                "Apply knowledge through practical exercises".to_string(),
                "Build portfolio project or milestone".to_string(),
                "Review and consolidate progress".to_string(),
            ],
        })
        .collect()
}

/// Build the first week of daily tasks
///
/// Each day holds at most `floor(daily_hours * 60 / 30)` tasks. Templated
/// goals truncate the canned day lists to that budget; unmatched goals get
/// generic 25-minute learning modules, capped at six per day.
fn daily_tasks(goal: &str, daily_hours: f64) -> Vec<DailyTaskSpec> {
    let goal_lower = goal.to_lowercase();
    let available_slots = (daily_hours * 60.0 / SLOT_MINUTES).floor() as usize;

    if let Some(template) = WEEK_TEMPLATES.iter().find(|t| matches(&goal_lower, t.keywords)) {
        let mut week = (template.build)();
        for day in &mut week {
            day.tasks.truncate(available_slots);
        }
        return week;
    }

    let tasks_per_day = available_slots.min(MAX_GENERIC_TASKS_PER_DAY);
    (1..=WEEK_DAYS)
        .map(|i| DailyTaskSpec {
            day: format!("Day {}", i),
            tasks: (1..=tasks_per_day)
                .map(|j| TaskItem {
                    title: format!("{} - Learning Module {}", goal, j),
                    duration: 25,
                })
                .collect(),
        })
        .collect()
}
