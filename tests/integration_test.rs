//! Integration tests for Momentum
//!
//! These tests verify end-to-end behavior across the synthesizer, the
//! acquisition service, and the session state machine.

use std::sync::Arc;

use async_trait::async_trait;
use momentum::config::SessionConfig;
use momentum::llm::{GeneratorClient, LlmError};
use momentum::session::{DaySession, Phase, PomodoroTimer, TimerEvent};
use momentum::{Backend, PlanError, PlanRequest, PlanResponse, PlanService};

// =============================================================================
// Offline plan -> session flow
// =============================================================================

#[tokio::test]
async fn test_offline_plan_drives_a_full_day() {
    let service = PlanService::offline();
    let request = PlanRequest::new("Learn Frontend Web Development", 2.0);

    let plan = service.acquire(&request).await.expect("offline synthesis is infallible");

    // Templated goal: 3 roadmap months, 7 days of 4 tasks at 2 hours/day.
    assert_eq!(plan.months(), 3);
    assert_eq!(plan.daily_tasks.len(), 7);
    assert_eq!(plan.daily_tasks[0].tasks.len(), 4);

    let mut session = DaySession::new();
    session.start_day(&plan, 1);

    let starting_energy = session.energy().level;
    let starting_streak = session.energy().streak;

    // Complete every task in order.
    while let Some(task) = session.current_task() {
        let id = task.id.clone();
        assert!(session.complete_task(&id).applied());
    }

    assert!(session.day_finished());
    assert_eq!(session.completed_count(), 4);
    assert_eq!(session.energy().streak, starting_streak + 1);
    assert!(session.energy().level >= starting_energy);
    assert!(session.energy().level <= 100);
}

#[tokio::test]
async fn test_day_with_a_skip_finishes_without_streak() {
    let service = PlanService::offline();
    let plan = service
        .acquire(&PlanRequest::new("web dev", 1.0))
        .await
        .expect("offline synthesis is infallible");

    // 1 hour/day -> 2 tasks per day.
    let mut session = DaySession::new();
    session.start_day(&plan, 1);
    assert_eq!(session.tasks().len(), 2);
    let streak = session.energy().streak;

    let first = session.tasks()[0].id.clone();
    let second = session.tasks()[1].id.clone();
    session.skip_task(&first);
    session.complete_task(&second);

    assert!(session.day_finished());
    assert_eq!(session.energy().streak, streak);
}

// =============================================================================
// Generator-backed acquisition
// =============================================================================

struct ScriptedGenerator {
    output: Result<String, ()>,
}

#[async_trait]
impl GeneratorClient for ScriptedGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
        match &self.output {
            Ok(text) => Ok(text.clone()),
            Err(()) => Err(LlmError::ApiError {
                status: 500,
                message: "upstream error".to_string(),
            }),
        }
    }
}

#[tokio::test]
async fn test_generated_plan_round_trips_into_a_session() {
    let text = r#"Sure! Here is the plan you asked for:
{
  "monthlyPlan": [
    {"month": 1, "goal": "Learn HTML and basic CSS", "milestones": ["Complete 10 HTML pages"]}
  ],
  "dailyTasks": [
    {"day": "Day 1", "tasks": [
      {"title": "Watch HTML Crash Course", "duration": 25},
      {"title": "Practice with 3 pages", "duration": 25}
    ]}
  ]
}
Let me know how it goes."#;

    let service = PlanService::new(Backend::Generator(Arc::new(ScriptedGenerator {
        output: Ok(text.to_string()),
    })));

    let plan = service
        .acquire(&PlanRequest::new("Learn web development", 2.0))
        .await
        .expect("scripted generator should parse");

    let mut session = DaySession::new();
    session.start_day(&plan, 1);

    assert_eq!(session.tasks().len(), 2);
    assert_eq!(session.tasks()[0].title, "Watch HTML Crash Course");
}

#[tokio::test]
async fn test_failed_generation_leaves_no_plan_state() {
    let service = PlanService::new(Backend::Generator(Arc::new(ScriptedGenerator { output: Err(()) })));

    let result = service.acquire(&PlanRequest::new("Learn web development", 2.0)).await;
    assert!(matches!(result, Err(PlanError::GenerationFailed)));

    // The service is reusable after a failure; the busy flag is released.
    assert!(!service.is_busy());
    let result = service.acquire(&PlanRequest::new("Learn web development", 2.0)).await;
    assert!(matches!(result, Err(PlanError::GenerationFailed)));
}

// =============================================================================
// Saved plan file -> session (the CLI handoff)
// =============================================================================

#[tokio::test]
async fn test_plan_file_round_trip() {
    let service = PlanService::offline();
    let plan = service
        .acquire(&PlanRequest::new("Learn Spanish", 1.5))
        .await
        .expect("offline synthesis is infallible");

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("plan.json");
    std::fs::write(&path, serde_json::to_string_pretty(&plan).unwrap()).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let loaded: PlanResponse = serde_json::from_str(&content).unwrap();
    assert_eq!(loaded, plan);

    let mut session = DaySession::new();
    session.start_day(&loaded, 1);
    // 1.5 hours -> 3 slots -> 3 generic modules.
    assert_eq!(session.tasks().len(), 3);
}

// =============================================================================
// Timer -> session wiring
// =============================================================================

#[test]
fn test_work_elapse_completes_the_task_and_breaks() {
    let plan = momentum::synthesize(&PlanRequest::new("web dev", 1.0));
    let mut session = DaySession::new();
    session.start_day(&plan, 1);

    let config = SessionConfig {
        work_secs: 2,
        break_secs: 1,
    };
    let mut timer = PomodoroTimer::new(&config);
    timer.start();

    let task_id = session.current_task().unwrap().id.clone();

    // Drive the timer the way the tick loop does.
    loop {
        match timer.tick() {
            TimerEvent::WorkElapsed => {
                session.complete_task(&task_id);
                break;
            }
            TimerEvent::Ticked => {}
            other => panic!("unexpected event: {:?}", other),
        }
    }

    assert_eq!(timer.phase(), Phase::Break);
    assert!(timer.is_running());
    assert!(session.tasks()[0].is_completed());
    assert_eq!(session.current_task_index(), Some(1));

    // Break runs out; work is re-armed but waits for a start.
    loop {
        match timer.tick() {
            TimerEvent::BreakElapsed => break,
            TimerEvent::Ticked => {}
            other => panic!("unexpected event: {:?}", other),
        }
    }
    assert_eq!(timer.phase(), Phase::Work);
    assert!(!timer.is_running());
}

#[test]
fn test_manual_skip_exits_without_break() {
    let plan = momentum::synthesize(&PlanRequest::new("web dev", 1.0));
    let mut session = DaySession::new();
    session.start_day(&plan, 1);

    let mut timer = PomodoroTimer::new(&SessionConfig::default());
    timer.start();
    timer.tick();

    let task_id = session.current_task().unwrap().id.clone();
    assert_eq!(timer.skip(), TimerEvent::Skipped);
    session.skip_task(&task_id);

    // No break phase: the timer stopped in work.
    assert_eq!(timer.phase(), Phase::Work);
    assert!(!timer.is_running());
    assert!(session.tasks()[0].is_skipped());
}
