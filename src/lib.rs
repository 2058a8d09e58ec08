//! Momentum - goal-to-roadmap planner with Pomodoro session tracking
//!
//! Momentum turns a goal, a time budget, and free-text constraints into a
//! multi-month roadmap plus a first week of daily tasks, then tracks the
//! day task-by-task with a Pomodoro countdown and an energy/streak meter.
//!
//! Plans come from one of three backends: the Gemini generateContent API,
//! a remote generate-plan endpoint, or a deterministic offline synthesizer
//! that matches goal keywords against canned templates.
//!
//! # Modules
//!
//! - [`domain`] - plan contract types and task state
//! - [`synth`] - deterministic offline plan synthesizer
//! - [`llm`] - generator backend clients
//! - [`acquire`] - plan acquisition service and error taxonomy
//! - [`session`] - day session and Pomodoro timer state machines
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod acquire;
pub mod cli;
pub mod config;
pub mod domain;
pub mod llm;
pub mod session;
pub mod synth;

// Re-export commonly used types
pub use acquire::{Backend, PlanEndpointClient, PlanError, PlanService, build_prompt};
pub use config::{Config, LlmConfig, PlannerConfig, SessionConfig};
pub use domain::{DailyTaskSpec, MonthlyPlanEntry, PlanRequest, PlanResponse, Task, TaskItem, TaskStatus};
pub use llm::{GeminiClient, GeneratorClient, LlmError, extract_json_object};
pub use session::{DaySession, EnergyState, Phase, PomodoroTimer, Ticker, TimerEvent, Transition};
pub use synth::{estimate_months, synthesize};
