//! Core domain types shared between the synthesizer, the acquisition
//! service, and the session state machine.

pub mod plan;
pub mod request;
pub mod task;

pub use plan::{DailyTaskSpec, MonthlyPlanEntry, PlanResponse, TaskItem};
pub use request::{MAX_DAILY_HOURS, MIN_DAILY_HOURS, PlanRequest};
pub use task::{Task, TaskStatus};
