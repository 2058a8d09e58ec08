//! Day session - per-day task state, energy, and streak
//!
//! Owns the only mutable task state in the system. Transitions are
//! monotonic: a completed or skipped task never returns to pending.
//! Operations on unknown or already-terminal tasks are ignored no-ops,
//! never errors.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{PlanResponse, Task, TaskStatus};

/// Energy gained when a task is completed
const COMPLETE_BONUS: u8 = 15;

/// Energy lost when a task is skipped
const SKIP_PENALTY: u8 = 10;

/// Gamification state, persists across days within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyState {
    /// Energy level, always within [0, 100]
    pub level: u8,

    /// Consecutive fully-completed days
    pub streak: u32,
}

impl Default for EnergyState {
    fn default() -> Self {
        Self { level: 75, streak: 1 }
    }
}

/// Outcome of a task transition request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The transition was applied
    Applied,
    /// Unknown task or already terminal; nothing changed
    Ignored,
}

impl Transition {
    /// Check whether the transition took effect
    pub fn applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// The active day's task set plus the session-wide energy state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DaySession {
    /// 1-based day number within the week, 0 before any day starts
    pub day_number: usize,

    /// Tasks for the active day, in plan order
    tasks: Vec<Task>,

    /// Energy and streak, mutated only by task transitions
    energy: EnergyState,
}

impl DaySession {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a day: replace the task set with fresh pending tasks
    ///
    /// Prior completion state for the day is discarded wholesale; energy
    /// and streak persist. An out-of-range day yields an empty task set.
    pub fn start_day(&mut self, plan: &PlanResponse, day_number: usize) {
        self.day_number = day_number;
        self.tasks = plan
            .day(day_number)
            .map(|spec| {
                spec.tasks
                    .iter()
                    .enumerate()
                    .map(|(index, item)| Task::from_item(item, day_number, index))
                    .collect()
            })
            .unwrap_or_default();

        debug!(day_number, task_count = self.tasks.len(), "day started");
    }

    /// Complete a pending task
    ///
    /// Raises energy by 15 (capped at 100). If this leaves every task in
    /// the day terminal with zero skips, the streak advances by one.
    pub fn complete_task(&mut self, task_id: &str) -> Transition {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) else {
            return Transition::Ignored;
        };
        if task.is_terminal() {
            return Transition::Ignored;
        }

        task.status = TaskStatus::Completed;
        self.energy.level = self.energy.level.saturating_add(COMPLETE_BONUS).min(100);

        if self.day_complete_without_skips() {
            self.energy.streak += 1;
            debug!(streak = self.energy.streak, "day fully completed, streak advanced");
        }

        Transition::Applied
    }

    /// Skip a pending task
    ///
    /// Lowers energy by 10 (floored at 0). A skipped day can still finish,
    /// but it never advances the streak.
    pub fn skip_task(&mut self, task_id: &str) -> Transition {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) else {
            return Transition::Ignored;
        };
        if task.is_terminal() {
            return Transition::Ignored;
        }

        task.status = TaskStatus::Skipped;
        self.energy.level = self.energy.level.saturating_sub(SKIP_PENALTY);

        Transition::Applied
    }

    /// Index of the first pending task, the one eligible for a timer
    pub fn current_task_index(&self) -> Option<usize> {
        self.tasks.iter().position(|t| t.is_pending())
    }

    /// The first pending task itself
    pub fn current_task(&self) -> Option<&Task> {
        self.current_task_index().map(|i| &self.tasks[i])
    }

    /// All tasks for the active day, in plan order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Current energy and streak
    pub fn energy(&self) -> EnergyState {
        self.energy
    }

    /// Number of completed tasks
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed()).count()
    }

    /// Number of skipped tasks
    pub fn skipped_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_skipped()).count()
    }

    /// Completion rate over the day's tasks, 0.0 when the day is empty
    pub fn completion_rate(&self) -> f64 {
        if self.tasks.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.tasks.len() as f64
    }

    /// Check whether every task is terminal
    pub fn day_finished(&self) -> bool {
        !self.tasks.is_empty() && self.tasks.iter().all(|t| t.is_terminal())
    }

    fn day_complete_without_skips(&self) -> bool {
        self.day_finished() && self.skipped_count() == 0
    }
}
