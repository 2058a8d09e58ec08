//! Task - client-side mutable task state
//!
//! A Task is instantiated fresh from a [`super::DailyTaskSpec`] whenever
//! the active day changes. Completion and skip are terminal and monotonic:
//! once set they are never unset.

use serde::{Deserialize, Serialize};

use super::TaskItem;

/// Task status in the day workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not yet worked on
    #[default]
    Pending,
    /// Finished (terminal)
    Completed,
    /// Skipped (terminal)
    Skipped,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Completed => write!(f, "completed"),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}

/// A single task within the active day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique within a day, e.g. "task-1-0"
    pub id: String,

    /// Task title
    pub title: String,

    /// Duration in minutes
    pub duration: u32,

    /// Current status
    pub status: TaskStatus,
}

impl Task {
    /// Instantiate a fresh Pending task from a day template entry
    ///
    /// `day_number` is 1-based, `index` is the task's position within
    /// the day.
    pub fn from_item(item: &TaskItem, day_number: usize, index: usize) -> Self {
        Self {
            id: format!("task-{}-{}", day_number, index),
            title: item.title.clone(),
            duration: item.duration,
            status: TaskStatus::Pending,
        }
    }

    /// Check if the task has reached a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self.status, TaskStatus::Completed | TaskStatus::Skipped)
    }

    /// Check if the task is still pending
    pub fn is_pending(&self) -> bool {
        self.status == TaskStatus::Pending
    }

    /// Check if the task was completed
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Check if the task was skipped
    pub fn is_skipped(&self) -> bool {
        self.status == TaskStatus::Skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_item() {
        let item = TaskItem {
            title: "Watch HTML Crash Course".to_string(),
            duration: 25,
        };

        let task = Task::from_item(&item, 1, 0);
        assert_eq!(task.id, "task-1-0");
        assert_eq!(task.title, "Watch HTML Crash Course");
        assert_eq!(task.duration, 25);
        assert_eq!(task.status, TaskStatus::Pending);
        assert!(task.is_pending());
        assert!(!task.is_terminal());
    }

    #[test]
    fn test_ids_unique_within_day() {
        let item = TaskItem {
            title: "Module".to_string(),
            duration: 25,
        };

        let a = Task::from_item(&item, 2, 0);
        let b = Task::from_item(&item, 2, 1);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_terminal_states() {
        let item = TaskItem {
            title: "Module".to_string(),
            duration: 25,
        };

        let mut task = Task::from_item(&item, 1, 0);
        task.status = TaskStatus::Completed;
        assert!(task.is_terminal());
        assert!(task.is_completed());

        task.status = TaskStatus::Skipped;
        assert!(task.is_terminal());
        assert!(task.is_skipped());
    }

    #[test]
    fn test_status_serde() {
        let json = serde_json::to_string(&TaskStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
    }
}
