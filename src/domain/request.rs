//! PlanRequest - the user's goal and constraints
//!
//! The input half of the plan contract. Wire field names are camelCase
//! to match the generation endpoint.

use serde::{Deserialize, Serialize};

use crate::acquire::PlanError;

/// Minimum daily hours a user can commit
pub const MIN_DAILY_HOURS: f64 = 1.0;

/// Maximum daily hours a user can commit
pub const MAX_DAILY_HOURS: f64 = 12.0;

/// A request for a goal plan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    /// The goal to plan for (non-empty)
    pub goal: String,

    /// Requested duration in months (0 = derive from the goal)
    pub months: u32,

    /// Hours available per day, 1.0 to 12.0 in half-hour steps
    pub daily_hours: f64,

    /// Free-text fixed commitments, advisory only
    pub fixed_commitments: String,
}

impl PlanRequest {
    /// Create a request with no fixed commitments and auto duration
    pub fn new(goal: impl Into<String>, daily_hours: f64) -> Self {
        Self {
            goal: goal.into(),
            months: 0,
            daily_hours,
            fixed_commitments: String::new(),
        }
    }

    /// Validate the request at the boundary
    ///
    /// Rejects empty goals and out-of-range daily hours before anything
    /// is sent upstream.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.goal.trim().is_empty() {
            return Err(PlanError::InvalidInput("goal must not be empty".to_string()));
        }

        if !(MIN_DAILY_HOURS..=MAX_DAILY_HOURS).contains(&self.daily_hours) {
            return Err(PlanError::InvalidInput(format!(
                "daily hours must be between {} and {}, got {}",
                MIN_DAILY_HOURS, MAX_DAILY_HOURS, self.daily_hours
            )));
        }

        // Half-hour granularity
        if (self.daily_hours * 2.0).fract() != 0.0 {
            return Err(PlanError::InvalidInput(format!(
                "daily hours must be a multiple of 0.5, got {}",
                self.daily_hours
            )));
        }

        Ok(())
    }
}
