//! Plan acquisition service
//!
//! Orchestrates one attempt at getting a plan: from the Gemini generator
//! directly, from a remote generate-plan endpoint, or from the offline
//! synthesizer. Every upstream failure collapses into a single
//! [`PlanError::GenerationFailed`]; the granular cause goes to the log,
//! never to the caller.

mod endpoint;

pub use endpoint::PlanEndpointClient;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;
use crate::domain::{PlanRequest, PlanResponse};
use crate::llm::{GeminiClient, GeneratorClient, extract_json_object};
use crate::synth;

/// Errors surfaced by plan acquisition
#[derive(Debug, Error)]
pub enum PlanError {
    /// Rejected at the boundary before any network activity
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Any transport error, non-2xx status, missing or unparseable JSON,
    /// or explicit error field from the acquisition path
    #[error("plan generation failed")]
    GenerationFailed,

    /// A request is already outstanding; re-submission is rejected until
    /// it resolves
    #[error("a plan request is already in flight")]
    RequestInFlight,
}

/// Where plans come from
pub enum Backend {
    /// Call the generator directly with a planning prompt
    Generator(Arc<dyn GeneratorClient>),

    /// Call a remote generate-plan endpoint
    Endpoint(PlanEndpointClient),

    /// Deterministic offline synthesis, infallible
    Offline,
}

/// Acquires plans from the configured backend, one request at a time
pub struct PlanService {
    backend: Backend,
    in_flight: AtomicBool,
}

impl PlanService {
    /// Create a service over an explicit backend
    pub fn new(backend: Backend) -> Self {
        Self {
            backend,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Create a service for purely offline synthesis
    pub fn offline() -> Self {
        Self::new(Backend::Offline)
    }

    /// Pick a backend from configuration
    ///
    /// Offline wins if set, then a configured endpoint URL, then the
    /// direct generator. A missing API key degrades to offline synthesis
    /// with a warning rather than failing construction.
    pub fn from_config(config: &Config) -> Self {
        if config.planner.offline {
            return Self::offline();
        }

        if let Some(url) = &config.planner.endpoint_url {
            match PlanEndpointClient::new(url, config.llm.timeout_ms) {
                Ok(client) => return Self::new(Backend::Endpoint(client)),
                Err(e) => {
                    warn!(error = %e, "failed to build endpoint client, falling back to offline synthesis");
                    return Self::offline();
                }
            }
        }

        match GeminiClient::from_config(&config.llm) {
            Ok(client) => Self::new(Backend::Generator(Arc::new(client))),
            Err(e) => {
                warn!(error = %e, "generator unavailable, falling back to offline synthesis");
                Self::offline()
            }
        }
    }

    /// Check whether a request is currently outstanding
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Acquire a plan, single attempt, no retry
    ///
    /// Validates the request, takes the busy flag, and releases it when
    /// the attempt resolves either way.
    pub async fn acquire(&self, request: &PlanRequest) -> Result<PlanResponse, PlanError> {
        request.validate()?;

        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(PlanError::RequestInFlight);
        }

        let result = self.acquire_inner(request).await;
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    async fn acquire_inner(&self, request: &PlanRequest) -> Result<PlanResponse, PlanError> {
        match &self.backend {
            Backend::Offline => Ok(synth::synthesize(request)),

            Backend::Endpoint(client) => client.fetch(request).await.map_err(|e| {
                warn!(error = %e, "plan endpoint request failed");
                PlanError::GenerationFailed
            }),

            Backend::Generator(client) => {
                let prompt = build_prompt(request);
                let text = client.generate(&prompt).await.map_err(|e| {
                    warn!(error = %e, "generator request failed");
                    PlanError::GenerationFailed
                })?;

                let json = extract_json_object(&text).ok_or_else(|| {
                    warn!(text_len = text.len(), "no JSON object found in generated text");
                    PlanError::GenerationFailed
                })?;

                debug!(json_len = json.len(), "parsed plan from generated text");
                serde_json::from_str(json).map_err(|e| {
                    warn!(error = %e, "generated JSON did not match the plan shape");
                    PlanError::GenerationFailed
                })
            }
        }
    }
}

/// Build the natural-language planning prompt for a request
pub fn build_prompt(request: &PlanRequest) -> String {
    let months = if request.months > 0 {
        request.months.to_string()
    } else {
        "auto-determine based on goal complexity".to_string()
    };

    let commitments = if request.fixed_commitments.trim().is_empty() {
        "none"
    } else {
        request.fixed_commitments.as_str()
    };

    format!(
        r#"You are a productivity expert and AI mentor.

The user wants to achieve the following goal: "{goal}"

They want to complete it in: {months} months.

They can dedicate {hours} hours per day.

They have these fixed commitments daily: {commitments}, so avoid planning during that time.

Break the goal into a monthly roadmap with clear milestones and subtasks.

Then for the first 7 days, generate a daily schedule with:

- List of tasks (with titles)
- Time duration for each task (auto-adjusted to fit user's available hours)
- Insert 5-minute breaks between every Pomodoro (25-minute task)
- Keep daily plans realistic, specific, and motivational
- Never generate dummy data — always base it on real skill breakdown (like HTML → CSS → JS in web dev)
- If months is not specified, determine optimal months based on goal complexity and daily hours

Output ONLY valid JSON in this exact format:
{{
  "monthlyPlan": [
    {{
      "month": 1,
      "goal": "Learn HTML and basic CSS",
      "milestones": ["Complete 10 HTML pages", "Build a basic portfolio site"]
    }}
  ],
  "dailyTasks": [
    {{
      "day": "Day 1",
      "tasks": [
        {{"title": "Watch HTML Crash Course", "duration": 25}},
        {{"title": "Practice with 3 pages", "duration": 25}}
      ]
    }}
  ]
}}"#,
        goal = request.goal,
        months = months,
        hours = request.daily_hours,
        commitments = commitments,
    )
}
