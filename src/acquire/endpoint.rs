//! Remote plan endpoint client
//!
//! Speaks the generation endpoint wire contract: POST the PlanRequest as
//! JSON, receive `{monthlyPlan, dailyTasks}` on success or `{error}` with
//! a non-2xx status on failure.

use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::domain::{PlanRequest, PlanResponse};
use crate::llm::LlmError;

/// Client for a remote generate-plan endpoint
pub struct PlanEndpointClient {
    url: String,
    http: Client,
}

impl PlanEndpointClient {
    /// Create a client for the endpoint at `url`
    pub fn new(url: impl Into<String>, timeout_ms: u64) -> Result<Self, LlmError> {
        let http = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(LlmError::Network)?;

        Ok(Self { url: url.into(), http })
    }

    /// Fetch a plan, single attempt
    ///
    /// The success body is reinterpreted as a PlanResponse with serde's
    /// structural parse only; invariants like consecutive months are not
    /// checked here (the upstream generator is trusted to honor them).
    pub async fn fetch(&self, request: &PlanRequest) -> Result<PlanResponse, LlmError> {
        debug!(url = %self.url, goal = %request.goal, "fetch: sending plan request");

        let response = self.http.post(&self.url).json(request).send().await?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            debug!(status, %message, "fetch: endpoint error");
            return Err(LlmError::ApiError { status, message });
        }

        let body: serde_json::Value = response.json().await?;
        if let Some(error) = body.get("error").and_then(|e| e.as_str()) {
            debug!(%error, "fetch: endpoint returned error body");
            return Err(LlmError::InvalidResponse(error.to_string()));
        }

        serde_json::from_value(body).map_err(LlmError::Json)
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}
