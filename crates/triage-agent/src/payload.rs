//! Workflow input for a batch of patients.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use triage_model::NormalizedWorkbook;

use crate::error::{AgentError, Result};

/// Largest number of patients sent to the agent in one run.
pub const MAX_AGENT_BATCH: usize = 5;

/// Workflow reference nested as `{"workflow": {"id": ...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowRef {
    #[serde(default)]
    pub id: Option<String>,
}

/// A request to run the agent over normalized patients.
///
/// Accepts both `groundTruth`/`workflowId` and their snake_case spellings.
/// The workflow may also be named as `workflow.id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRequest {
    #[serde(default)]
    pub patients: Vec<Value>,
    #[serde(default, alias = "ground_truth")]
    pub ground_truth: Vec<Value>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow: Option<WorkflowRef>,
    #[serde(default, alias = "workflow_id")]
    pub workflow_id: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl AgentRequest {
    /// Builds a request carrying every patient and ground-truth entry of a
    /// normalized workbook.
    pub fn from_workbook(workbook: &NormalizedWorkbook) -> Result<Self> {
        let patients = workbook
            .patients
            .iter()
            .map(serde_json::to_value)
            .collect::<serde_json::Result<Vec<_>>>()?;
        let ground_truth = workbook
            .ground_truth
            .iter()
            .map(serde_json::to_value)
            .collect::<serde_json::Result<Vec<_>>>()?;
        Ok(Self {
            patients,
            ground_truth,
            ..Self::default()
        })
    }

    /// The workflow id named by the request: `workflow.id` first, then
    /// `workflowId`. Blank values count as absent.
    pub fn requested_workflow_id(&self) -> Option<&str> {
        self.workflow
            .as_ref()
            .and_then(|workflow| workflow.id.as_deref())
            .into_iter()
            .chain(self.workflow_id.as_deref())
            .find(|id| !id.trim().is_empty())
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }
}

/// The document handed to the agent workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowInput {
    pub patients: Vec<Value>,
    pub ground_truth: Vec<Value>,
    pub instructions: String,
}

/// Effective batch size: the requested limit capped at [`MAX_AGENT_BATCH`],
/// with zero or no limit meaning the cap itself.
pub fn batch_limit(requested: Option<usize>) -> usize {
    requested
        .filter(|&limit| limit > 0)
        .map_or(MAX_AGENT_BATCH, |limit| limit.min(MAX_AGENT_BATCH))
}

/// Trims a request down to the workflow input.
///
/// Ground truth is passed through whole; only patients are batched.
pub fn build_workflow_input(request: AgentRequest) -> Result<WorkflowInput> {
    if request.patients.is_empty() {
        return Err(AgentError::EmptyPatients);
    }
    let limit = batch_limit(request.limit);
    let total = request.patients.len();
    let mut patients = request.patients;
    patients.truncate(limit);
    debug!(total, sent = patients.len(), limit, "built workflow input");

    Ok(WorkflowInput {
        patients,
        ground_truth: request.ground_truth,
        instructions: request
            .instructions
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_string(),
    })
}
