//! Outcome prompts sent back to the agent after a prediction is reviewed.

use serde::{Deserialize, Serialize};

use crate::error::{AgentError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomePrompt {
    #[serde(alias = "patient_id")]
    pub patient_id: String,
    pub prompt: String,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub scenario: Option<String>,
    #[serde(default)]
    pub diagnosis: Option<String>,
    #[serde(default, alias = "predicted_stroke")]
    pub predicted_stroke: Option<bool>,
    #[serde(default, alias = "truth_stroke")]
    pub truth_stroke: Option<bool>,
}

/// Body of an outcome message. Unset optional values serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomePayload {
    pub patient_id: String,
    pub outcome_prompt: String,
    pub environment: Option<String>,
    pub scenario: Option<String>,
    pub diagnosis: Option<String>,
    pub predicted_stroke: Option<bool>,
    pub truth_stroke: Option<bool>,
}

pub fn build_outcome_payload(prompt: OutcomePrompt) -> Result<OutcomePayload> {
    let text = prompt.prompt.trim();
    if text.is_empty() {
        return Err(AgentError::EmptyPrompt);
    }
    Ok(OutcomePayload {
        outcome_prompt: text.to_string(),
        patient_id: prompt.patient_id,
        environment: prompt.environment,
        scenario: prompt.scenario,
        diagnosis: prompt.diagnosis,
        predicted_stroke: prompt.predicted_stroke,
        truth_stroke: prompt.truth_stroke,
    })
}
