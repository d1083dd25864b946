//! Error types for agent hand-off.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    /// A workflow run was requested with no patients.
    #[error("patient payload is required")]
    EmptyPatients,

    /// An outcome prompt was blank after trimming.
    #[error("outcome prompt must not be empty")]
    EmptyPrompt,

    /// No workflow id was given and none is configured in the environment.
    #[error("missing workflow id")]
    MissingWorkflowId,

    #[error("failed to encode agent payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl AgentError {
    /// True when the caller's request is at fault.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Json(_))
    }
}

pub type Result<T> = std::result::Result<T, AgentError>;
