//! Workflow id resolution.

use std::env;

use crate::error::{AgentError, Result};

/// Environment variables consulted, in order, when no id is given.
pub const WORKFLOW_ID_ENV_VARS: [&str; 3] = [
    "CHATKIT_WORKFLOW_ID",
    "VITE_CHATKIT_WORKFLOW_ID",
    "NEXT_PUBLIC_CHATKIT_WORKFLOW_ID",
];

/// Resolves the workflow id from an explicit value or the process environment.
pub fn resolve_workflow_id(explicit: Option<&str>) -> Result<String> {
    resolve_workflow_id_with(explicit, |name| env::var(name).ok())
}

/// Like [`resolve_workflow_id`], reading variables through `lookup`.
pub fn resolve_workflow_id_with<F>(explicit: Option<&str>, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(id) = explicit.map(str::trim).filter(|id| !id.is_empty()) {
        return Ok(id.to_string());
    }
    WORKFLOW_ID_ENV_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .ok_or(AgentError::MissingWorkflowId)
}
