//! Agent hand-off for normalized patient workbooks.
//!
//! Builds the documents exchanged with the triage agent workflow: the batched
//! workflow input for a run, outcome prompts sent after review, workflow id
//! resolution, and the bounded conversation history kept per session. The
//! agent invocation itself is left to the caller.

mod error;
mod outcome;
mod payload;
mod session;
mod workflow;

pub use error::{AgentError, Result};
pub use outcome::{OutcomePayload, OutcomePrompt, build_outcome_payload};
pub use payload::{
    AgentRequest, MAX_AGENT_BATCH, WorkflowInput, WorkflowRef, batch_limit, build_workflow_input,
};
pub use session::{MAX_HISTORY_TURNS, Role, SessionHistory, Turn};
pub use workflow::{WORKFLOW_ID_ENV_VARS, resolve_workflow_id, resolve_workflow_id_with};
