//! Workbook pipeline: read, normalize, and shape output documents.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span, trace};
use triage_agent::{AgentRequest, WorkflowInput, build_workflow_input};
use triage_ingest::read_workbook;
use triage_model::NormalizedWorkbook;
use triage_normalization::{NormalizeOptions, NormalizeOutcome, normalize_table_with};

use crate::logging::redact_value;

/// Reads and normalizes one workbook.
pub fn normalize_workbook(path: &Path, options: &NormalizeOptions) -> Result<NormalizeOutcome> {
    let span = info_span!("workbook", path = %path.display());
    let _guard = span.enter();

    let table = read_workbook(path)
        .with_context(|| format!("read workbook {}", path.display()))?;
    let outcome = normalize_table_with(&table, options)
        .with_context(|| format!("normalize workbook {}", path.display()))?;

    info!(
        orientation = %outcome.orientation,
        patients = outcome.workbook.patient_count(),
        ground_truth = outcome.workbook.ground_truth.len(),
        "workbook normalized"
    );
    log_patient_notes(&outcome.workbook);
    Ok(outcome)
}

fn log_patient_notes(workbook: &NormalizedWorkbook) {
    for patient in &workbook.patients {
        trace!(
            patient_id = %redact_value(&patient.patient_id),
            note = %redact_value(&patient.note),
            "patient note"
        );
    }
}

/// Serializes a workbook as `{patients, groundTruth}`.
pub fn workbook_json(workbook: &NormalizedWorkbook, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(workbook)
    } else {
        serde_json::to_string_pretty(workbook)
    };
    json.context("serialize workbook")
}

/// Builds the agent workflow input for the first batch of a workbook.
pub fn agent_payload(
    workbook: &NormalizedWorkbook,
    limit: Option<usize>,
    instructions: Option<&str>,
) -> Result<WorkflowInput> {
    let mut request = AgentRequest::from_workbook(workbook).context("encode patients")?;
    request.limit = limit;
    request.instructions = instructions.map(str::to_string);
    build_workflow_input(request).context("build workflow input")
}
