use std::fs;

use anyhow::{Context, Result};
use tracing::{info, warn};
use triage_agent::resolve_workflow_id;
use triage_normalization::{NormalizeOptions, Orientation, OrientationMode};
use triage_cli::pipeline::{agent_payload, normalize_workbook, workbook_json};

use crate::cli::{InspectArgs, NormalizeArgs, OrientationArg, PayloadArgs, WorkbookArgs};
use crate::types::InspectResult;

pub fn run_normalize(args: &NormalizeArgs) -> Result<()> {
    let outcome = normalize_workbook(&args.workbook.workbook, &normalize_options(&args.workbook))?;
    let json = workbook_json(&outcome.workbook, args.compact)?;
    match &args.output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "wrote normalized workbook");
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub fn run_inspect(args: &InspectArgs) -> Result<InspectResult> {
    let outcome = normalize_workbook(&args.workbook.workbook, &normalize_options(&args.workbook))?;
    Ok(InspectResult {
        workbook_path: args.workbook.workbook.clone(),
        orientation: outcome.orientation,
        workbook: outcome.workbook,
    })
}

pub fn run_payload(args: &PayloadArgs) -> Result<()> {
    match resolve_workflow_id(args.workflow_id.as_deref()) {
        Ok(workflow_id) => info!(%workflow_id, "agent workflow"),
        Err(error) => warn!(%error, "no agent workflow configured"),
    }
    let outcome = normalize_workbook(&args.workbook.workbook, &normalize_options(&args.workbook))?;
    let input = agent_payload(&outcome.workbook, args.limit, args.instructions.as_deref())?;
    let json = serde_json::to_string_pretty(&input).context("serialize workflow input")?;
    println!("{json}");
    Ok(())
}

fn normalize_options(args: &WorkbookArgs) -> NormalizeOptions {
    let mode = match args.orientation {
        OrientationArg::Auto => OrientationMode::Detect,
        OrientationArg::RowWise => OrientationMode::Force(Orientation::RowWise),
        OrientationArg::Transposed => OrientationMode::Force(Orientation::Transposed),
    };
    NormalizeOptions::default().with_orientation(mode)
}
