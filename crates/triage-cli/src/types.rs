use std::path::PathBuf;

use triage_model::NormalizedWorkbook;
use triage_normalization::Orientation;

#[derive(Debug)]
pub struct InspectResult {
    pub workbook_path: PathBuf,
    pub orientation: Orientation,
    pub workbook: NormalizedWorkbook,
}
