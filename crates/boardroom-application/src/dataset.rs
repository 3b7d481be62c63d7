//! Dataset intake.
//!
//! Accepts the bundled sample dataset or a JSON file matching the
//! `BusinessData` shape. CSV is deliberately not parsed - the selector is
//! rejected with a clear error instead of a half-implemented parser.

use std::path::Path;

use boardroom_core::data::{sample_business_data, BusinessData};
use boardroom_core::{BoardroomError, Result};

/// The selector that picks the bundled dataset.
pub const SAMPLE_SELECTOR: &str = "sample";

/// Loads a dataset from a selector: `"sample"` or a path to a JSON file.
pub fn load_dataset(selector: &str) -> Result<BusinessData> {
    if selector == SAMPLE_SELECTOR {
        return Ok(sample_business_data());
    }

    let path = Path::new(selector);
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => {
            let raw = std::fs::read_to_string(path).map_err(|err| {
                BoardroomError::dataset(format!("cannot read {}: {err}", path.display()))
            })?;
            let data: BusinessData = serde_json::from_str(&raw)?;
            tracing::info!(company = %data.company_name, "dataset loaded");
            Ok(data)
        }
        Some("csv") => Err(BoardroomError::dataset(
            "CSV datasets are not supported; provide a JSON file matching the BusinessData \
             shape, or use 'sample'",
        )),
        _ => Err(BoardroomError::dataset(format!(
            "unrecognized dataset '{selector}'; expected 'sample' or a .json file"
        ))),
    }
}
