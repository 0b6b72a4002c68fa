//! Batch processing of layout dumps.
//!
//! Every `*.json` layout dump in an input directory is turned into an
//! outline file of the same stem in an output directory. Documents are
//! independent, so they are processed in parallel. A document that fails
//! gets a fallback record carrying the error and the batch continues.
//! Inputs whose output names differ only in case (`a.json`, `a.JSON`)
//! share one output file; the first in sorted order wins and the others
//! are reported as failures.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::{OutlineExtractor, OutlineOptions};
use crate::error::{Error, Result};
use crate::model::{LayoutDocument, Outline};
use crate::render::{to_json, JsonFormat};

/// Output record for one document of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRecord {
    /// The extracted outline (empty on failure)
    #[serde(flatten)]
    pub outline: Outline,

    /// Error message when the document could not be processed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchRecord {
    /// Record for a successfully processed document.
    pub fn success(outline: Outline) -> Self {
        Self {
            outline,
            error: None,
        }
    }

    /// Fallback record for a failed document.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            outline: Outline::new(),
            error: Some(error.into()),
        }
    }
}

/// Outcome of a single document.
#[derive(Debug, Clone)]
pub struct BatchItem {
    /// Input layout dump
    pub input: PathBuf,
    /// Outline file; not written when another input already claimed it
    pub output: PathBuf,
    /// Error message if extraction failed
    pub error: Option<String>,
}

/// Summary of a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Number of input documents, failed ones included
    pub processed: usize,
    /// Documents that failed, with their error messages
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchReport {
    /// Number of documents processed without error.
    pub fn succeeded(&self) -> usize {
        self.processed - self.failed.len()
    }
}

/// List layout dumps (`*.json`, any case) in a directory, sorted by name.
pub fn collect_inputs(input_dir: &Path) -> Result<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        return Err(Error::InvalidInput(format!(
            "{} is not a directory",
            input_dir.display()
        )));
    }

    let mut inputs = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if path.is_file() && is_json {
            inputs.push(path);
        }
    }
    inputs.sort();
    Ok(inputs)
}

/// Load a layout dump and extract its outline.
pub fn process_file(extractor: &OutlineExtractor, path: &Path) -> Result<Outline> {
    let json = fs::read_to_string(path)?;
    let doc = LayoutDocument::from_json(&json)?;
    extractor.extract_document(&doc)
}

/// Map each input to `<stem>.json` in `output_dir`.
///
/// Output names are compared case-insensitively; an input whose name is
/// already claimed by an earlier one gets `Err` with the claimed path.
fn assign_outputs(
    inputs: &[PathBuf],
    output_dir: &Path,
) -> Vec<(PathBuf, std::result::Result<PathBuf, PathBuf>)> {
    let mut claimed = HashSet::new();
    inputs
        .iter()
        .map(|input| {
            let stem = input.file_stem().unwrap_or_default().to_string_lossy();
            let name = format!("{}.json", stem);
            let output = output_dir.join(&name);
            let target = if claimed.insert(name.to_lowercase()) {
                Ok(output)
            } else {
                Err(output)
            };
            (input.clone(), target)
        })
        .collect()
}

/// Extract one document and write its record; returns the record's error.
///
/// Extraction failures are written as fallback records. A record that
/// cannot be written at all is reported as the error.
fn write_record(
    extractor: &OutlineExtractor,
    input: &Path,
    output: &Path,
    format: JsonFormat,
) -> std::result::Result<(), String> {
    let record = match process_file(extractor, input) {
        Ok(outline) => BatchRecord::success(outline),
        Err(e) => BatchRecord::failure(e.to_string()),
    };
    let written = to_json(&record, format).and_then(|json| fs::write(output, json).map_err(Error::from));
    match (written, record.error) {
        (Err(e), _) => Err(format!("cannot write {}: {}", output.display(), e)),
        (Ok(()), Some(error)) => Err(error),
        (Ok(()), None) => Ok(()),
    }
}

/// Process every layout dump in `input_dir` into `output_dir`.
pub fn process_directory(
    input_dir: &Path,
    output_dir: &Path,
    options: &OutlineOptions,
    format: JsonFormat,
) -> Result<BatchReport> {
    process_directory_with(input_dir, output_dir, options, format, |_| {})
}

/// Like [`process_directory`], calling `on_item` after each document.
pub fn process_directory_with<F>(
    input_dir: &Path,
    output_dir: &Path,
    options: &OutlineOptions,
    format: JsonFormat,
    on_item: F,
) -> Result<BatchReport>
where
    F: Fn(&BatchItem) + Sync,
{
    let inputs = collect_inputs(input_dir)?;
    fs::create_dir_all(output_dir)?;
    log::debug!("Batch: {} layout dumps in {}", inputs.len(), input_dir.display());

    let extractor = OutlineExtractor::with_options(options.clone());
    let targets = assign_outputs(&inputs, output_dir);

    let items: Vec<BatchItem> = targets
        .par_iter()
        .map(|(input, target)| {
            let (output, error) = match target {
                Ok(output) => {
                    let error = write_record(&extractor, input, output, format).err();
                    (output.clone(), error)
                }
                Err(claimed) => (
                    claimed.clone(),
                    Some(format!(
                        "output {} is already used by another input",
                        claimed.display()
                    )),
                ),
            };
            if let Some(error) = &error {
                log::warn!("Failed to process {}: {}", input.display(), error);
            }

            let item = BatchItem {
                input: input.clone(),
                output,
                error,
            };
            on_item(&item);
            item
        })
        .collect();

    let mut report = BatchReport {
        processed: items.len(),
        failed: Vec::new(),
    };
    for item in items {
        if let Some(error) = item.error {
            report.failed.push((item.input, error));
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_record_shape() {
        let record = BatchRecord::failure("Layout JSON error: EOF");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["title"], "");
        assert_eq!(json["outline"], serde_json::json!([]));
        assert_eq!(json["error"], "Layout JSON error: EOF");
    }

    #[test]
    fn test_success_record_has_no_error_field() {
        let record = BatchRecord::success(Outline::new());
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_collect_inputs_rejects_files() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let result = collect_inputs(file.path());
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_assign_outputs_detects_case_collisions() {
        let inputs = vec![
            PathBuf::from("in/A.json"),
            PathBuf::from("in/a.JSON"),
            PathBuf::from("in/b.json"),
        ];
        let targets = assign_outputs(&inputs, Path::new("out"));

        assert_eq!(targets[0].1, Ok(PathBuf::from("out/A.json")));
        assert_eq!(targets[1].1, Err(PathBuf::from("out/a.json")));
        assert_eq!(targets[2].1, Ok(PathBuf::from("out/b.json")));
    }

    #[test]
    fn test_report_succeeded() {
        let report = BatchReport {
            processed: 3,
            failed: vec![(PathBuf::from("a.json"), "bad".to_string())],
        };
        assert_eq!(report.succeeded(), 2);
    }
}
