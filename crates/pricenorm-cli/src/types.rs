//! Batch results, shared by the summary table and the JSON run report.

use std::path::PathBuf;

use pricenorm_model::LayoutKind;
use serde::Serialize;

/// Outcome of one `normalize` run over an input directory.
#[derive(Debug, Serialize)]
pub struct RunResult {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub files: Vec<FileOutcome>,
    pub has_errors: bool,
}

impl RunResult {
    pub fn total_records(&self) -> usize {
        self.files.iter().map(|file| file.records).sum()
    }

    pub fn failed(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files
            .iter()
            .filter(|file| matches!(file.status, FileStatus::Failed { .. }))
    }

    pub fn outputs_written(&self) -> usize {
        self.files.iter().filter(|file| file.output.is_some()).count()
    }
}

/// What happened to a single input file.
#[derive(Debug, Serialize)]
pub struct FileOutcome {
    pub file: PathBuf,
    pub output: Option<PathBuf>,
    pub layout: Option<LayoutKind>,
    pub products: usize,
    pub records: usize,
    pub dropped: usize,
    /// Earlier input of this batch whose output this file overwrote.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replaces: Option<PathBuf>,
    #[serde(flatten)]
    pub status: FileStatus,
}

impl FileOutcome {
    pub(crate) fn failed(file: PathBuf, error: String) -> Self {
        Self {
            file,
            output: None,
            layout: None,
            products: 0,
            records: 0,
            dropped: 0,
            replaces: None,
            status: FileStatus::Failed { error },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    /// Normalized and written with at least one record.
    Normalized,
    /// Written, but every candidate row was dropped.
    Empty,
    /// Could not be read or matched no layout; nothing written.
    Failed { error: String },
}
