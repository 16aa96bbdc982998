//! Batch normalization over an input directory.
//!
//! Files are processed one at a time, in file-name order:
//! 1. **Ingest**: read the file into a raw table
//! 2. **Normalize**: classify the layout and reshape into canonical records
//! 3. **Output**: write `<base>_normalized.csv`
//!
//! A file that fails to read or normalize is recorded and skipped. Failing
//! to create or write the output directory aborts the batch.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{error, info, info_span, warn};

use pricenorm_ingest::{list_input_files, read_raw_table};
use pricenorm_output::{ensure_output_dir, output_path_for, write_canonical};
use pricenorm_transform::{NormalizeOptions, NormalizedTable, normalize_table};

use crate::types::{FileOutcome, FileStatus, RunResult};

/// Inputs of one batch run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub options: NormalizeOptions,
}

/// Normalizes every supported file in `config.input_dir`.
///
/// # Errors
///
/// Fails when the input directory cannot be listed or the output directory
/// cannot be created or written. Per-file problems land in the result.
pub fn run_batch(config: &BatchConfig) -> Result<RunResult> {
    let files = list_input_files(&config.input_dir)
        .with_context(|| format!("list input files in {}", config.input_dir.display()))?;
    ensure_output_dir(&config.output_dir).context("prepare output directory")?;
    info!(
        input_dir = %config.input_dir.display(),
        output_dir = %config.output_dir.display(),
        files = files.len(),
        "starting batch"
    );

    let mut outcomes = Vec::with_capacity(files.len());
    let mut written = HashMap::new();
    for path in files {
        let span = info_span!("file", file = %path.display());
        let outcome = span.in_scope(|| process_file(&path, config, &mut written))?;
        outcomes.push(outcome);
    }

    let result = RunResult {
        input_dir: config.input_dir.clone(),
        output_dir: config.output_dir.clone(),
        has_errors: outcomes
            .iter()
            .any(|outcome| matches!(outcome.status, FileStatus::Failed { .. })),
        files: outcomes,
    };
    info!(
        files = result.files.len(),
        written = result.outputs_written(),
        failed = result.failed().count(),
        records = result.total_records(),
        "batch finished"
    );
    Ok(result)
}

/// Reads and normalizes one file. Only output errors propagate.
///
/// `written` maps each output path of this batch to the input that produced
/// it, so inputs sharing a stem are reported instead of silently replaced.
fn process_file(
    path: &Path,
    config: &BatchConfig,
    written: &mut HashMap<PathBuf, PathBuf>,
) -> Result<FileOutcome> {
    let (base_name, normalized) = match normalize_file(path, &config.options) {
        Ok(result) => result,
        Err(err) => {
            let message = format!("{err:#}");
            error!(error = %message, "skipping file");
            return Ok(FileOutcome::failed(path.to_path_buf(), message));
        }
    };

    let output = output_path_for(&config.output_dir, &base_name);
    let replaces = written.insert(output.clone(), path.to_path_buf());
    if let Some(previous) = &replaces {
        warn!(
            output = %output.display(),
            previous = %previous.display(),
            "output already written in this batch; overwriting"
        );
    }
    write_canonical(&output, &normalized.records)
        .with_context(|| format!("write {}", output.display()))?;

    let status = if normalized.records.is_empty() {
        warn!(
            layout = %normalized.layout,
            dropped = normalized.dropped,
            "no rows could be resolved; wrote header only"
        );
        FileStatus::Empty
    } else {
        FileStatus::Normalized
    };
    if normalized.used_fallback {
        warn!("no year/quarter blocks found; read as a single table");
    }
    info!(
        layout = %normalized.layout,
        records = normalized.records.len(),
        dropped = normalized.dropped,
        output = %output.display(),
        "normalized"
    );
    Ok(FileOutcome {
        file: path.to_path_buf(),
        output: Some(output),
        layout: Some(normalized.layout),
        products: normalized.products().len(),
        records: normalized.records.len(),
        dropped: normalized.dropped,
        replaces,
        status,
    })
}

fn normalize_file(path: &Path, options: &NormalizeOptions) -> Result<(String, NormalizedTable)> {
    let table = read_raw_table(path).context("read input")?;
    let normalized = normalize_table(&table, options).context("normalize")?;
    Ok((table.base_name, normalized))
}
