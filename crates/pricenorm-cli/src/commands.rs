use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use pricenorm_cli::pipeline::{BatchConfig, run_batch};
use pricenorm_cli::types::RunResult;
use pricenorm_output::{NORMALIZED_SUFFIX, ProductSeries, read_product_series};
use pricenorm_transform::NormalizeOptions;

use crate::cli::{InspectArgs, NormalizeArgs};

pub fn run_normalize(args: &NormalizeArgs) -> Result<RunResult> {
    let config = BatchConfig {
        input_dir: args.input_dir.clone(),
        output_dir: args.output_dir.clone(),
        options: NormalizeOptions::default()
            .with_header_match(args.header_match.into())
            .with_wide_date_tokens(args.wide_date_tokens.into()),
    };
    let result = run_batch(&config)?;
    if let Some(path) = &args.report {
        write_report(path, &result)?;
        info!(report = %path.display(), "wrote run report");
    }
    Ok(result)
}

pub fn run_inspect(args: &InspectArgs) -> Result<Vec<(PathBuf, Vec<ProductSeries>)>> {
    let files = normalized_files(&args.path)?;
    let mut inspected = Vec::with_capacity(files.len());
    for file in files {
        let series = read_product_series(&file)
            .with_context(|| format!("read normalized file {}", file.display()))?;
        debug!(file = %file.display(), products = series.len(), "read series");
        inspected.push((file, series));
    }
    Ok(inspected)
}

fn write_report(path: &Path, result: &RunResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result).context("serialize run report")?;
    fs::write(path, json).with_context(|| format!("write run report {}", path.display()))
}

/// `path` itself if it is a file, otherwise its `*_normalized.csv` entries.
fn normalized_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    let suffix = format!("{NORMALIZED_SUFFIX}.csv");
    let mut files = Vec::new();
    for entry in fs::read_dir(path).with_context(|| format!("read {}", path.display()))? {
        let entry = entry.with_context(|| format!("read {}", path.display()))?;
        let file = entry.path();
        let matches = file
            .file_name()
            .and_then(std::ffi::OsStr::to_str)
            .is_some_and(|name| name.ends_with(&suffix));
        if matches && file.is_file() {
            files.push(file);
        }
    }
    files.sort();
    Ok(files)
}
