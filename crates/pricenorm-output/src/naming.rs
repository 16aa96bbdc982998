//! Output file naming.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

/// Suffix appended to a source file's base name for its canonical output.
pub const NORMALIZED_SUFFIX: &str = "_normalized";

/// Runs of characters that are not allowed in file names on common platforms.
static UNSAFE_FILENAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\\/:*?"<>|]+"#).expect("filename regex"));

/// Path of the canonical output for a source file with base name `base_name`.
///
/// ```
/// use std::path::Path;
/// use pricenorm_output::output_path_for;
///
/// let path = output_path_for(Path::new("normalized_files"), "pvc_prices");
/// assert_eq!(path, Path::new("normalized_files/pvc_prices_normalized.csv"));
/// ```
pub fn output_path_for(output_dir: &Path, base_name: &str) -> PathBuf {
    output_dir.join(format!("{base_name}{NORMALIZED_SUFFIX}.csv"))
}

/// Replaces each run of `\ / : * ? " < > |` with a single `_`.
pub fn sanitize_filename(name: &str) -> String {
    UNSAFE_FILENAME_CHARS.replace_all(name, "_").into_owned()
}
