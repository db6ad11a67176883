// Benchsum - Compiler Benchmark Log Summarizer
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Summarize command - benchmark log to Markdown report

use super::{limits_from_env, read_file, write_output};
use crate::error::CliError;
use benchsum_core::{generate_summary, parse_log, OUTPUT_FILE_NAME};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Location of the report for a given log: `summary.md` in the log's directory.
///
/// # Examples
///
/// ```
/// use benchsum_cli::commands::output_path_for;
/// use std::path::Path;
///
/// assert_eq!(
///     output_path_for(Path::new("results/benchmark.log")),
///     Path::new("results/summary.md")
/// );
/// assert_eq!(output_path_for(Path::new("benchmark.log")), Path::new("summary.md"));
/// ```
pub fn output_path_for(log: &Path) -> PathBuf {
    log.parent()
        .unwrap_or_else(|| Path::new(""))
        .join(OUTPUT_FILE_NAME)
}

/// Generate `summary.md` next to a benchmark log.
///
/// Reads the log, extracts per-configuration timings, renders the comparison
/// tables and overwrites any existing report in the same directory.
///
/// # Returns
///
/// The path of the written report.
///
/// # Errors
///
/// Returns `Err` if:
/// - The log does not exist, is a directory, or exceeds the size limit
/// - The log cannot be read
/// - The report cannot be written
///
/// # Examples
///
/// ```no_run
/// use benchsum_cli::commands::summarize;
/// use std::path::Path;
///
/// # fn main() -> Result<(), benchsum_cli::error::CliError> {
/// let report = summarize(Path::new("results/benchmark.log"))?;
/// assert!(report.ends_with("summary.md"));
/// # Ok(())
/// # }
/// ```
///
/// # Output
///
/// Prints `✓ Generated: <path>` to stdout on success.
pub fn summarize(log: &Path) -> Result<PathBuf, CliError> {
    let content = read_file(log, &limits_from_env())?;

    let results = parse_log(&content);
    if results.is_empty() {
        info!(log = %log.display(), "no benchmark results found");
    }
    let summary = generate_summary(&results);

    let output = output_path_for(log);
    write_output(&summary, &output)?;

    println!("{} Generated: {}", "✓".green().bold(), output.display());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_summarize_writes_sibling_report() {
        let dir = tempdir().unwrap();
        let log = dir.path().join("benchmark.log");
        fs::write(
            &log,
            "===== clang -O3 =====\nBM_x   10 ns   16.5 ns   1000\n",
        )
        .unwrap();

        let output = summarize(&log).unwrap();
        assert_eq!(output, dir.path().join("summary.md"));

        let report = fs::read_to_string(&output).unwrap();
        assert!(report.contains("| BM_x      |  16.5 ns |"));
    }

    #[test]
    fn test_summarize_missing_log() {
        let dir = tempdir().unwrap();
        let err = summarize(&dir.path().join("nope.log")).unwrap_err();
        assert!(err.to_string().starts_with("File not found:"));
        assert!(!dir.path().join("summary.md").exists());
    }

    #[test]
    fn test_output_path_for_nested() {
        assert_eq!(
            output_path_for(Path::new("/tmp/run/benchmark.log")),
            PathBuf::from("/tmp/run/summary.md")
        );
    }
}
