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

//! CLI command implementations

mod summarize;

pub use summarize::{output_path_for, summarize};

use crate::error::CliError;
use benchsum_core::Limits;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Environment variable overriding the maximum input size in bytes.
pub const MAX_FILE_SIZE_ENV: &str = "BENCHSUM_MAX_FILE_SIZE";

/// Get the input limits, honoring `BENCHSUM_MAX_FILE_SIZE`.
///
/// Falls back to [`Limits::default`] when the variable is unset or not a
/// valid byte count.
pub fn limits_from_env() -> Limits {
    let limits = Limits::default();
    match std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
    {
        Some(bytes) => limits.with_max_file_size(bytes),
        None => limits,
    }
}

/// Read a benchmark log from disk with existence and size checks.
///
/// # Errors
///
/// - [`CliError::NotFound`] if the path does not exist
/// - [`CliError::InvalidInput`] if the path is a directory
/// - [`CliError::FileTooLarge`] if the file exceeds `limits`
/// - [`CliError::Io`] if the file cannot be read or is not valid UTF-8
///
/// # Examples
///
/// ```no_run
/// use benchsum_cli::commands::{limits_from_env, read_file};
/// use std::path::Path;
///
/// # fn main() -> Result<(), benchsum_cli::error::CliError> {
/// let content = read_file(Path::new("results/benchmark.log"), &limits_from_env())?;
/// assert!(!content.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn read_file(path: &Path, limits: &Limits) -> Result<String, CliError> {
    if !path.exists() {
        return Err(CliError::not_found(path));
    }

    // Check file size first to avoid reading huge logs into memory
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;
    if metadata.is_dir() {
        return Err(CliError::invalid_input(format!(
            "'{}' is a directory, expected a benchmark log",
            path.display()
        )));
    }
    if !limits.allows_file_size(metadata.len()) {
        return Err(CliError::file_too_large(
            path,
            metadata.len(),
            limits.max_file_size,
        ));
    }

    debug!(path = %path.display(), bytes = metadata.len(), "reading log");
    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content to a file, replacing anything already there.
pub fn write_output(content: &str, path: &Path) -> Result<(), CliError> {
    debug!(path = %path.display(), bytes = content.len(), "writing report");
    fs::write(path, content).map_err(|e| CliError::io_error(path, e))
}
