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

//! benchsum CLI library for command-line parsing and execution.
//!
//! The binary takes a single argument, the path of a benchmark log, and
//! writes `summary.md` into the same directory:
//!
//! ```bash
//! benchsum results/benchmark.log
//! # ✓ Generated: results/summary.md
//! ```
//!
//! # Configuration
//!
//! - `BENCHSUM_MAX_FILE_SIZE`: maximum accepted log size in bytes (default 1 GB)
//! - `RUST_LOG`: log filter for diagnostics on stderr (default `benchsum=warn`)
//!
//! # Exit Codes
//!
//! - `0`: report written (also when the log contained no results)
//! - `1`: wrong arguments, missing or unreadable log, or the report could not be written
//!
//! # Examples
//!
//! ```no_run
//! use benchsum_cli::commands::summarize;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), benchsum_cli::error::CliError> {
//! let report = summarize(Path::new("results/benchmark.log"))?;
//! println!("{}", report.display());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
