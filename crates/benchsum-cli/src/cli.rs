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

//! Command-line argument definition.

use crate::commands;
use crate::error::CliError;
use clap::Parser;
use std::path::PathBuf;

/// benchsum - compiler benchmark log summarizer
///
/// Reads a benchmark log containing one section per compiler and
/// optimization level and writes `summary.md` next to it, comparing
/// clang and gcc at O3, O2, O1 and O0 side by side.
///
/// # Examples
///
/// ```bash
/// # Write results/summary.md
/// benchsum results/benchmark.log
///
/// # With debug logging
/// RUST_LOG=benchsum=debug benchsum results/benchmark.log
/// ```
#[derive(Parser, Debug)]
#[command(name = "benchsum")]
#[command(
    author,
    version,
    about = "Summarize a compiler benchmark log as Markdown tables",
    long_about = None
)]
pub struct Cli {
    /// Benchmark log file (the report is written to summary.md in the same directory)
    #[arg(value_name = "LOG")]
    pub log: PathBuf,
}

impl Cli {
    /// Run the summary for the given log.
    ///
    /// # Returns
    ///
    /// The path of the written report.
    pub fn execute(self) -> Result<PathBuf, CliError> {
        commands::summarize(&self.log)
    }
}
