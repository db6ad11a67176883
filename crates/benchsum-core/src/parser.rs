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

//! Benchmark log parser.
//!
//! The log is a sequence of configuration sections. Each section starts with
//! a header naming the compiler and optimization level, followed by the
//! result table printed by the benchmark binary:
//!
//! ```text
//! ========== clang -O3 ==========
//! Benchmark                 Time             CPU   Iterations
//! -------------------------------------------------------------
//! BM_branch_sorted       1.21 ns         1.20 ns    583720123
//! Copy/Small/StdVector   15.3 ns         15.2 ns     45932012
//! ```
//!
//! Result lines record the CPU time (the second timing) under the most
//! recent header. Everything else is skipped without comment.

use crate::config::{Compiler, ConfigKey, OptLevel};
use crate::results::BenchmarkResults;
use crate::UNIT_SUFFIX;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^=+\s+(clang|gcc)\s+-O([0-9])").expect("valid header regex"));

static RESULT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\S+)\s+[0-9.]+\s+ns\s+([0-9.]+)\s+ns").expect("valid result regex")
});

/// A classified log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogLine<'a> {
    /// Configuration header switching the current configuration.
    Header(ConfigKey),
    /// Benchmark result: name and CPU time (without unit).
    Measurement { name: &'a str, cpu_time: &'a str },
    /// Anything else.
    Other,
}

impl<'a> LogLine<'a> {
    /// Classify a single line. Headers take precedence over results.
    pub fn classify(line: &'a str) -> Self {
        if let Some(caps) = HEADER_RE.captures(line) {
            let compiler = caps.get(1).and_then(|m| m.as_str().parse::<Compiler>().ok());
            let level = caps
                .get(2)
                .and_then(|m| m.as_str().chars().next())
                .and_then(OptLevel::from_digit);
            if let (Some(compiler), Some(level)) = (compiler, level) {
                return LogLine::Header(ConfigKey::new(compiler, level));
            }
        }

        if let Some(caps) = RESULT_RE.captures(line) {
            if let (Some(name), Some(cpu)) = (caps.get(1), caps.get(2)) {
                return LogLine::Measurement {
                    name: name.as_str(),
                    cpu_time: cpu.as_str(),
                };
            }
        }

        LogLine::Other
    }
}

/// Fold state: the configuration currently in effect plus everything
/// recorded so far.
#[derive(Debug, Default)]
pub struct LogParser {
    current: Option<ConfigKey>,
    results: BenchmarkResults,
}

impl LogParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// The configuration set by the most recent header, if any.
    pub fn current(&self) -> Option<ConfigKey> {
        self.current
    }

    /// Feed one line.
    pub fn feed_line(mut self, line: &str) -> Self {
        match LogLine::classify(line) {
            LogLine::Header(config) => {
                debug!(config = %config, "configuration header");
                self.current = Some(config);
            }
            LogLine::Measurement { name, cpu_time } => {
                if let Some(config) = self.current {
                    self.results
                        .record(config, name, format!("{}{}", cpu_time, UNIT_SUFFIX));
                }
            }
            LogLine::Other => {}
        }
        self
    }

    /// Finish parsing and return the collected results.
    pub fn finish(self) -> BenchmarkResults {
        debug!(
            configs = self.results.configs().count(),
            results = self.results.len(),
            "log parsed"
        );
        self.results
    }
}

/// Parse a whole benchmark log.
///
/// # Examples
///
/// ```
/// use benchsum_core::{parse_log, Compiler, ConfigKey, OptLevel};
///
/// let results = parse_log("===== gcc -O2 =====\nBM_x   10 ns   9.75 ns   1000\n");
/// let key = ConfigKey::new(Compiler::Gcc, OptLevel::O2);
/// assert_eq!(results.get(&key, "BM_x"), Some("9.75 ns"));
/// ```
pub fn parse_log(content: &str) -> BenchmarkResults {
    content
        .lines()
        .fold(LogParser::new(), LogParser::feed_line)
        .finish()
}
