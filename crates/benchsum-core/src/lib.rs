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

//! Benchmark log parsing and comparison table generation.
//!
//! This crate turns the text output of a compiler benchmark run (one
//! Google-Benchmark style section per compiler/optimization-level pair) into
//! a Markdown report comparing every configuration side by side.
//!
//! # Pipeline
//!
//! ```text
//! log text ──► parser ──► BenchmarkResults
//!                              │
//!                              ├─► pattern (simple / hierarchical)
//!                              ├─► group   (hierarchical only)
//!                              ├─► normalize (per column)
//!                              └─► table ──► report (Markdown document)
//! ```
//!
//! Every stage is a pure function over in-memory data. Lines the parser does
//! not recognize are skipped, so nothing in this crate can fail; reading the
//! log and writing the report belong to the caller.
//!
//! # Example
//!
//! ```
//! use benchsum_core::{generate_summary, parse_log};
//!
//! let log = "\
//! ========== clang -O3 ==========
//! BM_sort      120 ns      118 ns    5000000
//! ========== gcc -O3 ==========
//! BM_sort      131 ns      129.5 ns  5000000
//! ";
//!
//! let results = parse_log(log);
//! let summary = generate_summary(&results);
//!
//! assert!(summary.starts_with("# Benchmark Summary"));
//! assert!(summary.contains("**Naming Pattern**: simple"));
//! assert!(summary.contains("129.5 ns"));
//! ```

pub mod config;
pub mod group;
mod limits;
pub mod normalize;
pub mod parser;
pub mod pattern;
pub mod report;
pub mod results;
pub mod table;

pub use config::{Compiler, ConfigKey, OptLevel};
pub use group::{group_benchmarks, split_benchmark_name, Groups, OTHER_GROUP};
pub use limits::Limits;
pub use normalize::{decimal_places, normalize_precision, NOT_AVAILABLE};
pub use parser::{parse_log, LogParser};
pub use pattern::{detect_naming_pattern, NamingPattern};
pub use report::{generate_summary, OUTPUT_FILE_NAME};
pub use results::BenchmarkResults;
pub use table::{Column, Table};

/// Suffix appended to every stored timing value.
pub const UNIT_SUFFIX: &str = " ns";

/// Separator between the segments of a hierarchical benchmark name.
pub const SEPARATOR: char = '/';
