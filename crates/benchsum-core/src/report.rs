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

//! Markdown summary document assembly.

use crate::config::{display_levels, ConfigKey};
use crate::group::{group_benchmarks, Groups};
use crate::pattern::{detect_naming_pattern, NamingPattern};
use crate::results::BenchmarkResults;
use crate::table::Table;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// File name of the generated report, written next to the input log.
pub const OUTPUT_FILE_NAME: &str = "summary.md";

/// Document title.
pub const TITLE: &str = "# Benchmark Summary";

const NO_RESULTS: &str = "No O3 results found.";
const NO_BENCHMARKS: &str = "No benchmarks found.\n";
const BENCHMARK_HEADER: &str = "Benchmark";
const CONTAINER_HEADER: &str = "Container";

/// Render the full summary document for a set of results.
///
/// An empty result set yields a short document stating that nothing was
/// found. Otherwise the document lists the displayed optimization levels,
/// the detected naming pattern, and the comparison table(s).
pub fn generate_summary(results: &BenchmarkResults) -> String {
    if results.is_empty() {
        return format!("{}\n\n{}\n", TITLE, NO_RESULTS);
    }

    let pattern = detect_naming_pattern(results.benchmark_names());
    debug!(%pattern, benchmarks = results.benchmark_names().len(), "naming pattern detected");

    let mut md = String::new();
    md.push_str(&format!("{}\n\n", TITLE));
    md.push_str(&format!("**Optimization Levels**: {}\n\n", display_levels()));
    md.push_str(&format!("**Naming Pattern**: {}\n\n", pattern));

    match pattern {
        NamingPattern::Simple => md.push_str(&simple_table(results)),
        NamingPattern::Hierarchical => md.push_str(&hierarchical_tables(results)),
    }

    md
}

/// One table with every benchmark as a row.
fn simple_table(results: &BenchmarkResults) -> String {
    let names: Vec<String> = results
        .benchmark_names()
        .into_iter()
        .map(str::to_string)
        .collect();

    if names.is_empty() {
        return NO_BENCHMARKS.to_string();
    }

    Table::for_configs(BENCHMARK_HEADER, names, |config, name| results.get(config, name)).render()
}

/// One table per group, rows are the variants within the group.
fn hierarchical_tables(results: &BenchmarkResults) -> String {
    let grouped: BTreeMap<ConfigKey, Groups> = ConfigKey::display_columns()
        .map(|config| {
            let groups = results
                .timings(&config)
                .map(group_benchmarks)
                .unwrap_or_default();
            (config, groups)
        })
        .collect();

    let group_names: BTreeSet<&str> = grouped
        .values()
        .flat_map(|groups| groups.keys().map(String::as_str))
        .collect();

    if group_names.is_empty() {
        return NO_BENCHMARKS.to_string();
    }

    let mut md = String::new();
    let mut tables = 0usize;

    for group in group_names {
        let variants: BTreeSet<&str> = grouped
            .values()
            .filter_map(|groups| groups.get(group))
            .flat_map(|variants| variants.keys().map(String::as_str))
            .collect();

        if variants.is_empty() {
            continue;
        }

        let labels: Vec<String> = variants.into_iter().map(str::to_string).collect();
        let table = Table::for_configs(CONTAINER_HEADER, labels, |config, variant| {
            grouped
                .get(config)
                .and_then(|groups| groups.get(group))
                .and_then(|variants| variants.get(variant))
                .map(String::as_str)
        });

        md.push_str(&format!("## {}\n\n", group));
        md.push_str(&table.render());
        md.push('\n');
        tables += 1;
    }

    debug!(tables, "hierarchical tables rendered");
    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Compiler, OptLevel};
    use crate::parser::parse_log;

    #[test]
    fn test_empty_results_document() {
        let summary = generate_summary(&BenchmarkResults::new());
        assert_eq!(summary, "# Benchmark Summary\n\nNo O3 results found.\n");
    }

    #[test]
    fn test_simple_document_header() {
        let results = parse_log("===== clang -O3 =====\nBM_x   10 ns   16.5 ns   1000\n");
        let summary = generate_summary(&results);

        assert!(summary.starts_with(
            "# Benchmark Summary\n\n\
             **Optimization Levels**: O3, O2, O1, O0\n\n\
             **Naming Pattern**: simple\n\n"
        ));
        assert!(summary.contains("| Benchmark |"));
    }

    #[test]
    fn test_simple_table_cells() {
        let log = "\
===== clang -O3 =====
BM_x   10 ns   16.5 ns   1000
===== gcc -O3 =====
BM_x   10 ns   0.99 ns   1000
";
        let summary = generate_summary(&parse_log(log));
        let row = summary
            .lines()
            .find(|l| l.starts_with("| BM_x"))
            .unwrap();

        let cells: Vec<&str> = row.trim_matches('|').split('|').map(str::trim).collect();
        assert_eq!(cells[0], "BM_x");
        assert_eq!(cells[1], "16.5 ns");
        assert_eq!(cells[2], "0.99 ns");
        assert!(cells[3..].iter().all(|c| *c == "N/A"));
        assert_eq!(cells.len(), 9);
    }

    #[test]
    fn test_hierarchical_document() {
        let log = "\
===== clang -O3 =====
Copy/Small/StdVec      15 ns     15.2 ns   100
Copy/Small/SmallVec    3 ns      3.05 ns   100
Iterate/Large/StdVec   90 ns     88 ns     100
";
        let summary = generate_summary(&parse_log(log));

        assert!(summary.contains("**Naming Pattern**: hierarchical"));
        assert!(summary.contains("## Copy/Small\n\n| Container |"));
        assert!(summary.contains("## Iterate/Large\n\n"));
        assert!(summary.contains("| SmallVec  |  3.05 ns |"));
        assert!(summary.contains("| StdVec    | 15.20 ns |"));

        let copy = summary.find("## Copy/Small").unwrap();
        let iterate = summary.find("## Iterate/Large").unwrap();
        assert!(copy < iterate);
    }

    #[test]
    fn test_hierarchical_other_group() {
        let log = "\
===== gcc -O2 =====
A/x   1 ns   1 ns   1
A/y   1 ns   2 ns   1
BM_flat   1 ns   3 ns   1
";
        let summary = generate_summary(&parse_log(log));
        assert!(summary.contains("## A\n\n"));
        assert!(summary.contains("## Other\n\n"));
        assert!(summary.contains("| BM_flat   |"));
    }

    #[test]
    fn test_hierarchical_only_undisplayed_levels() {
        let log = "===== clang -O7 =====\nA/x 1 ns 1 ns 1\n";
        let summary = generate_summary(&parse_log(log));
        assert!(summary.ends_with("**Naming Pattern**: hierarchical\n\nNo benchmarks found.\n"));
    }

    #[test]
    fn test_simple_undisplayed_level_still_a_row() {
        let mut results = BenchmarkResults::new();
        let o9 = ConfigKey::new(Compiler::Gcc, OptLevel::from_digit('9').unwrap());
        results.record(o9, "BM_hidden", "1 ns");

        let summary = generate_summary(&results);
        let row = summary.lines().find(|l| l.starts_with("| BM_hidden")).unwrap();
        assert!(!row.contains("1 ns"));
        assert_eq!(row.matches("N/A").count(), 8);
    }

    #[test]
    fn test_groups_separated_by_blank_line() {
        let log = "===== clang -O3 =====\nA/x 1 ns 1 ns 1\nB/y 1 ns 2 ns 1\n";
        let summary = generate_summary(&parse_log(log));
        assert!(summary.contains("|\n\n## B\n\n"));
        assert!(summary.ends_with("|\n\n"));
    }
}
