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

//! Fixed-width Markdown comparison tables.
//!
//! A table has one left-aligned label column (benchmark or variant names)
//! followed by one right-aligned column per displayed configuration:
//!
//! ```text
//! | Benchmark | clang-O3 |  gcc-O3 | clang-O2 | ...
//! |-----------|----------|---------|----------| ...
//! | BM_x      |  16.5 ns | 0.99 ns |      N/A | ...
//! ```
//!
//! Each column is padded to its widest cell so the raw Markdown stays
//! readable without rendering.

use crate::config::ConfigKey;
use crate::normalize::{normalize_precision, NOT_AVAILABLE};

/// One value column: header plus normalized cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub header: String,
    pub values: Vec<String>,
}

impl Column {
    /// Build a column, normalizing the cells' decimal precision.
    pub fn normalized<S: AsRef<str>>(header: impl Into<String>, raw: &[S]) -> Self {
        Self {
            header: header.into(),
            values: normalize_precision(raw),
        }
    }

    /// Display width: the widest of the header and all cells.
    pub fn width(&self) -> usize {
        self.values
            .iter()
            .map(|v| v.chars().count())
            .chain(std::iter::once(self.header.chars().count()))
            .max()
            .unwrap_or(0)
    }
}

/// A Markdown table with a label column and value columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    label_header: String,
    labels: Vec<String>,
    columns: Vec<Column>,
}

impl Table {
    /// Create a table with row labels and no value columns yet.
    pub fn new(label_header: impl Into<String>, labels: Vec<String>) -> Self {
        Self {
            label_header: label_header.into(),
            labels,
            columns: Vec::new(),
        }
    }

    /// Create a table with one column per displayed configuration.
    ///
    /// `lookup` returns the raw timing for a (configuration, row label) pair;
    /// missing cells become [`NOT_AVAILABLE`].
    pub fn for_configs<'a, F>(
        label_header: impl Into<String>,
        labels: Vec<String>,
        lookup: F,
    ) -> Self
    where
        F: Fn(&ConfigKey, &str) -> Option<&'a str>,
    {
        let mut table = Self::new(label_header, labels);
        for config in ConfigKey::display_columns() {
            let raw: Vec<&str> = table
                .labels
                .iter()
                .map(|label| lookup(&config, label.as_str()).unwrap_or(NOT_AVAILABLE))
                .collect();
            table.push_column(Column::normalized(config.to_string(), &raw));
        }
        table
    }

    /// Append a value column. Its length must match the number of rows.
    pub fn push_column(&mut self, column: Column) {
        debug_assert_eq!(column.values.len(), self.labels.len());
        self.columns.push(column);
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// True when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    fn label_width(&self) -> usize {
        self.labels
            .iter()
            .map(|l| l.chars().count())
            .chain(std::iter::once(self.label_header.chars().count()))
            .max()
            .unwrap_or(0)
    }

    /// Render as Markdown, one line per row, each terminated by `\n`.
    pub fn render(&self) -> String {
        let label_width = self.label_width();
        let widths: Vec<usize> = self.columns.iter().map(Column::width).collect();
        let mut md = String::new();

        // Header
        md.push_str(&format!("| {:<w$} ", self.label_header, w = label_width));
        for (column, &width) in self.columns.iter().zip(&widths) {
            md.push_str(&format!("| {:>w$} ", column.header, w = width));
        }
        md.push_str("|\n");

        // Separator
        md.push('|');
        md.push_str(&"-".repeat(label_width + 2));
        for &width in &widths {
            md.push('|');
            md.push_str(&"-".repeat(width + 2));
        }
        md.push_str("|\n");

        // Rows
        for (row, label) in self.labels.iter().enumerate() {
            md.push_str(&format!("| {:<w$} ", label, w = label_width));
            for (column, &width) in self.columns.iter().zip(&widths) {
                md.push_str(&format!("| {:>w$} ", column.values[row], w = width));
            }
            md.push_str("|\n");
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Compiler, OptLevel};

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_column_width_uses_header() {
        let column = Column::normalized("clang-O3", &["N/A"]);
        assert_eq!(column.width(), 8);
    }

    #[test]
    fn test_column_width_uses_widest_value() {
        let column = Column::normalized("gcc-O0", &["1234.5 ns", "1 ns"]);
        assert_eq!(column.values, vec!["1234.5 ns", "1.0 ns"]);
        assert_eq!(column.width(), 9);
    }

    #[test]
    fn test_render_alignment() {
        let mut table = Table::new("Benchmark", labels(&["BM_long_name", "BM_x"]));
        table.push_column(Column::normalized("clang-O3", &["1.5 ns", "12.25 ns"]));

        let expected = "\
| Benchmark    | clang-O3 |
|--------------|----------|
| BM_long_name |  1.50 ns |
| BM_x         | 12.25 ns |
";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn test_render_header_wider_than_labels() {
        let mut table = Table::new("Container", labels(&["Vec"]));
        table.push_column(Column::normalized("gcc-O1", &["N/A"]));

        let expected = "\
| Container | gcc-O1 |
|-----------|--------|
| Vec       |    N/A |
";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn test_for_configs_builds_all_columns() {
        let table = Table::for_configs("Benchmark", labels(&["BM_x"]), |config, _| {
            if *config == ConfigKey::new(Compiler::Gcc, OptLevel::O2) {
                Some("3.5 ns")
            } else {
                None
            }
        });

        let headers: Vec<&str> = table.columns().iter().map(|c| c.header.as_str()).collect();
        assert_eq!(
            headers,
            vec![
                "clang-O3", "gcc-O3", "clang-O2", "gcc-O2", "clang-O1", "gcc-O1", "clang-O0",
                "gcc-O0",
            ]
        );
        assert_eq!(table.columns()[3].values, vec!["3.5 ns"]);
        assert_eq!(table.columns()[0].values, vec!["N/A"]);
    }

    #[test]
    fn test_render_all_sentinel_column_uses_header_width() {
        let table = Table::for_configs("Benchmark", labels(&["BM_x"]), |_, _| None);
        let rendered = table.render();
        let row = rendered.lines().nth(2).unwrap();
        assert!(row.contains("|      N/A |"));
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new("Benchmark", Vec::new());
        assert!(table.is_empty());
        assert!(table.labels().is_empty());
    }
}
