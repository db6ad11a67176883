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

//! Per-column decimal precision normalization.
//!
//! Benchmark output prints timings with a varying number of significant
//! digits (`16.5 ns`, `0.990 ns`, `2.03 ns`). To keep decimal points lined up
//! in a right-aligned column every value is padded with trailing zeros to the
//! largest precision found in that column.

use crate::UNIT_SUFFIX;

/// Placeholder for a configuration that has no result for a benchmark.
pub const NOT_AVAILABLE: &str = "N/A";

fn numeric_part(value: &str) -> &str {
    value.strip_suffix(UNIT_SUFFIX).unwrap_or(value).trim()
}

/// Number of digits after the decimal point of a timing value.
///
/// Values without a decimal point have zero.
pub fn decimal_places(value: &str) -> usize {
    numeric_part(value)
        .split_once('.')
        .map(|(_, fraction)| fraction.chars().count())
        .unwrap_or(0)
}

/// Pad every timing in `values` to the column's maximum precision.
///
/// [`NOT_AVAILABLE`] entries are passed through untouched and ignored when
/// computing the target precision. Values are never truncated.
///
/// # Examples
///
/// ```
/// use benchsum_core::normalize_precision;
///
/// let column = ["16.5 ns", "0.990 ns", "2.03 ns", "N/A", "7 ns"];
/// assert_eq!(
///     normalize_precision(&column),
///     vec!["16.500 ns", "0.990 ns", "2.030 ns", "N/A", "7.000 ns"]
/// );
/// ```
pub fn normalize_precision<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    let target = values
        .iter()
        .map(|v| v.as_ref())
        .filter(|v| *v != NOT_AVAILABLE)
        .map(decimal_places)
        .max()
        .unwrap_or(0);

    values
        .iter()
        .map(|v| pad_value(v.as_ref(), target))
        .collect()
}

fn pad_value(value: &str, target: usize) -> String {
    if value == NOT_AVAILABLE {
        return value.to_string();
    }

    let number = numeric_part(value);
    match number.split_once('.') {
        Some((integer, _)) if target == 0 => format!("{}{}", integer, UNIT_SUFFIX),
        Some((integer, fraction)) => {
            format!("{}.{:0<width$}{}", integer, fraction, UNIT_SUFFIX, width = target)
        }
        None if target > 0 => {
            format!("{}.{}{}", number, "0".repeat(target), UNIT_SUFFIX)
        }
        None => value.to_string(),
    }
}
