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

//! Grouping of hierarchical benchmark names.
//!
//! `Copy/Small_int/StdVector` is split at its last separator into the group
//! `Copy/Small_int` and the variant `StdVector`. Each group becomes one table
//! whose rows are the variants.

use crate::SEPARATOR;
use std::collections::BTreeMap;

/// Group name used for benchmarks without any separator.
pub const OTHER_GROUP: &str = "Other";

/// Group name → variant label → timing.
pub type Groups = BTreeMap<String, BTreeMap<String, String>>;

/// Split a benchmark name at its last separator.
///
/// Returns `None` when the name contains no separator.
///
/// # Examples
///
/// ```
/// use benchsum_core::split_benchmark_name;
///
/// assert_eq!(split_benchmark_name("Copy/Small/StdVec"), Some(("Copy/Small", "StdVec")));
/// assert_eq!(split_benchmark_name("BM_plain"), None);
/// ```
pub fn split_benchmark_name(name: &str) -> Option<(&str, &str)> {
    name.rsplit_once(SEPARATOR)
}

/// Bucket one configuration's timings by group.
///
/// Names without a separator land in [`OTHER_GROUP`] under their full name.
pub fn group_benchmarks(timings: &BTreeMap<String, String>) -> Groups {
    let mut groups = Groups::new();
    for (name, timing) in timings {
        let (group, variant) = split_benchmark_name(name).unwrap_or((OTHER_GROUP, name.as_str()));
        groups
            .entry(group.to_string())
            .or_default()
            .insert(variant.to_string(), timing.clone());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timings(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_group_by_prefix() {
        let groups = group_benchmarks(&timings(&[
            ("Copy/Small/StdVec", "15 ns"),
            ("Copy/Small/SmallVec", "3 ns"),
        ]));

        assert_eq!(groups.len(), 1);
        let copy = &groups["Copy/Small"];
        assert_eq!(copy.get("StdVec").map(String::as_str), Some("15 ns"));
        assert_eq!(copy.get("SmallVec").map(String::as_str), Some("3 ns"));
    }

    #[test]
    fn test_split_at_last_separator() {
        assert_eq!(split_benchmark_name("a/b/c/d"), Some(("a/b/c", "d")));
        assert_eq!(split_benchmark_name("a/"), Some(("a", "")));
        assert_eq!(split_benchmark_name("/a"), Some(("", "a")));
    }

    #[test]
    fn test_flat_names_go_to_other() {
        let groups = group_benchmarks(&timings(&[("BM_plain", "1 ns"), ("Iterate/Vec", "2 ns")]));

        assert_eq!(groups[OTHER_GROUP].get("BM_plain").map(String::as_str), Some("1 ns"));
        assert_eq!(groups["Iterate"].get("Vec").map(String::as_str), Some("2 ns"));
    }

    #[test]
    fn test_empty_input() {
        assert!(group_benchmarks(&BTreeMap::new()).is_empty());
    }

    #[test]
    fn test_multiple_groups_sorted() {
        let groups = group_benchmarks(&timings(&[
            ("Insert/Large/StdVec", "9 ns"),
            ("Copy/Small/StdVec", "1 ns"),
            ("Copy/Large/StdVec", "5 ns"),
        ]));
        let names: Vec<&str> = groups.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Copy/Large", "Copy/Small", "Insert/Large"]);
    }
}
