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

//! Benchmark naming pattern detection.

use crate::SEPARATOR;
use std::fmt;

/// How benchmarks in a log are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingPattern {
    /// Flat names such as `BM_branch_sorted`.
    Simple,
    /// Slash-separated paths such as `Copy/Small_int/StdVector`.
    Hierarchical,
}

impl NamingPattern {
    pub fn as_str(self) -> &'static str {
        match self {
            NamingPattern::Simple => "simple",
            NamingPattern::Hierarchical => "hierarchical",
        }
    }
}

impl fmt::Display for NamingPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a set of benchmark names.
///
/// Hierarchical only when strictly more than half of the names contain a
/// separator. Ties and the empty set are simple.
///
/// # Examples
///
/// ```
/// use benchsum_core::{detect_naming_pattern, NamingPattern};
///
/// let names = ["Copy/Small/StdVec", "Copy/Small/SmallVec", "BM_misc"];
/// assert_eq!(detect_naming_pattern(names), NamingPattern::Hierarchical);
///
/// let names = ["Copy/Small/StdVec", "BM_misc"];
/// assert_eq!(detect_naming_pattern(names), NamingPattern::Simple);
/// ```
pub fn detect_naming_pattern<I, S>(names: I) -> NamingPattern
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (total, hierarchical) = names.into_iter().fold((0usize, 0usize), |(total, hier), name| {
        let is_hier = name.as_ref().contains(SEPARATOR);
        (total + 1, hier + usize::from(is_hier))
    });

    // hierarchical > total / 2, without rounding
    if hierarchical * 2 > total {
        NamingPattern::Hierarchical
    } else {
        NamingPattern::Simple
    }
}
