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

//! Compiler and optimization-level vocabulary.
//!
//! A benchmark run is identified by a [`ConfigKey`]: one of the two supported
//! compilers paired with an optimization level. Keys render as
//! `"<compiler>-O<level>"` (for example `clang-O3`), which is also the column
//! header used in the generated tables.

use std::fmt;
use std::str::FromStr;

/// Compilers recognized in configuration headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Compiler {
    Clang,
    Gcc,
}

impl Compiler {
    /// All compilers in column order (clang first within each level).
    pub const ALL: [Compiler; 2] = [Compiler::Clang, Compiler::Gcc];

    /// Name as it appears in logs and column headers.
    pub fn as_str(self) -> &'static str {
        match self {
            Compiler::Clang => "clang",
            Compiler::Gcc => "gcc",
        }
    }
}

impl fmt::Display for Compiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Compiler {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clang" => Ok(Compiler::Clang),
            "gcc" => Ok(Compiler::Gcc),
            other => Err(format!("unknown compiler '{}'", other)),
        }
    }
}

/// Optimization level, the digit following `-O` in a configuration header.
///
/// Any single digit is accepted when parsing. Only the four levels in
/// [`OptLevel::DISPLAY_ORDER`] ever become table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OptLevel(u8);

impl OptLevel {
    pub const O0: OptLevel = OptLevel(0);
    pub const O1: OptLevel = OptLevel(1);
    pub const O2: OptLevel = OptLevel(2);
    pub const O3: OptLevel = OptLevel(3);

    /// Displayed levels, highest to lowest.
    pub const DISPLAY_ORDER: [OptLevel; 4] =
        [OptLevel::O3, OptLevel::O2, OptLevel::O1, OptLevel::O0];

    /// Create a level from a single decimal digit character.
    pub fn from_digit(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| OptLevel(d as u8))
    }

    /// The numeric level.
    pub fn level(self) -> u8 {
        self.0
    }
}

impl fmt::Display for OptLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "O{}", self.0)
    }
}

/// A (compiler, optimization level) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConfigKey {
    pub compiler: Compiler,
    pub level: OptLevel,
}

impl ConfigKey {
    pub fn new(compiler: Compiler, level: OptLevel) -> Self {
        Self { compiler, level }
    }

    /// The eight displayed configurations in column order: levels descending,
    /// and within each level the compilers in declared order.
    pub fn display_columns() -> impl Iterator<Item = ConfigKey> {
        OptLevel::DISPLAY_ORDER.into_iter().flat_map(|level| {
            Compiler::ALL
                .into_iter()
                .map(move |compiler| ConfigKey::new(compiler, level))
        })
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.compiler, self.level)
    }
}

/// Human-readable list of the displayed levels, e.g. `O3, O2, O1, O0`.
pub fn display_levels() -> String {
    OptLevel::DISPLAY_ORDER
        .iter()
        .map(|level| level.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
