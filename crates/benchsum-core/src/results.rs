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

//! Parsed benchmark timings keyed by configuration.

use crate::config::ConfigKey;
use std::collections::{BTreeMap, BTreeSet};

/// Benchmark name → formatted timing (e.g. `"16.5 ns"`).
pub type Timings = BTreeMap<String, String>;

/// Timings for every configuration that recorded at least one benchmark.
///
/// A configuration only appears here once a result line was recorded under
/// it; a header followed by no results leaves no trace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BenchmarkResults {
    configs: BTreeMap<ConfigKey, Timings>,
}

impl BenchmarkResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a timing, replacing any earlier value for the same benchmark.
    pub fn record(
        &mut self,
        config: ConfigKey,
        name: impl Into<String>,
        timing: impl Into<String>,
    ) {
        self.configs
            .entry(config)
            .or_default()
            .insert(name.into(), timing.into());
    }

    /// Timings recorded for `config`, if any.
    pub fn timings(&self, config: &ConfigKey) -> Option<&Timings> {
        self.configs.get(config)
    }

    /// Timing of one benchmark under one configuration.
    pub fn get(&self, config: &ConfigKey, name: &str) -> Option<&str> {
        self.configs
            .get(config)
            .and_then(|t| t.get(name))
            .map(String::as_str)
    }

    /// Configurations with at least one recorded benchmark, in key order.
    pub fn configs(&self) -> impl Iterator<Item = &ConfigKey> {
        self.configs.keys()
    }

    /// Every distinct benchmark name across all configurations, sorted.
    pub fn benchmark_names(&self) -> BTreeSet<&str> {
        self.configs
            .values()
            .flat_map(|timings| timings.keys().map(String::as_str))
            .collect()
    }

    /// Total number of recorded (configuration, benchmark) pairs.
    pub fn len(&self) -> usize {
        self.configs.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}
