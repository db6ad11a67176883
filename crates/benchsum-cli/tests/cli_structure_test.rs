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

//! Tests for the command-line argument structure.

use benchsum_cli::cli::Cli;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

#[test]
fn test_command_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_binary_name() {
    assert_eq!(Cli::command().get_name(), "benchsum");
}

#[test]
fn test_single_required_positional() {
    let cmd = Cli::command();
    let positionals: Vec<_> = cmd.get_positionals().collect();

    assert_eq!(positionals.len(), 1);
    assert_eq!(positionals[0].get_id().as_str(), "log");
    assert!(positionals[0].is_required_set());
}

#[test]
fn test_no_subcommands() {
    assert_eq!(Cli::command().get_subcommands().count(), 0);
}

#[test]
fn test_parse_log_path() {
    let cli = Cli::try_parse_from(["benchsum", "results/benchmark.log"]).unwrap();
    assert_eq!(cli.log, PathBuf::from("results/benchmark.log"));
}

#[test]
fn test_parse_rejects_missing_path() {
    assert!(Cli::try_parse_from(["benchsum"]).is_err());
}

#[test]
fn test_parse_rejects_extra_path() {
    assert!(Cli::try_parse_from(["benchsum", "a.log", "b.log"]).is_err());
}
