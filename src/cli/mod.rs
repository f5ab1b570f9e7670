// Copyright 2025 The axion Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Command-line interface for axion.

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;
use crate::selector::{parse_index_selection, parse_range_selection, Selection, SelectionError};
use crate::ssh::known_hosts::HostKeyPolicy;

#[derive(Parser, Debug)]
#[command(
    name = "axion",
    disable_version_flag = true,
    about = "Run one shell command on a selected set of SSH hosts in parallel",
    long_about = "axion reads a YAML credential file, selects hosts by the number at the end of their name,\nand runs one command on all of them at once over password-authenticated SSH.\nEvery host's stdout, stderr and status are printed in selection order. The exit code is 0\nonly when every selected host succeeded.",
    after_help = "Either -i or -l must be provided (not both).\n\nEXAMPLES:\n  Single host:              axion -i 42 -c \"uptime\"\n  Several hosts:            axion -i 52,42,53 -c \"tmux ls\"\n  Range of hosts:           axion -l 1-20 -c \"df -h\""
)]
#[command(group(
    ArgGroup::new("selection")
        .args(["index", "range"])
        .multiple(false)
))]
pub struct Cli {
    #[arg(
        short = 'i',
        long,
        value_name = "SEL",
        required_unless_present_any = ["range", "version"],
        help = "Host number(s): a single number or a comma-separated list (e.g. 42 or 52,42,53)"
    )]
    pub index: Option<String>,

    #[arg(
        short = 'l',
        long,
        value_name = "START-END",
        required_unless_present_any = ["index", "version"],
        help = "Inclusive range of host numbers (e.g. 1-20)"
    )]
    pub range: Option<String>,

    #[arg(
        short = 'c',
        long,
        value_name = "CMD",
        required_unless_present = "version",
        value_parser = parse_command,
        help = "Command to execute on every selected host"
    )]
    pub command: Option<String>,

    #[arg(
        long,
        env = "AXION_CONFIG",
        default_value = DEFAULT_CONFIG_PATH,
        help = "Credential file path"
    )]
    pub config: PathBuf,

    #[arg(
        long,
        value_name = "yes|no",
        help = "Verify host keys against ~/.ssh/known_hosts (yes) or accept any key (no)\nOverrides host_key_checking from the credential file [default: no]"
    )]
    pub strict_host_key_checking: Option<HostKeyPolicy>,

    #[arg(
        long,
        value_name = "N",
        help = "Maximum number of hosts contacted at once [default: unlimited]"
    )]
    pub max_parallel: Option<usize>,

    #[arg(
        short = 's',
        long,
        help = "Silent mode: no banner and no progress spinners"
    )]
    pub silent: bool,

    #[arg(long, help = "Print the version of the tool and exit")]
    pub version: bool,

    #[arg(
        short = 'v',
        long,
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,
}

impl Cli {
    /// Parse the `-i` or `-l` expression into a selection.
    pub fn selection(&self) -> Result<Selection, SelectionError> {
        match (&self.index, &self.range) {
            (Some(index), _) => parse_index_selection(index),
            (None, Some(range)) => parse_range_selection(range),
            (None, None) => Err(SelectionError::EmptySelection),
        }
    }
}

fn parse_command(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        Err("command must be non-empty".to_string())
    } else {
        Ok(value.to_string())
    }
}
