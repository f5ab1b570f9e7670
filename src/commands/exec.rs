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

use anyhow::{anyhow, Result};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::executor::{CommandRunner, ParallelExecutor, SshExecutor};
use crate::node::HostRecord;
use crate::report::{report, Layout, OutputFormatter};
use crate::selector::{resolve, Selection};
use crate::ssh::known_hosts::HostKeyPolicy;

pub struct ExecuteCommandParams<'a> {
    pub config_path: &'a Path,
    pub selection: Selection,
    pub command: &'a str,
    /// Policy from the command line; wins over the credential file.
    pub host_key_policy: Option<HostKeyPolicy>,
    pub options: DispatchOptions,
}

/// Presentation and concurrency settings for one run.
#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchOptions {
    pub max_parallel: Option<usize>,
    pub show_progress: bool,
    pub use_colors: bool,
}

/// Load the credential file, run the command on the selected hosts over SSH
/// and print the reports. Returns the process exit code.
pub async fn execute_command(params: ExecuteCommandParams<'_>) -> Result<i32> {
    let config = Config::load(params.config_path).await?;

    let policy = effective_host_key_policy(params.host_key_policy, &config);
    if !policy.verifies_identity() {
        tracing::warn!("Host key checking is disabled; any host key will be accepted");
    }

    let runner = Arc::new(SshExecutor::new(&policy));
    run_selection(
        runner,
        &config.hosts,
        &params.selection,
        params.command,
        params.options,
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )
    .await
}

/// Command line beats the file, the file beats the default. A `known_hosts`
/// path from the file applies to whichever policy wins.
pub fn effective_host_key_policy(cli: Option<HostKeyPolicy>, config: &Config) -> HostKeyPolicy {
    cli.or_else(|| config.host_key_policy.clone())
        .unwrap_or_default()
        .with_known_hosts_file(config.known_hosts.clone())
}

/// Resolve `selection` against `hosts`, dispatch `command` through `runner`
/// and write every report to `out`. Selection warnings go to `diagnostics`.
pub async fn run_selection<R, W, D>(
    runner: Arc<R>,
    hosts: &[HostRecord],
    selection: &Selection,
    command: &str,
    options: DispatchOptions,
    out: &mut W,
    diagnostics: &mut D,
) -> Result<i32>
where
    R: CommandRunner + ?Sized + 'static,
    W: Write,
    D: Write,
{
    let resolution = resolve(hosts, selection)?;

    if !resolution.not_found.is_empty() {
        let missing = resolution
            .not_found
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        tracing::warn!("Host numbers not found: {}", missing);
        writeln!(diagnostics, "Warning: host numbers not found: {missing}")
            .map_err(|e| anyhow!("failed to write warning: {e}"))?;
    }

    tracing::debug!(
        "Selection {} resolved to {} host(s)",
        selection,
        resolution.targets.len()
    );

    let executor = ParallelExecutor::new(runner)
        .with_max_parallel(options.max_parallel)
        .with_progress(options.show_progress);
    let outcomes = executor.execute(&resolution.targets, command).await;

    let layout = if selection.is_single() {
        Layout::Single
    } else {
        Layout::Multi
    };
    let formatter = OutputFormatter::new(options.use_colors);
    report(&outcomes, layout, &formatter, out)
        .map_err(|e| anyhow!("failed to write report: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cli_policy_overrides_file() {
        let config = Config {
            host_key_policy: Some(HostKeyPolicy::KnownHosts),
            ..Config::default()
        };
        assert_eq!(
            effective_host_key_policy(Some(HostKeyPolicy::AcceptAny), &config),
            HostKeyPolicy::AcceptAny
        );
        assert_eq!(
            effective_host_key_policy(None, &config),
            HostKeyPolicy::KnownHosts
        );
    }

    #[test]
    fn test_default_policy_accepts_any() {
        assert_eq!(
            effective_host_key_policy(None, &Config::default()),
            HostKeyPolicy::AcceptAny
        );
    }

    #[test]
    fn test_known_hosts_file_applies_to_cli_policy() {
        let config = Config {
            known_hosts: Some(PathBuf::from("/etc/ssh/fleet_known_hosts")),
            ..Config::default()
        };
        assert_eq!(
            effective_host_key_policy(Some(HostKeyPolicy::KnownHosts), &config),
            HostKeyPolicy::KnownHostsFile(PathBuf::from("/etc/ssh/fleet_known_hosts"))
        );
    }
}
