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

//! Rendering of per-host outcomes and the aggregate exit code.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::executor::ExecutionOutcome;

/// Exit code when every host succeeded (or nothing ran).
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code when at least one host failed, or the run was rejected.
pub const EXIT_FAILURE: i32 = 1;

/// How outcomes are separated from each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One host was addressed directly; no trailing separator.
    Single,
    /// A list or range was selected; every report ends with a blank line.
    Multi,
}

/// Formats outcomes in the fixed plain-text report format.
///
/// Colors only change the `[name]` tag and the status word. The text is
/// otherwise identical with and without them.
#[derive(Debug, Clone, Copy)]
pub struct OutputFormatter {
    use_colors: bool,
}

impl OutputFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    fn header(&self, outcome: &ExecutionOutcome) -> String {
        let tag = format!("[{}]", outcome.host.display_name());
        let status = if outcome.success { "SUCCESS" } else { "FAILED" };
        if !self.use_colors {
            return format!("{tag} {status}");
        }
        if outcome.success {
            format!("{} {}", tag.bold(), status.green())
        } else {
            format!("{} {}", tag.bold(), status.red())
        }
    }

    /// Render one outcome. Every block ends with a newline.
    pub fn format_outcome(&self, outcome: &ExecutionOutcome) -> String {
        let mut output = String::new();
        output.push_str(&self.header(outcome));
        output.push('\n');

        if !outcome.stdout.is_empty() {
            output.push_str("STDOUT:\n");
            output.push_str(&outcome.stdout);
            output.push('\n');
        }

        if !outcome.stderr.is_empty() || !outcome.success {
            output.push_str("STDERR:\n");
            if !outcome.stderr.is_empty() {
                output.push_str(&outcome.stderr);
                output.push('\n');
            }
        }

        if let Some(failure) = &outcome.failure {
            output.push_str(&failure.to_string());
            output.push('\n');
        }

        output
    }
}

/// Aggregate exit code: failure if any host failed.
pub fn exit_code(outcomes: &[ExecutionOutcome]) -> i32 {
    if outcomes.iter().all(ExecutionOutcome::is_success) {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    }
}

/// Write every outcome to `out` in order and return the aggregate exit code.
pub fn report<W: Write>(
    outcomes: &[ExecutionOutcome],
    layout: Layout,
    formatter: &OutputFormatter,
    out: &mut W,
) -> io::Result<i32> {
    for outcome in outcomes {
        out.write_all(formatter.format_outcome(outcome).as_bytes())?;
        if layout == Layout::Multi {
            writeln!(out)?;
        }
    }
    out.flush()?;

    let code = exit_code(outcomes);
    let failed = outcomes.iter().filter(|o| !o.is_success()).count();
    tracing::info!(
        "{} host(s) reported, {} failed, exit code {}",
        outcomes.len(),
        failed,
        code
    );
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::FailureKind;
    use crate::node::HostRecord;

    fn host(name: &str) -> HostRecord {
        HostRecord::new(Some(name), "10.0.0.1", "root", "pw")
    }

    fn render(outcomes: &[ExecutionOutcome], layout: Layout) -> (String, i32) {
        let mut buf = Vec::new();
        let code = report(outcomes, layout, &OutputFormatter::plain(), &mut buf).unwrap();
        (String::from_utf8(buf).unwrap(), code)
    }

    #[test]
    fn test_success_with_stdout() {
        let outcome = ExecutionOutcome::succeeded(host("web1"), "up\n".into(), String::new());
        assert_eq!(
            OutputFormatter::plain().format_outcome(&outcome),
            "[web1] SUCCESS\nSTDOUT:\nup\n\n"
        );
    }

    #[test]
    fn test_success_without_output() {
        let outcome = ExecutionOutcome::succeeded(host("web1"), String::new(), String::new());
        assert_eq!(
            OutputFormatter::plain().format_outcome(&outcome),
            "[web1] SUCCESS\n"
        );
    }

    #[test]
    fn test_success_with_stderr() {
        let outcome =
            ExecutionOutcome::succeeded(host("web1"), String::new(), "deprecated".into());
        assert_eq!(
            OutputFormatter::plain().format_outcome(&outcome),
            "[web1] SUCCESS\nSTDERR:\ndeprecated\n"
        );
    }

    #[test]
    fn test_connect_failure_prints_empty_stderr_header() {
        let outcome = ExecutionOutcome::failed(
            host("web2"),
            FailureKind::ConnectFailed("connection refused".into()),
        );
        assert_eq!(
            OutputFormatter::plain().format_outcome(&outcome),
            "[web2] FAILED\nSTDERR:\nfailed to connect: connection refused\n"
        );
    }

    #[test]
    fn test_nonzero_exit_prints_stderr_and_description() {
        let outcome = ExecutionOutcome::failed_with_output(
            host("web3"),
            FailureKind::RemoteNonZeroExit(2),
            "partial".into(),
            "ls: cannot access".into(),
        );
        assert_eq!(
            OutputFormatter::plain().format_outcome(&outcome),
            "[web3] FAILED\nSTDOUT:\npartial\nSTDERR:\nls: cannot access\ncommand exited with code 2\n"
        );
    }

    #[test]
    fn test_unnamed_host_uses_address() {
        let outcome = ExecutionOutcome::succeeded(
            HostRecord::new(None, "192.168.1.7", "root", "pw"),
            String::new(),
            String::new(),
        );
        assert!(OutputFormatter::plain()
            .format_outcome(&outcome)
            .starts_with("[192.168.1.7] SUCCESS"));
    }

    #[test]
    fn test_multi_layout_separates_hosts_in_order() {
        let outcomes = vec![
            ExecutionOutcome::succeeded(host("web1"), String::new(), String::new()),
            ExecutionOutcome::succeeded(host("web2"), String::new(), String::new()),
        ];
        let (text, code) = render(&outcomes, Layout::Multi);
        assert_eq!(text, "[web1] SUCCESS\n\n[web2] SUCCESS\n\n");
        assert_eq!(code, EXIT_SUCCESS);
    }

    #[test]
    fn test_single_layout_has_no_separator() {
        let outcomes = vec![ExecutionOutcome::succeeded(
            host("web1"),
            String::new(),
            String::new(),
        )];
        let (text, _) = render(&outcomes, Layout::Single);
        assert_eq!(text, "[web1] SUCCESS\n");
    }

    #[test]
    fn test_exit_code() {
        assert_eq!(exit_code(&[]), EXIT_SUCCESS);

        let ok = ExecutionOutcome::succeeded(host("web1"), String::new(), String::new());
        let bad = ExecutionOutcome::failed(host("web2"), FailureKind::RemoteNonZeroExit(1));
        assert_eq!(exit_code(&[ok.clone()]), EXIT_SUCCESS);
        assert_eq!(exit_code(&[ok, bad]), EXIT_FAILURE);
    }

    #[test]
    fn test_colors_keep_text() {
        let outcome = ExecutionOutcome::succeeded(host("web1"), String::new(), String::new());
        let colored = OutputFormatter::new(true).format_outcome(&outcome);
        assert!(colored.contains("[web1]"));
        assert!(colored.contains("SUCCESS"));
        assert_ne!(colored, OutputFormatter::plain().format_outcome(&outcome));
    }
}
