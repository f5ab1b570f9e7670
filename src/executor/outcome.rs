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

//! Per-host execution outcomes.

use std::fmt;

use crate::node::HostRecord;

/// Why a host's execution did not succeed.
///
/// Every variant is local to one host. None of them stops the other hosts
/// of the same run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// Transport or authentication failed
    ConnectFailed(String),
    /// The session channel could not be opened
    SessionFailed(String),
    /// The remote side refused or failed to start the command
    StartFailed(String),
    /// The command ran and exited with a nonzero status
    RemoteNonZeroExit(u32),
    /// The command was killed by a signal and reported no exit status
    RemoteSignal(String),
    /// Output could not be collected, or the channel ended without a status
    StreamError(String),
    /// The worker task for this host panicked
    WorkerAborted(String),
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::ConnectFailed(detail) => write!(f, "failed to connect: {detail}"),
            FailureKind::SessionFailed(detail) => write!(f, "failed to create session: {detail}"),
            FailureKind::StartFailed(detail) => write!(f, "failed to start command: {detail}"),
            FailureKind::RemoteNonZeroExit(code) => write!(f, "command exited with code {code}"),
            FailureKind::RemoteSignal(signal) => {
                write!(f, "command terminated by signal {signal}")
            }
            FailureKind::StreamError(detail) => write!(f, "command execution error: {detail}"),
            FailureKind::WorkerAborted(detail) => write!(f, "execution task failed: {detail}"),
        }
    }
}

/// The complete record of one host's execution attempt.
///
/// Built once by the executor and never modified. `success` is true exactly
/// when `failure` is `None`; the constructors keep the two in step.
#[derive(Debug, Clone)]
pub struct ExecutionOutcome {
    pub host: HostRecord,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
    pub failure: Option<FailureKind>,
}

impl ExecutionOutcome {
    pub fn succeeded(host: HostRecord, stdout: String, stderr: String) -> Self {
        Self {
            host,
            success: true,
            stdout,
            stderr,
            failure: None,
        }
    }

    /// A failure that happened before any output was captured.
    pub fn failed(host: HostRecord, failure: FailureKind) -> Self {
        Self::failed_with_output(host, failure, String::new(), String::new())
    }

    pub fn failed_with_output(
        host: HostRecord,
        failure: FailureKind,
        stdout: String,
        stderr: String,
    ) -> Self {
        Self {
            host,
            success: false,
            stdout,
            stderr,
            failure: Some(failure),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> HostRecord {
        HostRecord::new(Some("worker1"), "10.0.0.1", "root", "pw")
    }

    #[test]
    fn test_succeeded() {
        let outcome = ExecutionOutcome::succeeded(host(), "up 3 days\n".into(), String::new());
        assert!(outcome.is_success());
        assert!(outcome.failure.is_none());
    }

    #[test]
    fn test_failed_keeps_invariant() {
        let outcome = ExecutionOutcome::failed(
            host(),
            FailureKind::ConnectFailed("connection refused".into()),
        );
        assert!(!outcome.is_success());
        assert!(outcome.stdout.is_empty());
        assert!(outcome.stderr.is_empty());
    }

    #[test]
    fn test_nonzero_exit_keeps_output() {
        let outcome = ExecutionOutcome::failed_with_output(
            host(),
            FailureKind::RemoteNonZeroExit(127),
            String::new(),
            "sh: foo: not found\n".into(),
        );
        assert!(!outcome.success);
        assert_eq!(outcome.stderr, "sh: foo: not found\n");
        assert_eq!(outcome.failure, Some(FailureKind::RemoteNonZeroExit(127)));
    }

    #[test]
    fn test_failure_descriptions() {
        assert_eq!(
            FailureKind::ConnectFailed("timed out".into()).to_string(),
            "failed to connect: timed out"
        );
        assert_eq!(
            FailureKind::SessionFailed("channel open failure".into()).to_string(),
            "failed to create session: channel open failure"
        );
        assert_eq!(
            FailureKind::StartFailed("request denied".into()).to_string(),
            "failed to start command: request denied"
        );
        assert_eq!(
            FailureKind::RemoteNonZeroExit(2).to_string(),
            "command exited with code 2"
        );
        assert_eq!(
            FailureKind::RemoteSignal("KILL".into()).to_string(),
            "command terminated by signal KILL"
        );
        assert_eq!(
            FailureKind::StreamError("remote command exited without exit status".into())
                .to_string(),
            "command execution error: remote command exited without exit status"
        );
    }
}
