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

//! Running one command on one host over SSH.

use async_trait::async_trait;
use russh::client::Msg;
use russh::{Channel, ChannelMsg};

use super::outcome::{ExecutionOutcome, FailureKind};
use super::runner::CommandRunner;
use super::stream_manager::{OutputDrain, StreamKind};
use crate::node::HostRecord;
use crate::ssh::known_hosts::{get_check_method, HostKeyPolicy};
use crate::ssh::tokio_client::{AuthMethod, Client, ServerCheckMethod};

/// How the remote side ended the command.
#[derive(Debug, Default)]
struct ChannelEnd {
    exit_status: Option<u32>,
    exit_signal: Option<String>,
    refused: bool,
}

/// Password-authenticated SSH runner used for real hosts.
///
/// Each call opens its own connection, runs the command on a fresh session
/// channel and disconnects. Nothing is shared between hosts.
#[derive(Debug, Clone)]
pub struct SshExecutor {
    server_check: ServerCheckMethod,
}

impl SshExecutor {
    pub fn new(policy: &HostKeyPolicy) -> Self {
        Self {
            server_check: get_check_method(policy),
        }
    }

    async fn run_on_host(&self, host: &HostRecord, command: &str) -> ExecutionOutcome {
        tracing::debug!("Connecting to {}", host);
        let client = match Client::connect(
            &host.address,
            host.port(),
            &host.username,
            AuthMethod::with_password(host.credential.as_str()),
            self.server_check.clone(),
        )
        .await
        {
            Ok(client) => client,
            Err(e) => {
                tracing::debug!("Connection to {} failed: {}", host.display_name(), e);
                return ExecutionOutcome::failed(
                    host.clone(),
                    FailureKind::ConnectFailed(e.to_string()),
                );
            }
        };

        tracing::debug!(
            "Connected to {} as {} at {}",
            host.display_name(),
            client.get_connection_username(),
            client.get_connection_address()
        );

        let outcome = match client.open_session().await {
            Ok(channel) => run_on_channel(host, channel, command).await,
            Err(e) => {
                ExecutionOutcome::failed(host.clone(), FailureKind::SessionFailed(e.to_string()))
            }
        };

        if let Err(e) = client.disconnect().await {
            tracing::debug!("Disconnect from {} failed: {}", host.display_name(), e);
        }

        outcome
    }
}

#[async_trait]
impl CommandRunner for SshExecutor {
    async fn run(&self, host: &HostRecord, command: &str) -> ExecutionOutcome {
        self.run_on_host(host, command).await
    }
}

/// Start `command` on an open session channel and collect its result.
async fn run_on_channel(
    host: &HostRecord,
    mut channel: Channel<Msg>,
    command: &str,
) -> ExecutionOutcome {
    let stdout = OutputDrain::spawn(StreamKind::Stdout);
    let stderr = OutputDrain::spawn(StreamKind::Stderr);

    if let Err(e) = channel.exec(true, command).await {
        return ExecutionOutcome::failed(host.clone(), FailureKind::StartFailed(e.to_string()));
    }

    let mut end = ChannelEnd::default();
    while let Some(msg) = channel.wait().await {
        match msg {
            ChannelMsg::Data { ref data } => stdout.push(data).await,
            ChannelMsg::ExtendedData { ref data, ext } => {
                if ext == 1 {
                    stderr.push(data).await;
                }
            }
            // The exit status can arrive before the last data packets, so
            // keep reading until the channel closes.
            ChannelMsg::ExitStatus { exit_status } => end.exit_status = Some(exit_status),
            ChannelMsg::ExitSignal { signal_name, .. } => {
                end.exit_signal = Some(format!("{signal_name:?}"));
            }
            ChannelMsg::Failure => {
                end.refused = true;
                break;
            }
            _ => {}
        }
    }

    let stdout = stdout.finish().await;
    let stderr = stderr.finish().await;
    let (stdout, stderr) = match (stdout, stderr) {
        (Ok(stdout), Ok(stderr)) => (stdout, stderr),
        (Err(e), _) | (_, Err(e)) => {
            return ExecutionOutcome::failed(
                host.clone(),
                FailureKind::StreamError(format!("failed to collect output: {e}")),
            );
        }
    };

    tracing::debug!(
        "{}: exit status {:?}, {} bytes stdout, {} bytes stderr",
        host.display_name(),
        end.exit_status,
        stdout.len(),
        stderr.len()
    );

    classify(host, end, stdout, stderr)
}

fn classify(
    host: &HostRecord,
    end: ChannelEnd,
    stdout: String,
    stderr: String,
) -> ExecutionOutcome {
    if end.refused {
        return ExecutionOutcome::failed_with_output(
            host.clone(),
            FailureKind::StartFailed("remote side refused to execute the command".to_string()),
            stdout,
            stderr,
        );
    }

    let failure = match (end.exit_status, end.exit_signal) {
        (Some(0), _) => return ExecutionOutcome::succeeded(host.clone(), stdout, stderr),
        (Some(code), _) => FailureKind::RemoteNonZeroExit(code),
        (None, Some(signal)) => FailureKind::RemoteSignal(signal),
        (None, None) => {
            FailureKind::StreamError("remote command exited without exit status".to_string())
        }
    };
    ExecutionOutcome::failed_with_output(host.clone(), failure, stdout, stderr)
}
