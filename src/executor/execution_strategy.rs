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

//! Per-host task body and progress display for parallel dispatch.

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

use super::outcome::{ExecutionOutcome, FailureKind};
use super::runner::CommandRunner;
use crate::node::HostRecord;

/// Progress bar tick rate configuration.
const PROGRESS_BAR_TICK_RATE_MS: u64 = 80;

/// Longest host label shown in a progress line.
const MAX_DISPLAY_WIDTH: usize = 20;

/// Create a progress bar style for per-host spinners.
pub(crate) fn create_progress_style() -> ProgressStyle {
    match ProgressStyle::default_bar().template("{prefix:.bold} {spinner:.cyan} {msg}") {
        Ok(style) => style.tick_chars("⣾⣽⣻⢿⡿⣟⣯⣷ "),
        Err(e) => {
            tracing::debug!("Failed to create progress bar template: {e}");
            ProgressStyle::default_spinner()
        }
    }
}

/// Format host display name for progress bars.
pub(crate) fn format_host_display(host: &HostRecord) -> String {
    let name = host.display_name();
    if name.chars().count() > MAX_DISPLAY_WIDTH {
        let head: String = name.chars().take(MAX_DISPLAY_WIDTH - 3).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

/// Setup a spinner for one host.
pub(crate) fn setup_progress_bar(
    multi_progress: &MultiProgress,
    host: &HostRecord,
    style: ProgressStyle,
) -> ProgressBar {
    let pb = multi_progress.add(ProgressBar::new_spinner());
    pb.set_style(style);
    pb.set_prefix(format!("[{}]", format_host_display(host)));
    pb.set_message(format!("{}", "Connecting...".cyan()));
    if ticks_enabled(multi_progress) {
        pb.enable_steady_tick(Duration::from_millis(PROGRESS_BAR_TICK_RATE_MS));
    }
    pb
}

/// A hidden display gets no ticker thread.
fn ticks_enabled(multi_progress: &MultiProgress) -> bool {
    !multi_progress.is_hidden()
}

/// Run the command on a single host, honouring the optional concurrency cap.
pub(crate) async fn execute_command_task<R>(
    runner: Arc<R>,
    host: HostRecord,
    command: Arc<str>,
    semaphore: Option<Arc<Semaphore>>,
    pb: ProgressBar,
) -> ExecutionOutcome
where
    R: CommandRunner + ?Sized,
{
    let _permit = match semaphore {
        Some(semaphore) => match semaphore.acquire_owned().await {
            Ok(permit) => Some(permit),
            Err(e) => {
                pb.finish_with_message(format!("{} {}", "●".red(), "Semaphore closed".red()));
                return ExecutionOutcome::failed(
                    host,
                    FailureKind::WorkerAborted(format!("semaphore acquisition failed: {e}")),
                );
            }
        },
        None => None,
    };

    pb.set_message(format!("{}", "Executing...".blue()));

    let outcome = runner.run(&host, &command).await;

    match &outcome.failure {
        None => pb.finish_with_message(format!("{} {}", "●".green(), "Success".green())),
        Some(FailureKind::RemoteNonZeroExit(code)) => pb.finish_with_message(format!(
            "{} Exit code: {}",
            "●".red(),
            code.to_string().red()
        )),
        Some(failure) => {
            let message = failure.to_string();
            let short_error = if message.chars().count() > 50 {
                let head: String = message.chars().take(47).collect();
                format!("{head}...")
            } else {
                message
            };
            pb.finish_with_message(format!("{} {}", "●".red(), short_error.red()));
        }
    }

    outcome
}
