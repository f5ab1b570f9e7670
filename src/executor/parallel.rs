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

//! Core parallel executor implementation.

use futures::future::join_all;
use indicatif::{MultiProgress, ProgressDrawTarget};
use std::sync::Arc;
use tokio::sync::Semaphore;

use super::execution_strategy::{create_progress_style, execute_command_task, setup_progress_bar};
use super::outcome::{ExecutionOutcome, FailureKind};
use super::runner::CommandRunner;
use crate::node::HostRecord;

/// Parallel executor for running one command across many hosts.
///
/// Every host gets its own task. Outcomes come back in the same order as
/// the targets, regardless of which host finishes first, and a failure on
/// one host never cancels or alters the others.
pub struct ParallelExecutor<R: ?Sized> {
    runner: Arc<R>,
    max_parallel: Option<usize>,
    show_progress: bool,
}

impl<R> ParallelExecutor<R>
where
    R: CommandRunner + ?Sized + 'static,
{
    pub fn new(runner: Arc<R>) -> Self {
        Self {
            runner,
            max_parallel: None,
            show_progress: false,
        }
    }

    /// Cap the number of hosts contacted at once. `None` or zero means no cap.
    pub fn with_max_parallel(mut self, max_parallel: Option<usize>) -> Self {
        self.max_parallel = max_parallel.filter(|n| *n > 0);
        self
    }

    /// Draw per-host spinners on stderr while the command runs.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Execute `command` on all `targets` and wait for every host.
    ///
    /// The result has exactly one outcome per target, at the target's index.
    pub async fn execute(&self, targets: &[HostRecord], command: &str) -> Vec<ExecutionOutcome> {
        if targets.is_empty() {
            return Vec::new();
        }

        let semaphore = self.max_parallel.map(|n| Arc::new(Semaphore::new(n)));
        let multi_progress = if self.show_progress {
            MultiProgress::new()
        } else {
            MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
        };
        let style = create_progress_style();
        let command: Arc<str> = Arc::from(command);

        tracing::info!(
            "Executing on {} host(s), parallelism {}",
            targets.len(),
            self.max_parallel
                .map(|n| n.to_string())
                .unwrap_or_else(|| "unbounded".to_string())
        );

        let tasks: Vec<_> = targets
            .iter()
            .map(|host| {
                let pb = setup_progress_bar(&multi_progress, host, style.clone());
                tokio::spawn(execute_command_task(
                    Arc::clone(&self.runner),
                    host.clone(),
                    Arc::clone(&command),
                    semaphore.clone(),
                    pb,
                ))
            })
            .collect();

        let results = join_all(tasks).await;
        collect_results(targets, results)
    }
}

/// Collect execution outcomes, turning task panics into failed outcomes.
fn collect_results(
    targets: &[HostRecord],
    results: Vec<Result<ExecutionOutcome, tokio::task::JoinError>>,
) -> Vec<ExecutionOutcome> {
    targets
        .iter()
        .zip(results)
        .map(|(host, result)| match result {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("Task failed for host {}: {}", host.display_name(), e);
                ExecutionOutcome::failed(host.clone(), FailureKind::WorkerAborted(e.to_string()))
            }
        })
        .collect()
}
