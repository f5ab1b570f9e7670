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

//! Parallel execution of one command across many SSH hosts.

mod execution_strategy;
mod output_mode;
mod parallel;
mod stream_manager;

pub mod outcome;
pub mod runner;
pub mod session;

// Re-export public types
pub use outcome::{ExecutionOutcome, FailureKind};
pub use output_mode::{is_stderr_tty, is_tty, should_use_colors};
pub use parallel::ParallelExecutor;
pub use runner::CommandRunner;
pub use session::SshExecutor;
