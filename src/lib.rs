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

//! axion runs one shell command on a selected set of SSH hosts in parallel.
//!
//! Hosts come from a YAML credential file and are picked by the number at
//! the end of their name. Each selected host gets its own password
//! authenticated SSH session; outcomes are printed in selection order and
//! folded into a single exit code.

pub mod banner;
pub mod cli;
pub mod commands;
pub mod config;
pub mod executor;
pub mod node;
pub mod report;
pub mod selector;
pub mod ssh;
pub mod utils;

pub use cli::Cli;
pub use config::Config;
pub use executor::{ExecutionOutcome, FailureKind, ParallelExecutor, SshExecutor};
pub use node::HostRecord;
pub use selector::{Selection, SelectionError};
