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

//! The seam between dispatch and a concrete remote session.

use async_trait::async_trait;

use super::outcome::ExecutionOutcome;
use crate::node::HostRecord;

/// Runs one command on one host.
///
/// Implementations never fail: every problem is reported through the
/// returned outcome. They must be safe to call from many tasks at once.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, host: &HostRecord, command: &str) -> ExecutionOutcome;
}
