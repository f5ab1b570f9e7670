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

//! Error types for selection parsing and resolution

use thiserror::Error;

/// Errors raised while turning a selection string into a target list.
///
/// All of these are fatal: they are reported before any connection is made.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// A token that is not an integer, or an integer below 1
    #[error("invalid index '{value}': {reason}")]
    InvalidIndex { value: String, reason: String },

    /// A range that is not of the form `start-end`
    #[error("invalid range '{expression}': expected 'start-end'")]
    InvalidRange { expression: String },

    /// A range whose end comes before its start (e.g., `9-3`)
    #[error("reversed range '{start}-{end}' (end index must be >= start index)")]
    ReversedRange { start: u64, end: u64 },

    /// A list that contained only separators and whitespace
    #[error("no valid indices provided")]
    EmptySelection,

    /// Single-ordinal lookup found no host
    #[error("host with number {0} not found")]
    NotFound(u64),

    /// List or range lookup found no host at all
    #[error("no host entries found {context}")]
    NoTargets { context: String },
}

impl SelectionError {
    pub(crate) fn invalid_index(value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidIndex {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
