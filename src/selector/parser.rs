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

//! Parser for selection expressions
//!
//! `-i` accepts a single ordinal or a comma-separated list; `-l` accepts an
//! inclusive `start-end` range.

use super::error::SelectionError;
use std::fmt;

/// A parsed selection expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// One host, by ordinal
    Single(u64),
    /// Several hosts, in the given order (duplicates allowed)
    List(Vec<u64>),
    /// Every host with `start <= ordinal <= end`
    Range { start: u64, end: u64 },
}

impl Selection {
    /// Whether this selection targets exactly one host by construction.
    pub fn is_single(&self) -> bool {
        matches!(self, Selection::Single(_))
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Single(n) => write!(f, "{n}"),
            Selection::List(ns) => {
                let parts: Vec<String> = ns.iter().map(u64::to_string).collect();
                write!(f, "{}", parts.join(","))
            }
            Selection::Range { start, end } => write!(f, "{start}-{end}"),
        }
    }
}

/// Parse the `-i` form: `42` or `52,42,53`.
///
/// Any comma makes the input a list. List tokens are trimmed and empty
/// tokens are skipped, so `"5, ,7,"` is `[5, 7]`.
///
/// ```rust
/// use axion::selector::{parse_index_selection, Selection};
///
/// assert_eq!(parse_index_selection("42").unwrap(), Selection::Single(42));
/// assert_eq!(
///     parse_index_selection("52, 42,53").unwrap(),
///     Selection::List(vec![52, 42, 53])
/// );
/// ```
pub fn parse_index_selection(input: &str) -> Result<Selection, SelectionError> {
    if input.contains(',') {
        let mut indices = Vec::new();
        for token in input.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            indices.push(parse_index(token)?);
        }

        if indices.is_empty() {
            return Err(SelectionError::EmptySelection);
        }
        Ok(Selection::List(indices))
    } else {
        let token = input.trim();
        if token.is_empty() {
            return Err(SelectionError::EmptySelection);
        }
        parse_index(token).map(Selection::Single)
    }
}

/// Parse the `-l` form: `start-end`, both inclusive.
///
/// ```rust
/// use axion::selector::{parse_range_selection, Selection};
///
/// assert_eq!(
///     parse_range_selection("1-20").unwrap(),
///     Selection::Range { start: 1, end: 20 }
/// );
/// assert!(parse_range_selection("20-1").is_err());
/// ```
pub fn parse_range_selection(input: &str) -> Result<Selection, SelectionError> {
    let parts: Vec<&str> = input.split('-').collect();
    if parts.len() != 2 {
        return Err(SelectionError::InvalidRange {
            expression: input.to_string(),
        });
    }

    let start = parse_index(parts[0].trim())?;
    let end = parse_index(parts[1].trim())?;

    if end < start {
        return Err(SelectionError::ReversedRange { start, end });
    }

    Ok(Selection::Range { start, end })
}

/// Parse one ordinal token, rejecting anything below 1.
fn parse_index(token: &str) -> Result<u64, SelectionError> {
    let value = token
        .parse::<i64>()
        .map_err(|e| SelectionError::invalid_index(token, e.to_string()))?;

    if value < 1 {
        return Err(SelectionError::invalid_index(
            token,
            format!("index must be >= 1, got {value}"),
        ));
    }

    Ok(value as u64)
}
