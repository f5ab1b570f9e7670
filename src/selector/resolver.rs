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

//! Resolution of a selection against the loaded host list

use super::error::SelectionError;
use super::parser::Selection;
use crate::node::HostRecord;

/// The hosts a selection resolved to, plus ordinals that matched nothing.
///
/// `not_found` is only ever non-empty for list selections; single and range
/// selections fail outright instead.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub targets: Vec<HostRecord>,
    pub not_found: Vec<u64>,
}

/// Resolve `selection` against `hosts`.
///
/// Target order is the order of the selection for single and list forms,
/// and the order of `hosts` for ranges.
pub fn resolve(hosts: &[HostRecord], selection: &Selection) -> Result<Resolution, SelectionError> {
    match selection {
        Selection::Single(ordinal) => {
            let host = find_by_ordinal(hosts, *ordinal).ok_or(SelectionError::NotFound(*ordinal))?;
            Ok(Resolution {
                targets: vec![host.clone()],
                not_found: Vec::new(),
            })
        }
        Selection::List(ordinals) => {
            let mut resolution = Resolution::default();
            for &ordinal in ordinals {
                match find_by_ordinal(hosts, ordinal) {
                    Some(host) => resolution.targets.push(host.clone()),
                    None => resolution.not_found.push(ordinal),
                }
            }

            if resolution.targets.is_empty() {
                return Err(SelectionError::NoTargets {
                    context: format!("for numbers {selection}"),
                });
            }
            Ok(resolution)
        }
        Selection::Range { start, end } => {
            let targets: Vec<HostRecord> = hosts
                .iter()
                .filter(|host| {
                    host.ordinal()
                        .is_some_and(|ordinal| (*start..=*end).contains(&ordinal))
                })
                .cloned()
                .collect();

            if targets.is_empty() {
                return Err(SelectionError::NoTargets {
                    context: format!("in range {start}-{end}"),
                });
            }
            Ok(Resolution {
                targets,
                not_found: Vec::new(),
            })
        }
    }
}

/// First host in list order whose ordinal equals `ordinal`.
fn find_by_ordinal(hosts: &[HostRecord], ordinal: u64) -> Option<&HostRecord> {
    hosts.iter().find(|host| host.ordinal() == Some(ordinal))
}
