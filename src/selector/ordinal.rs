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

/// Extract the ordinal of a host name: its trailing run of ASCII digits.
///
/// Returns `None` when the name does not end in a digit, or when the digit
/// run does not fit in a `u64`. Digits elsewhere in the name are ignored.
///
/// ```rust
/// use axion::selector::extract_ordinal;
///
/// assert_eq!(extract_ordinal("worker60"), Some(60));
/// assert_eq!(extract_ordinal("rack2-node07"), Some(7));
/// assert_eq!(extract_ordinal("node9x"), None);
/// ```
pub fn extract_ordinal(name: &str) -> Option<u64> {
    let digits_start = name
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(idx, _)| idx)?;

    name[digits_start..].parse::<u64>().ok()
}
