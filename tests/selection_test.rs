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

//! End-to-end selection over the public API.

use axion::node::HostRecord;
use axion::selector::{
    parse_index_selection, parse_range_selection, resolve, Selection, SelectionError,
};

fn host(name: &str) -> HostRecord {
    HostRecord::new(Some(name), "10.0.0.1", "root", "pw")
}

fn fleet() -> Vec<HostRecord> {
    vec![host("worker5"), host("worker12"), host("x")]
}

fn names(hosts: &[HostRecord]) -> Vec<&str> {
    hosts.iter().map(|h| h.display_name()).collect()
}

#[test]
fn test_list_selection_keeps_given_order() {
    let hosts = fleet();
    let selection = parse_index_selection("5,12").unwrap();
    let resolution = resolve(&hosts, &selection).unwrap();
    assert_eq!(names(&resolution.targets), vec!["worker5", "worker12"]);
    assert!(resolution.not_found.is_empty());

    let selection = parse_index_selection("12, 5").unwrap();
    let resolution = resolve(&hosts, &selection).unwrap();
    assert_eq!(names(&resolution.targets), vec!["worker12", "worker5"]);
}

#[test]
fn test_range_selection_uses_file_order() {
    let hosts = fleet();
    let selection = parse_range_selection("1-10").unwrap();
    let resolution = resolve(&hosts, &selection).unwrap();
    assert_eq!(names(&resolution.targets), vec!["worker5"]);

    let selection = parse_range_selection("1-20").unwrap();
    let resolution = resolve(&hosts, &selection).unwrap();
    assert_eq!(names(&resolution.targets), vec!["worker5", "worker12"]);
}

#[test]
fn test_single_miss_is_fatal() {
    let hosts = fleet();
    let selection = parse_index_selection("99").unwrap();
    assert_eq!(selection, Selection::Single(99));
    let err = resolve(&hosts, &selection).unwrap_err();
    assert_eq!(err, SelectionError::NotFound(99));
    assert_eq!(err.to_string(), "host with number 99 not found");
}

#[test]
fn test_list_partial_miss_is_reported() {
    let hosts = fleet();
    let selection = parse_index_selection("5,7,12,8").unwrap();
    let resolution = resolve(&hosts, &selection).unwrap();
    assert_eq!(names(&resolution.targets), vec!["worker5", "worker12"]);
    assert_eq!(resolution.not_found, vec![7, 8]);
}

#[test]
fn test_list_total_miss_fails() {
    let hosts = fleet();
    let selection = parse_index_selection("7,8").unwrap();
    assert!(matches!(
        resolve(&hosts, &selection),
        Err(SelectionError::NoTargets { .. })
    ));
}

#[test]
fn test_empty_range_fails() {
    let hosts = fleet();
    let selection = parse_range_selection("20-30").unwrap();
    assert!(matches!(
        resolve(&hosts, &selection),
        Err(SelectionError::NoTargets { .. })
    ));
}

#[test]
fn test_malformed_expressions() {
    assert!(matches!(
        parse_index_selection("0"),
        Err(SelectionError::InvalidIndex { .. })
    ));
    assert!(matches!(
        parse_index_selection("abc"),
        Err(SelectionError::InvalidIndex { .. })
    ));
    assert!(matches!(
        parse_index_selection(",,"),
        Err(SelectionError::EmptySelection)
    ));
    assert!(matches!(
        parse_range_selection("10"),
        Err(SelectionError::InvalidRange { .. })
    ));
    assert!(matches!(
        parse_range_selection("10-5"),
        Err(SelectionError::ReversedRange { start: 10, end: 5 })
    ));
}

#[test]
fn test_range_property_over_generated_fleet() {
    let hosts: Vec<HostRecord> = (1..=30)
        .rev()
        .map(|n| host(&format!("node{n}")))
        .chain(std::iter::once(host("node9x")))
        .collect();

    for (start, end) in [(1u64, 1u64), (3, 17), (25, 40), (1, 30)] {
        let resolution = resolve(&hosts, &Selection::Range { start, end }).unwrap();
        let expected: Vec<&str> = hosts
            .iter()
            .filter(|h| h.ordinal().is_some_and(|n| n >= start && n <= end))
            .map(|h| h.display_name())
            .collect();
        assert_eq!(names(&resolution.targets), expected);
    }
}
