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

//! Target selection by host ordinal
//!
//! Hosts are addressed by the number at the end of their name: `worker12`
//! has ordinal 12, `node9x` has none. A selection picks hosts by ordinal in
//! one of three forms.
//!
//! # Syntax
//!
//! - Single ordinal: `42` -> the first host whose ordinal is 42
//! - Ordinal list: `52,42,53` -> those hosts, in the order given
//! - Inclusive range: `1-20` -> every host with an ordinal in `[1, 20]`, in file order
//!
//! A single ordinal that matches nothing is an error. A list keeps going with
//! whatever it found and reports the misses. A range fails only when it
//! matches nothing at all.
//!
//! # Examples
//!
//! ```rust
//! use axion::node::HostRecord;
//! use axion::selector::{parse_index_selection, resolve};
//!
//! let hosts = vec![
//!     HostRecord::new(Some("worker5"), "10.0.0.5", "root", "pw"),
//!     HostRecord::new(Some("worker12"), "10.0.0.12", "root", "pw"),
//! ];
//!
//! let selection = parse_index_selection("12,5").unwrap();
//! let resolution = resolve(&hosts, &selection).unwrap();
//! let names: Vec<_> = resolution.targets.iter().map(|h| h.display_name()).collect();
//! assert_eq!(names, vec!["worker12", "worker5"]);
//! ```

mod error;
mod ordinal;
mod parser;
mod resolver;

pub use error::SelectionError;
pub use ordinal::extract_ordinal;
pub use parser::{parse_index_selection, parse_range_selection, Selection};
pub use resolver::{resolve, Resolution};
