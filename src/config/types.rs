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

//! Configuration type definitions.

use serde::Deserialize;

use crate::node::HostRecord;
use crate::ssh::known_hosts::HostKeyPolicy;

/// The mapping form of the credential file.
///
/// A bare list of hosts is accepted as well; the loader reads that shape
/// straight into `Vec<HostRecord>`:
///
/// ```yaml
/// - name: worker1
///   ip: 10.0.0.1
///   username: root
///   password: secret
/// ```
///
/// ```yaml
/// host_key_checking: yes
/// credentials:
///   - name: worker1
///     ip: 10.0.0.1
///     username: root
///     password: secret
/// ```
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigDocument {
    #[serde(default)]
    pub credentials: Vec<HostRecord>,
    #[serde(default)]
    pub host_key_checking: Option<HostKeyChecking>,
    #[serde(default)]
    pub known_hosts: Option<String>,
}

/// `host_key_checking` accepts YAML booleans as well as the mode words.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum HostKeyChecking {
    Flag(bool),
    Mode(String),
}

/// Loaded and validated configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Host records in file order.
    pub hosts: Vec<HostRecord>,
    /// Host key policy from the file, if it set one.
    pub host_key_policy: Option<HostKeyPolicy>,
    /// Explicit known_hosts file, already tilde-expanded.
    pub known_hosts: Option<std::path::PathBuf>,
}
