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

use super::tokio_client::ServerCheckMethod;
use directories::BaseDirs;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Get the default known_hosts file path
pub fn get_default_known_hosts_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(".ssh").join("known_hosts"))
}

/// How remote host identities are verified.
///
/// `AcceptAny` connects to whatever answers at the address. It is only ever
/// used when selected explicitly, and a warning is logged when it is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HostKeyPolicy {
    /// Accept every host key without checking
    #[default]
    AcceptAny,
    /// Verify against `~/.ssh/known_hosts`
    KnownHosts,
    /// Verify against a specific known_hosts file
    KnownHostsFile(PathBuf),
}

impl HostKeyPolicy {
    /// Point `KnownHosts` at an explicit file; other policies are unchanged.
    pub fn with_known_hosts_file(self, path: Option<PathBuf>) -> Self {
        match (self, path) {
            (HostKeyPolicy::KnownHosts, Some(path)) => HostKeyPolicy::KnownHostsFile(path),
            (policy, _) => policy,
        }
    }

    pub fn verifies_identity(&self) -> bool {
        !matches!(self, HostKeyPolicy::AcceptAny)
    }
}

impl fmt::Display for HostKeyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostKeyPolicy::AcceptAny => write!(f, "no"),
            HostKeyPolicy::KnownHosts => write!(f, "yes"),
            HostKeyPolicy::KnownHostsFile(path) => write!(f, "yes ({})", path.display()),
        }
    }
}

impl FromStr for HostKeyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "true" | "strict" => Ok(Self::KnownHosts),
            "no" | "false" | "accept-any" => Ok(Self::AcceptAny),
            other => Err(format!(
                "invalid host key checking mode '{other}' (expected yes or no)"
            )),
        }
    }
}

/// Create a ServerCheckMethod for the given policy
pub fn get_check_method(policy: &HostKeyPolicy) -> ServerCheckMethod {
    match policy {
        HostKeyPolicy::AcceptAny => {
            tracing::debug!("Host key checking disabled (accept any)");
            ServerCheckMethod::NoCheck
        }
        HostKeyPolicy::KnownHosts => {
            if let Some(known_hosts_path) = get_default_known_hosts_path() {
                tracing::debug!("Using known_hosts file: {:?}", known_hosts_path);
                ServerCheckMethod::with_known_hosts_file(known_hosts_path)
            } else {
                tracing::debug!("Could not determine home directory, using russh default lookup");
                ServerCheckMethod::DefaultKnownHostsFile
            }
        }
        HostKeyPolicy::KnownHostsFile(path) => {
            tracing::debug!("Using known_hosts file: {:?}", path);
            ServerCheckMethod::with_known_hosts_file(path.clone())
        }
    }
}
