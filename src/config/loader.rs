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

//! Configuration loading and validation.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

use super::types::{Config, ConfigDocument, HostKeyChecking};
use super::utils::expand_tilde;
use crate::node::HostRecord;
use crate::ssh::known_hosts::HostKeyPolicy;

/// Credential file used when neither `--config` nor `AXION_CONFIG` is given.
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/vps/config.yaml";

/// Problems with the credential file. All of them are fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read config file at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("host entry {index}: {field} is required")]
    MissingField { index: usize, field: &'static str },

    #[error("invalid host_key_checking setting: {0}")]
    InvalidSetting(String),

    #[error("config file contains no host entries")]
    Empty,
}

impl Config {
    /// Load and validate the credential file at `path`.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let expanded_path = expand_tilde(path);

        if !fs::try_exists(&expanded_path).await.unwrap_or(false) {
            return Err(ConfigError::NotFound {
                path: expanded_path,
            });
        }

        let content =
            fs::read_to_string(&expanded_path)
                .await
                .map_err(|source| ConfigError::Read {
                    path: expanded_path.clone(),
                    source,
                })?;

        let config = Self::from_yaml(&content, &expanded_path)?;
        tracing::debug!(
            "Loaded {} host(s) from {}",
            config.hosts.len(),
            expanded_path.display()
        );
        Ok(config)
    }

    /// Parse and validate file content. `path` is only used in errors.
    ///
    /// A top-level sequence is read as a bare host list and anything else
    /// as a document with a `credentials:` key, so a bad field reports its
    /// own error instead of a mismatch against both layouts.
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let parse_error = |source: serde_yaml::Error| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        };

        let root: serde_yaml::Value = serde_yaml::from_str(content).map_err(parse_error)?;
        let config = if root.is_sequence() {
            let hosts: Vec<HostRecord> = serde_yaml::from_str(content).map_err(parse_error)?;
            Config {
                hosts,
                ..Config::default()
            }
        } else {
            let doc: ConfigDocument = if root.is_null() {
                ConfigDocument::default()
            } else {
                serde_yaml::from_str(content).map_err(parse_error)?
            };
            Config {
                hosts: doc.credentials,
                host_key_policy: doc
                    .host_key_checking
                    .map(parse_host_key_checking)
                    .transpose()?,
                known_hosts: doc
                    .known_hosts
                    .filter(|p| !p.trim().is_empty())
                    .map(|p| expand_tilde(Path::new(p.trim()))),
            }
        };

        validate_hosts(&config.hosts)?;
        Ok(config)
    }
}

fn parse_host_key_checking(value: HostKeyChecking) -> Result<HostKeyPolicy, ConfigError> {
    match value {
        HostKeyChecking::Flag(true) => Ok(HostKeyPolicy::KnownHosts),
        HostKeyChecking::Flag(false) => Ok(HostKeyPolicy::AcceptAny),
        HostKeyChecking::Mode(mode) => mode.parse().map_err(ConfigError::InvalidSetting),
    }
}

/// Reject an empty list and entries missing a required field.
fn validate_hosts(hosts: &[HostRecord]) -> Result<(), ConfigError> {
    if hosts.is_empty() {
        return Err(ConfigError::Empty);
    }

    for (i, host) in hosts.iter().enumerate() {
        let index = i + 1;
        if host.address.trim().is_empty() {
            return Err(ConfigError::MissingField {
                index,
                field: "address",
            });
        }
        if host.username.trim().is_empty() {
            return Err(ConfigError::MissingField {
                index,
                field: "username",
            });
        }
        if host.credential.is_empty() {
            return Err(ConfigError::MissingField {
                index,
                field: "password",
            });
        }
    }

    Ok(())
}
