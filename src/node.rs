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

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;
use std::fmt;
use zeroize::Zeroizing;

use crate::selector::extract_ordinal;

/// Port used when a host record does not name one.
pub const DEFAULT_SSH_PORT: u16 = 22;

/// A single host entry from the credential file.
///
/// Records are validated by the config loader before they reach the
/// selector or the executor, so `address`, `username` and `credential`
/// are always non-empty here.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct HostRecord {
    #[serde(default, deserialize_with = "optional_scalar")]
    pub name: Option<String>,
    #[serde(default, alias = "ip", deserialize_with = "scalar")]
    pub address: String,
    #[serde(default, deserialize_with = "scalar")]
    pub username: String,
    #[serde(default, alias = "password", deserialize_with = "secret_scalar")]
    pub credential: Zeroizing<String>,
    #[serde(default)]
    pub port: Option<u16>,
}

impl HostRecord {
    pub fn new(
        name: Option<&str>,
        address: impl Into<String>,
        username: impl Into<String>,
        credential: impl Into<String>,
    ) -> Self {
        Self {
            name: name.map(str::to_string),
            address: address.into(),
            username: username.into(),
            credential: Zeroizing::new(credential.into()),
            port: None,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Identifier shown in reports: the name, or the address for unnamed hosts.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.address,
        }
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_SSH_PORT)
    }

    /// Trailing number of the name, used for `-i`/`-l` selection.
    pub fn ordinal(&self) -> Option<u64> {
        self.name.as_deref().and_then(extract_ordinal)
    }

    pub fn socket_address(&self) -> String {
        format!("{}:{}", self.address, self.port())
    }
}

/// Text of a YAML scalar. `password: 123456` and `name: 7` are read as
/// numbers by YAML but are plain strings here.
fn scalar_text<E: serde::de::Error>(value: Value) -> Result<Option<String>, E> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Sequence(_) => Err(E::custom("expected a scalar, found a sequence")),
        Value::Mapping(_) => Err(E::custom("expected a scalar, found a mapping")),
        Value::Tagged(tagged) => scalar_text(tagged.value),
    }
}

fn optional_scalar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    scalar_text(Value::deserialize(deserializer)?)
}

fn scalar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(optional_scalar(deserializer)?.unwrap_or_default())
}

fn secret_scalar<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Zeroizing<String>, D::Error> {
    scalar(deserializer).map(Zeroizing::new)
}

impl fmt::Debug for HostRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostRecord")
            .field("name", &self.name)
            .field("address", &self.address)
            .field("username", &self.username)
            .field("credential", &"<redacted>")
            .field("port", &self.port)
            .finish()
    }
}

impl fmt::Display for HostRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}@{})",
            self.display_name(),
            self.username,
            self.socket_address()
        )
    }
}
