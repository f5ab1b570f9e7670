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

//! SSH authentication methods and server verification.
//!
//! Hosts authenticate with the password from their credential record.
//! Server verification is chosen through `ServerCheckMethod`.

use russh::client::Handle;
use std::path::PathBuf;
use zeroize::Zeroizing;

use super::connection::ClientHandler;

/// An authentification token.
///
/// Used when creating a [`Client`](super::Client) for authentification.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AuthMethod {
    Password(Zeroizing<String>),
}

impl AuthMethod {
    /// Convenience method to create a [`AuthMethod`] from a string literal.
    pub fn with_password(password: &str) -> Self {
        Self::Password(Zeroizing::new(password.to_string()))
    }
}

/// How the server's host key is checked during the handshake.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ServerCheckMethod {
    /// Accept any host key.
    NoCheck,
    /// Check against `~/.ssh/known_hosts`.
    DefaultKnownHostsFile,
    /// Check against the given known_hosts file.
    KnownHostsFile(PathBuf),
}

impl ServerCheckMethod {
    /// Convenience method to create a [`ServerCheckMethod`] from a path.
    pub fn with_known_hosts_file(known_hosts_file: impl Into<PathBuf>) -> Self {
        Self::KnownHostsFile(known_hosts_file.into())
    }
}

/// This takes a handle and performs authentification with the given method.
pub(super) async fn authenticate(
    handle: &mut Handle<ClientHandler>,
    username: &str,
    auth: AuthMethod,
) -> Result<(), super::Error> {
    match auth {
        AuthMethod::Password(password) => {
            let is_authentificated = handle
                .authenticate_password(username, password.as_str())
                .await?;
            if !is_authentificated.success() {
                return Err(super::Error::PasswordWrong);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_password() {
        let auth = AuthMethod::with_password("secret");
        match auth {
            AuthMethod::Password(password) => assert_eq!(password.as_str(), "secret"),
        }
    }

    #[test]
    fn test_known_hosts_file_method() {
        let method = ServerCheckMethod::with_known_hosts_file("/tmp/known_hosts");
        assert_eq!(
            method,
            ServerCheckMethod::KnownHostsFile(PathBuf::from("/tmp/known_hosts"))
        );
    }
}
