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

//! Errors raised by the SSH transport layer.

use std::io;
use thiserror::Error;

/// Transport-level SSH failure.
///
/// These never leave the executor: each one is folded into the failure kind
/// of the host it happened on.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid address was provided: {0}")]
    AddressInvalid(#[source] io::Error),
    #[error("Password authentication failed.")]
    PasswordWrong,
    #[error("Host key verification failed. The server's host key was not recognized or has changed.")]
    ServerCheckFailed,
    #[error("SSH connection error: {0}")]
    SshError(#[from] russh::Error),
}
