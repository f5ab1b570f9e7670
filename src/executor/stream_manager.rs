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

//! Per-stream output collection for a single remote command.
//!
//! Each stream of a running command (stdout and stderr) gets its own drain
//! task. Drains are spawned before the command starts and consume their
//! stream independently, so a command that writes heavily to one stream is
//! never blocked waiting for the other to be read.

use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle};

/// Number of chunks buffered between the channel pump and a drain task.
const DRAIN_CHANNEL_CAPACITY: usize = 256;

/// Which stream of the remote command a drain collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Stdout,
    Stderr,
}

impl StreamKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamKind::Stdout => "stdout",
            StreamKind::Stderr => "stderr",
        }
    }
}

/// Sending half plus the task that accumulates everything sent to it.
pub struct OutputDrain {
    kind: StreamKind,
    sender: mpsc::Sender<Vec<u8>>,
    handle: JoinHandle<String>,
}

impl OutputDrain {
    /// Spawn the collecting task for one stream.
    pub fn spawn(kind: StreamKind) -> Self {
        let (sender, mut receiver) = mpsc::channel::<Vec<u8>>(DRAIN_CHANNEL_CAPACITY);
        let handle = tokio::spawn(async move {
            let mut buffer = Vec::new();
            while let Some(chunk) = receiver.recv().await {
                buffer.extend_from_slice(&chunk);
            }
            String::from_utf8_lossy(&buffer).into_owned()
        });

        Self {
            kind,
            sender,
            handle,
        }
    }

    /// Forward a chunk to the drain.
    ///
    /// A closed drain only happens when its task died; the loss is reported
    /// by [`OutputDrain::finish`], so the chunk is dropped here.
    pub async fn push(&self, data: &[u8]) {
        if self.sender.send(data.to_vec()).await.is_err() {
            tracing::debug!(
                "{} drain closed, dropping {} bytes",
                self.kind.as_str(),
                data.len()
            );
        }
    }

    /// Signal end of stream and wait for the accumulated text.
    ///
    /// Bytes are decoded lossily as UTF-8.
    pub async fn finish(self) -> Result<String, JoinError> {
        drop(self.sender);
        self.handle.await
    }
}
