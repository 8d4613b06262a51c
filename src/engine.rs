//! # Engine Boundary
//!
//! The engine is an opaque collaborator: the shell hands it one text request
//! per evaluation and receives one text response, and the engine may at any
//! time request the contents of a file by path. All of that traffic moves
//! over four bounded mpsc channels, constructed in one place by [`ports`].
//!
//! The shell never inspects engine state. An engine is embedded by spawning
//! its [`Engine::run`] on the runtime with the [`EnginePorts`] endpoint
//! bundle; the shell keeps the mirrored [`ShellPorts`] bundle.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::debug;

/// Channel endpoints held by the shell side of the boundary.
///
/// `requests`/`responses` carry evaluation traffic and are consumed by the
/// [`crate::bridge::EvaluatorBridge`]; `file_requests`/`file_payloads` carry
/// the file side channel and are consumed by the [`crate::loader::FileLoader`].
pub struct ShellPorts {
    /// Outgoing evaluation requests, shell to engine.
    pub requests: mpsc::Sender<String>,
    /// Incoming evaluation responses, engine to shell.
    pub responses: mpsc::Receiver<String>,
    /// Incoming file-content requests, engine to shell.
    pub file_requests: mpsc::Receiver<PathBuf>,
    /// Outgoing file payloads, shell to engine.
    pub file_payloads: mpsc::Sender<String>,
}

/// Channel endpoints handed to the embedded engine.
pub struct EnginePorts {
    /// Incoming evaluation requests, shell to engine.
    pub requests: mpsc::Receiver<String>,
    /// Outgoing evaluation responses, engine to shell.
    pub responses: mpsc::Sender<String>,
    /// Outgoing file-content requests, engine to shell.
    pub file_requests: mpsc::Sender<PathBuf>,
    /// Incoming file payloads, shell to engine.
    pub file_payloads: mpsc::Receiver<String>,
}

/// Builds the four channels of the engine boundary.
///
/// `capacity` bounds each stream independently. The channels do no pairing
/// and no framing beyond one message per payload; ordering is per-stream
/// FIFO only. Request/response correlation belongs to the bridge.
pub fn ports(capacity: usize) -> (ShellPorts, EnginePorts) {
    let (request_tx, request_rx) = mpsc::channel(capacity);
    let (response_tx, response_rx) = mpsc::channel(capacity);
    let (file_request_tx, file_request_rx) = mpsc::channel(capacity);
    let (file_payload_tx, file_payload_rx) = mpsc::channel(capacity);
    (
        ShellPorts {
            requests: request_tx,
            responses: response_rx,
            file_requests: file_request_rx,
            file_payloads: file_payload_tx,
        },
        EnginePorts {
            requests: request_rx,
            responses: response_tx,
            file_requests: file_request_tx,
            file_payloads: file_payload_rx,
        },
    )
}

/// An embeddable evaluation engine.
///
/// Implementors consume requests from their [`EnginePorts`] until the shell
/// side closes, replying exactly once per request, in request order. The
/// reply-in-order contract is assumed by the bridge, not enforced here.
#[async_trait]
pub trait Engine: Send + 'static {
    /// Runs the engine against its channel endpoints until shutdown.
    async fn run(self, ports: EnginePorts);
}

/// Help text served by [`EchoEngine`] for the `h` command.
pub const HELP_TEXT: &str =
    "commands: h (this help), :load <path> (print file contents); any other line echoes";

/// Minimal built-in engine.
///
/// Replies to `h` with [`HELP_TEXT`], serves `:load <path>` through the file
/// side channel, and echoes everything else. It exists so the binary runs
/// end-to-end and the protocol is exercisable in tests; it is not a command
/// language.
#[derive(Debug, Default)]
pub struct EchoEngine;

#[async_trait]
impl Engine for EchoEngine {
    async fn run(self, mut ports: EnginePorts) {
        while let Some(line) = ports.requests.recv().await {
            let reply = match line.trim() {
                "h" => HELP_TEXT.to_string(),
                cmd if cmd.starts_with(":load ") => {
                    let path = PathBuf::from(cmd[":load ".len()..].trim());
                    if ports.file_requests.send(path).await.is_err() {
                        break;
                    }
                    // A failed load never delivers a payload, so this recv
                    // can pend until the loader side shuts down.
                    match ports.file_payloads.recv().await {
                        Some(contents) => contents,
                        None => break,
                    }
                }
                other => other.to_string(),
            };
            if ports.responses.send(reply).await.is_err() {
                break;
            }
        }
        debug!("engine: request stream closed, shutting down");
    }
}
