//! # Evaluator Bridge
//!
//! The EvaluatorBridge adapts the shell's line-oriented evaluation contract
//! onto the asynchronous engine channels. It sends one request, awaits
//! exactly one reply, and resolves with that reply's payload.
//!
//! ## Key Properties
//!
//! - **Single-Slot Pairing**: at most one request is outstanding at a time,
//!   so the next incoming message is unambiguously the reply to it
//! - **Exactly-Once Resolution**: each `evaluate` call consumes exactly one
//!   incoming message
//! - **No Timeout, No Retry**: a call that never receives a reply suspends
//!   until the channel closes
//!
//! ## Implementation Details
//!
//! The pending reply is not tracked with a registration that must be
//! unsubscribed; it is the single `recv` future on the incoming stream,
//! which resolves at most once by construction. `evaluate` takes `&mut self`
//! so a second concurrent call cannot even be expressed — the borrow is the
//! mutual-exclusion gate.

use thiserror::Error;
use tokio::sync::mpsc;
use tracing::instrument;

/// Hook applied to each response before it is handed to the caller.
pub type OutputTransform = fn(String) -> String;

/// Pairs evaluation requests with engine responses over the channel pair.
pub struct EvaluatorBridge {
    outgoing: mpsc::Sender<String>,
    incoming: mpsc::Receiver<String>,
    transform: Option<OutputTransform>,
}

impl EvaluatorBridge {
    /// Creates a bridge over the shell side of the evaluation channels.
    pub fn new(outgoing: mpsc::Sender<String>, incoming: mpsc::Receiver<String>) -> Self {
        Self {
            outgoing,
            incoming,
            transform: None,
        }
    }

    /// Installs an output transform applied to every response.
    ///
    /// By default no transform is installed and responses pass through
    /// unchanged.
    pub fn with_transform(mut self, transform: OutputTransform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Sends `line` to the engine and awaits its reply.
    ///
    /// The line is treated as opaque text; nothing is parsed, validated, or
    /// logged about its content. Fails with [`BridgeError::ChannelClosed`]
    /// if either direction of the channel is gone while the request is
    /// outstanding.
    #[instrument(skip(self, line))]
    pub async fn evaluate(&mut self, line: &str) -> BridgeResult<String> {
        self.outgoing
            .send(line.to_string())
            .await
            .map_err(|_| BridgeError::ChannelClosed)?;

        let response = self
            .incoming
            .recv()
            .await
            .ok_or(BridgeError::ChannelClosed)?;

        Ok(match self.transform {
            Some(transform) => transform(response),
            None => response,
        })
    }
}

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("engine channel closed while a request was outstanding")]
    ChannelClosed,
}

pub type BridgeResult<T> = Result<T, BridgeError>;
