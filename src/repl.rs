//! # Interactive Loop
//!
//! Presents a prompt, reads one line, hands it to the bridge, writes the
//! response, and repeats until end-of-input. The loop alternates between
//! two states, awaiting input and evaluating; it never issues a second
//! evaluation while one is outstanding and never parses line content.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::bridge::EvaluatorBridge;
use crate::config::ReplConfig;
use crate::error::Result;

/// The prompt/read/evaluate/print loop.
///
/// Generic over its input and output streams; the binary runs it on
/// stdin/stdout, tests on in-memory buffers.
pub struct Repl<R, W> {
    config: ReplConfig,
    bridge: EvaluatorBridge,
    input: R,
    output: W,
}

impl<R, W> Repl<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(config: ReplConfig, bridge: EvaluatorBridge, input: R, output: W) -> Self {
        Self {
            config,
            bridge,
            input,
            output,
        }
    }

    /// Runs the loop to end-of-input.
    ///
    /// Returns `Ok(())` on a clean end-of-input exit. A bridge failure
    /// (engine channel closed mid-request) ends the loop with that error.
    pub async fn run(mut self) -> Result<()> {
        if let Some(greeting) = &self.config.greeting {
            self.output.write_all(greeting.as_bytes()).await?;
            self.output.write_all(b"\n").await?;
        }

        let mut line = String::new();
        loop {
            self.output.write_all(self.config.prompt.as_bytes()).await?;
            self.output.flush().await?;

            line.clear();
            if self.input.read_line(&mut line).await? == 0 {
                debug!("input stream closed, exiting");
                break;
            }
            let request = line.trim_end_matches(['\r', '\n']);

            let response = self.bridge.evaluate(request).await?;
            self.output.write_all(response.as_bytes()).await?;
            self.output.write_all(b"\n").await?;
        }
        self.output.flush().await?;
        Ok(())
    }
}
