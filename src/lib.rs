//! # Porthole: An Engine-Bridged Interactive Shell
//!
//! Porthole is a line-oriented interactive shell whose evaluation logic lives
//! in an embedded, opaque engine reached only through asynchronous message
//! channels. The shell reads a line, forwards it to the engine, awaits the
//! engine's single reply, prints it, and repeats.
//!
//! ## Architecture
//!
//! The crate is organized around the bridging protocol between the
//! synchronous-feeling shell loop and the asynchronous engine:
//!
//! - Engine boundary and channel construction ([`engine`])
//! - Request/response pairing ([`bridge`])
//! - Engine-initiated file loading ([`loader`])
//! - The prompt/read/evaluate/print loop ([`repl`])
//! - Configuration ([`config`]) and error types ([`error`])
//!
//! ## Protocol
//!
//! ```text
//! Repl → EvaluatorBridge → outgoing channel → (engine) → incoming channel
//!      → EvaluatorBridge → Repl
//! ```
//!
//! The protocol is strictly single-slot: the loop never issues a second
//! evaluation while one is outstanding, so the i-th engine reply always
//! belongs to the i-th request. The file side channel is independent and
//! engine-initiated: the engine asks for a path, the [`loader::FileLoader`]
//! reads it and delivers the full contents back.

pub mod bridge;
pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod repl;

// Re-exports
pub use bridge::EvaluatorBridge;
pub use engine::{EchoEngine, Engine, EnginePorts, ShellPorts, ports};
pub use error::{Error, Result};
pub use loader::FileLoader;
pub use repl::Repl;
