//! # File Loader
//!
//! The FileLoader serves the engine-initiated file side channel: the engine
//! sends a path, the loader reads the full contents as UTF-8 text and
//! delivers them back in one payload.
//!
//! A failed read (missing path, permission, directory, invalid UTF-8) is
//! reported on the diagnostic stream and delivers nothing; the engine's
//! request stays unanswered. There is no caching, no deduplication, no path
//! canonicalization, and no size limit.

use std::path::PathBuf;

use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, error};

/// Serves file-content requests from the local filesystem.
pub struct FileLoader {
    requests: mpsc::Receiver<PathBuf>,
    payloads: mpsc::Sender<String>,
}

impl FileLoader {
    /// Creates a loader over the shell side of the file channels.
    pub fn new(requests: mpsc::Receiver<PathBuf>, payloads: mpsc::Sender<String>) -> Self {
        Self { requests, payloads }
    }

    /// Serves requests until the request stream closes.
    ///
    /// Returns [`LoaderError::Delivery`] if a loaded payload cannot be
    /// handed to the engine because its end of the channel is gone.
    pub async fn run(mut self) -> LoaderResult<()> {
        while let Some(path) = self.requests.recv().await {
            debug!(path = %path.display(), "file requested");
            match tokio::fs::read_to_string(&path).await {
                Ok(contents) => {
                    self.payloads
                        .send(contents)
                        .await
                        .map_err(|_| LoaderError::Delivery)?;
                }
                Err(e) => {
                    // Report only; the engine's request stays unanswered.
                    error!(path = %path.display(), "file load failed: {}", e);
                }
            }
        }
        debug!("loader: request stream closed, shutting down");
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("file payload channel closed before delivery")]
    Delivery,
}

pub type LoaderResult<T> = Result<T, LoaderError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn spawn_loader(capacity: usize) -> (mpsc::Sender<PathBuf>, mpsc::Receiver<String>) {
        let (request_tx, request_rx) = mpsc::channel(capacity);
        let (payload_tx, payload_rx) = mpsc::channel(capacity);
        tokio::spawn(FileLoader::new(request_rx, payload_tx).run());
        (request_tx, payload_rx)
    }

    #[tokio::test]
    async fn test_load_delivers_contents_verbatim() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"hello\n").unwrap();

        let (requests, mut payloads) = spawn_loader(8);
        requests.send(file.path().to_path_buf()).await.unwrap();
        assert_eq!(payloads.recv().await.unwrap(), "hello\n");
    }

    #[tokio::test]
    async fn test_missing_path_delivers_nothing() {
        let (requests, mut payloads) = spawn_loader(8);
        requests
            .send(PathBuf::from("/nonexistent/porthole-test"))
            .await
            .unwrap();

        // The loader keeps serving after a failure; the next good load is
        // the first payload to arrive.
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"after failure").unwrap();
        requests.send(file.path().to_path_buf()).await.unwrap();

        assert_eq!(payloads.recv().await.unwrap(), "after failure");
    }

    #[tokio::test]
    async fn test_repeat_loads_are_independent() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"same contents").unwrap();

        let (requests, mut payloads) = spawn_loader(8);
        requests.send(file.path().to_path_buf()).await.unwrap();
        requests.send(file.path().to_path_buf()).await.unwrap();

        assert_eq!(payloads.recv().await.unwrap(), "same contents");
        assert_eq!(payloads.recv().await.unwrap(), "same contents");
    }

    #[tokio::test]
    async fn test_run_ends_when_requests_close() {
        let (request_tx, request_rx) = mpsc::channel::<PathBuf>(8);
        let (payload_tx, _payload_rx) = mpsc::channel(8);
        let handle = tokio::spawn(FileLoader::new(request_rx, payload_tx).run());
        drop(request_tx);
        assert!(handle.await.unwrap().is_ok());
    }
}
