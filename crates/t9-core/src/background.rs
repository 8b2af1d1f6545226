//! Index construction on a worker thread.
//!
//! Building over a full dictionary takes long enough to stall a UI thread, so
//! callers can hand the word lists to [`IndexLoader::spawn`] and pick up the
//! finished `Arc<T9Index>` later.

use std::io;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use tracing::debug;

use crate::index::{build_index, T9Index};

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("failed to spawn index worker: {0}")]
    Spawn(#[from] io::Error),

    #[error("index worker exited without producing an index")]
    WorkerLost,
}

/// Handle to an index being built in the background.
pub struct IndexLoader {
    rx: Receiver<Arc<T9Index>>,
}

impl IndexLoader {
    /// Start building from owned word lists (popular first, rank-ordered).
    pub fn spawn(popular: Vec<String>, general: Vec<String>) -> Result<Self, BuildError> {
        Self::spawn_with(move || build_index(&popular, &general))
    }

    fn spawn_with<F>(build: F) -> Result<Self, BuildError>
    where
        F: FnOnce() -> T9Index + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::Builder::new()
            .name("t9-index-builder".into())
            .spawn(move || {
                let index = Arc::new(build());
                debug!(entries = index.len(), "background build finished");
                // The receiver may have been dropped; nothing left to do then.
                let _ = tx.send(index);
            })?;
        Ok(Self { rx })
    }

    /// Return the index if it is ready, without blocking.
    pub fn try_take(&self) -> Result<Option<Arc<T9Index>>, BuildError> {
        match self.rx.try_recv() {
            Ok(index) => Ok(Some(index)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(BuildError::WorkerLost),
        }
    }

    /// Block until the index is ready.
    pub fn wait(self) -> Result<Arc<T9Index>, BuildError> {
        self.rx.recv().map_err(|_| BuildError::WorkerLost)
    }
}
