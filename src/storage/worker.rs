//! Background persist worker.
//!
//! Mutations update in-memory state synchronously and then hand a
//! serialized snapshot to this worker, so the caller never waits on
//! storage I/O and never observes its failures. The worker drains a
//! command queue in order; a failed write is logged and dropped, and the
//! in-memory state stays authoritative for the session.

use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;

use tracing::{error, warn};

use super::backend::StorageBackend;

enum Command {
    Write(Vec<u8>),
    Delete,
    Flush(Sender<()>),
    Shutdown,
}

/// Writer thread owning the durable slot for one key.
///
/// Commands are applied in submission order, so a `Delete` enqueued
/// after a burst of writes lands after them. Dropping the worker shuts
/// the thread down after the queue drains.
pub struct PersistWorker {
    tx: Sender<Command>,
    handle: Option<JoinHandle<()>>,
}

impl PersistWorker {
    /// Spawn a worker writing to `key` on the given backend.
    #[must_use]
    pub fn spawn(key: impl Into<String>, backend: Arc<dyn StorageBackend>) -> Self {
        let key = key.into();
        let (tx, rx) = mpsc::channel();

        let handle = std::thread::spawn(move || {
            while let Ok(command) = rx.recv() {
                match command {
                    Command::Write(bytes) => {
                        if let Err(e) = backend.save(&key, &bytes) {
                            warn!("failed to persist {key:?}: {e}");
                        }
                    }
                    Command::Delete => {
                        if let Err(e) = backend.delete(&key) {
                            warn!("failed to delete {key:?}: {e}");
                        }
                    }
                    Command::Flush(reply) => {
                        // Queue is FIFO: everything enqueued before the
                        // flush has already been applied.
                        let _ = reply.send(());
                    }
                    Command::Shutdown => break,
                }
            }
        });

        Self {
            tx,
            handle: Some(handle),
        }
    }

    /// Enqueue a detached write of the serialized state.
    pub fn write(&self, bytes: Vec<u8>) {
        if self.tx.send(Command::Write(bytes)).is_err() {
            error!("persist worker is gone; dropping write");
        }
    }

    /// Enqueue deletion of the durable record.
    pub fn delete(&self) {
        if self.tx.send(Command::Delete).is_err() {
            error!("persist worker is gone; dropping delete");
        }
    }

    /// Block until every previously-enqueued command has been applied.
    pub fn flush(&self) {
        let (reply_tx, reply_rx) = mpsc::channel();
        if self.tx.send(Command::Flush(reply_tx)).is_ok() {
            let _ = reply_rx.recv();
        }
    }
}

impl Drop for PersistWorker {
    fn drop(&mut self) {
        let _ = self.tx.send(Command::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
