// Background writer for preference updates

use super::store::{KeyValueStore, StoreError};
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

enum Job {
    Write { key: &'static str, value: String },
    Flush(Sender<()>),
}

/// Owns the store on a dedicated thread and applies writes in order.
///
/// Writes are fire-and-forget: a failed write is logged and dropped. Jobs
/// are handled FIFO, so the last value enqueued for a key is the one that
/// ends up stored.
pub(crate) struct PersistQueue {
    sender: Option<Sender<Job>>,
    worker: Option<JoinHandle<()>>,
}

impl PersistQueue {
    pub(crate) fn spawn(mut store: Box<dyn KeyValueStore>) -> Result<Self, StoreError> {
        let (sender, receiver) = mpsc::channel::<Job>();
        let worker = thread::Builder::new()
            .name("prefs-writer".to_string())
            .spawn(move || {
                for job in receiver {
                    match job {
                        Job::Write { key, value } => match store.set(key, &value) {
                            Ok(()) => debug!(key, value = %value, "persisted preference"),
                            Err(err) => warn!(key, error = %err, "failed to persist preference"),
                        },
                        Job::Flush(done) => {
                            let _ = done.send(());
                        }
                    }
                }
            })
            .map_err(StoreError::Spawn)?;

        Ok(PersistQueue {
            sender: Some(sender),
            worker: Some(worker),
        })
    }

    pub(crate) fn enqueue(&self, key: &'static str, value: String) {
        let Some(sender) = &self.sender else {
            return;
        };
        if sender.send(Job::Write { key, value }).is_err() {
            warn!(key, "preference writer has stopped; update not persisted");
        }
    }

    /// Block until every job enqueued so far has been handled
    pub(crate) fn flush(&self) {
        let Some(sender) = &self.sender else {
            return;
        };
        let (done, wait) = mpsc::channel();
        if sender.send(Job::Flush(done)).is_ok() {
            let _ = wait.recv();
        }
    }
}

impl Drop for PersistQueue {
    fn drop(&mut self) {
        // Closing the channel ends the worker loop once the queue drains
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("preference writer panicked");
            }
        }
    }
}
