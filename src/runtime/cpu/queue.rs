//! In-order work queue served by one worker thread

use crate::error::{Error, Result};
use crate::runtime::{Event, Work};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

struct Job {
    work: Work,
    event: Event,
}

/// Run one unit of work, turning a panic into `Error::Backend`
pub(super) fn run(work: Work) -> Result<()> {
    let outcome = catch_unwind(AssertUnwindSafe(work))
        .unwrap_or_else(|_| Err(Error::Backend("device work panicked".into())));
    if let Err(err) = &outcome {
        tracing::debug!(error = %err, "device work failed");
    }
    outcome
}

/// Work queue backing a [`CpuClient`](super::CpuClient)
///
/// Jobs run one at a time in submission order. Dropping the queue closes it
/// and joins the worker after the already-submitted jobs have drained.
pub(super) struct WorkQueue {
    sender: Option<Sender<Job>>,
    worker: Option<JoinHandle<()>>,
}

impl WorkQueue {
    /// Start the worker thread
    pub(super) fn spawn(name: &str) -> Result<Self> {
        let (sender, receiver) = mpsc::channel::<Job>();

        let worker = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || {
                for job in receiver {
                    job.event.complete(run(job.work));
                }
            })
            .map_err(|err| Error::Backend(format!("failed to start queue worker: {err}")))?;

        Ok(Self {
            sender: Some(sender),
            worker: Some(worker),
        })
    }

    /// Enqueue `work`, returning its completion handle immediately
    pub(super) fn push(&self, work: Work) -> Result<Event> {
        let sender = self.sender.as_ref().ok_or(Error::QueueClosed)?;
        let event = Event::pending();
        sender
            .send(Job {
                work,
                event: event.clone(),
            })
            .map_err(|_| Error::QueueClosed)?;
        Ok(event)
    }
}

impl Drop for WorkQueue {
    fn drop(&mut self) {
        // Closing the channel ends the worker loop once it drains
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            // The last owner can be dropped by a job on the worker itself;
            // the thread then exits on its own once the loop drains.
            if worker.thread().id() != thread::current().id() {
                let _ = worker.join();
            }
        }
    }
}
