//! Completion handles for submitted device work

use crate::error::{Error, Result};
use parking_lot::{Condvar, Mutex};
use std::fmt;
use std::sync::Arc;

/// Completion handle for one submission to a device queue
///
/// Returned by [`RuntimeClient::submit`](super::RuntimeClient::submit) and by
/// non-blocking buffer operations. Cloning shares the same underlying state;
/// every clone observes completion and every waiter receives the work's
/// error if it failed.
#[derive(Clone)]
pub struct Event {
    inner: Arc<EventInner>,
}

struct EventInner {
    state: Mutex<EventState>,
    done: Condvar,
}

enum EventState {
    Pending,
    Complete(Result<()>),
}

impl Event {
    /// Create a handle for work that has not finished yet
    ///
    /// The backend that runs the work must eventually call
    /// [`complete`](Self::complete) on a clone of it.
    pub fn pending() -> Self {
        Self::with_state(EventState::Pending)
    }

    /// Create a handle that is already complete
    pub fn completed() -> Self {
        Self::with_state(EventState::Complete(Ok(())))
    }

    /// Create a handle for work that already failed
    pub fn failed(error: Error) -> Self {
        Self::with_state(EventState::Complete(Err(error)))
    }

    fn with_state(state: EventState) -> Self {
        Self {
            inner: Arc::new(EventInner {
                state: Mutex::new(state),
                done: Condvar::new(),
            }),
        }
    }

    /// Record the outcome of the work and wake every waiter
    ///
    /// Only the first outcome is kept.
    pub fn complete(&self, outcome: Result<()>) {
        let mut state = self.inner.state.lock();
        if matches!(*state, EventState::Pending) {
            *state = EventState::Complete(outcome);
            self.inner.done.notify_all();
        }
    }

    /// Check whether the work has finished, successfully or not
    pub fn is_complete(&self) -> bool {
        matches!(*self.inner.state.lock(), EventState::Complete(_))
    }

    /// Block until the work has finished
    ///
    /// Returns the error raised by the work itself, if any.
    pub fn wait(&self) -> Result<()> {
        let mut state = self.inner.state.lock();
        loop {
            match &*state {
                EventState::Complete(outcome) => return outcome.clone(),
                EventState::Pending => self.inner.done.wait(&mut state),
            }
        }
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match &*self.inner.state.lock() {
            EventState::Pending => "pending",
            EventState::Complete(Ok(())) => "complete",
            EventState::Complete(Err(_)) => "failed",
        };
        f.debug_struct("Event").field("status", &status).finish()
    }
}
