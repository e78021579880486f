//! Trait for runtime clients: the device queue

use super::Runtime;
use crate::error::Result;
use crate::runtime::Event;

/// One unit of device work
///
/// Built by a buffer operation after its element type is resolved, so the
/// closure body is already monomorphic. It owns everything it touches.
pub type Work = Box<dyn FnOnce() -> Result<()> + Send + 'static>;

/// Trait for runtime clients that execute device work
///
/// A client owns a queue. Work is executed in submission order.
pub trait RuntimeClient<R: Runtime>: Clone + Send + Sync {
    /// Get the device this client operates on
    fn device(&self) -> &R::Device;

    /// Whether [`submit`](Self::submit) can return before the work has run
    ///
    /// Clients without asynchronous capability run work inline and hand back
    /// an already-completed [`Event`].
    fn supports_async(&self) -> bool;

    /// Enqueue work and return its completion handle
    ///
    /// Returns `Err(QueueClosed)` if the queue no longer accepts work. Errors
    /// raised by the work itself are reported through the returned `Event`.
    ///
    /// Ordering holds only within this client's queue. Work that touches the
    /// same buffer region from another client is not serialized against it.
    fn submit(&self, work: Work) -> Result<Event>;

    /// Synchronize: wait for all work submitted so far to complete
    fn synchronize(&self) -> Result<()> {
        self.submit(Box::new(|| Ok(())))?.wait()
    }
}
