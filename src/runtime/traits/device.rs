//! Device identity

/// A memory space that buffers live in and a queue executes against
///
/// Buffers remember the device they were allocated on, and every memory
/// primitive of a [`Runtime`](super::Runtime) is addressed to one.
pub trait Device: Clone + Send + Sync + 'static {
    /// Index of this device within its runtime
    fn id(&self) -> usize;

    /// Label used in logs and worker thread names
    fn name(&self) -> String {
        format!("device{}", self.id())
    }

    /// Whether `other` addresses the same memory space
    fn is_same(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
