//! CPU runtime implementation
//!
//! The CPU runtime keeps buffers in aligned host memory. Its client owns an
//! in-order work queue served by a dedicated worker thread, so non-blocking
//! buffer operations really do return before the work has run. An inline
//! client that executes work on the caller's thread is available for call
//! sites (and tests) that want no queue at all.

mod client;
mod device;
mod ops;
mod queue;
mod runtime;

pub use client::CpuClient;
pub use device::CpuDevice;
pub use runtime::CpuRuntime;
