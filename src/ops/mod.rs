//! Buffer operations
//!
//! Each operation captures its arguments in a small operation object and
//! hands it to the dispatcher together with the buffer's runtime dtype. The
//! object's specialized method is where the real work is built: typed
//! windows are acquired, arguments are checked, and the work is submitted to
//! the client's queue.
//!
//! ```text
//! allocate        DTypeOp   -> Buffer
//! copy            DeviceOp  -> Option<Event>
//! copy_from_host  DeviceOp  -> Option<Event>
//! fill            DeviceOp  -> Option<Event>
//! label           FloatOp   -> &'static str
//! read_as_f64     DTypeOp   -> Vec<f64>
//! ```
//!
//! The generic functions work for any [`Runtime`](crate::runtime::Runtime).
//! Backends also expose them as methods through [`BufferOps`].

mod allocate;
mod copy;
mod fill;
mod host_copy;
mod label;
mod read;
mod traits;

pub use crate::dispatch::ExecutionMode;
pub use allocate::allocate;
pub use copy::copy;
pub use fill::fill;
pub use host_copy::{copy_from_host, write_slice};
pub use label::label;
pub use read::{read_as_f64, read_to_vec};
pub use traits::BufferOps;
