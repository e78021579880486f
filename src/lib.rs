//! # numdispatch
//!
//! **Runtime dtype dispatch and device buffer operations for numeric kernels.**
//!
//! Numeric code often holds buffers whose element type is only known at
//! runtime: picked by configuration, inferred from input data, or passed
//! across module boundaries as a type-erased handle. numdispatch bridges
//! that runtime [`DType`](dtype::DType) to monomorphic code paths, with no
//! trait objects over element types, and layers allocate / copy / fill
//! operations for host or device memory on top of it.
//!
//! ## Layers
//!
//! - **dtype**: the registry. Ten primitive element types, each with a
//!   stable runtime tag (`Element::DTYPE`).
//! - **dispatch**: runtime tag to compile-time type. [`dispatch::dispatch`]
//!   walks the primitive type list, [`dispatch::float_dispatch`] the float
//!   list. An unknown tag is a programming error and panics.
//! - **buffer**: [`Buffer`](buffer::Buffer), an Arc-shared, type-erased
//!   allocation that unwraps into checked typed views.
//! - **runtime**: backends. A client is a device queue that hands back an
//!   [`Event`](runtime::Event) per submission.
//! - **ops**: allocate, copy, copy from host, fill, label, readback.
//!
//! ## Quick Start
//!
//! ```rust
//! use numdispatch::prelude::*;
//!
//! # fn main() -> numdispatch::error::Result<()> {
//! let device = CpuDevice::new();
//! let client = CpuRuntime::default_client(&device);
//!
//! let dtype = dtype_of::<f32>();
//! let src = client.allocate(dtype, 100)?;
//! client.fill(&src, 3.5, ExecutionMode::Blocking)?;
//! assert_eq!(ops::label(dtype), "f32");
//!
//! let dst = client.allocate(dtype, 100)?;
//! client.copy(&dst, 90, &src, 0, 10, ExecutionMode::Blocking)?;
//!
//! let values: Vec<f32> = client.read_to_vec(&dst)?;
//! assert!(values[90..].iter().all(|&v| v == 3.5));
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `cpu` (default): CPU backend

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod buffer;
pub mod dispatch;
pub mod dtype;
pub mod error;
pub mod ops;
pub mod runtime;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::buffer::Buffer;
    pub use crate::dispatch::{DTypeOp, ExecutionMode, FloatOp, dispatch, float_dispatch};
    pub use crate::dtype::{DType, Element, FloatElement, dtype_of};
    pub use crate::error::{Error, Result};
    pub use crate::ops::{self, BufferOps};
    pub use crate::runtime::{Device, Event, Runtime, RuntimeClient};

    #[cfg(feature = "cpu")]
    pub use crate::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime};
}

/// Default runtime based on enabled features
#[cfg(feature = "cpu")]
pub type DefaultRuntime = runtime::cpu::CpuRuntime;
