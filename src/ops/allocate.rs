//! Buffer allocation by runtime dtype

use crate::buffer::Buffer;
use crate::dispatch::{DTypeOp, dispatch};
use crate::dtype::{DType, Element};
use crate::error::Result;
use crate::runtime::{Device, Runtime};

struct Allocate<'a, R: Runtime> {
    device: &'a R::Device,
    len: usize,
}

impl<R: Runtime> DTypeOp for Allocate<'_, R> {
    type Output = Result<Buffer<R>>;

    fn call<T: Element>(self) -> Result<Buffer<R>> {
        let buffer = Buffer::new(self.len, T::DTYPE, self.device)?;
        tracing::debug!(
            dtype = %T::DTYPE,
            len = self.len,
            bytes = buffer.size_in_bytes(),
            device = %self.device.name(),
            "allocated buffer"
        );
        Ok(buffer)
    }
}

/// Allocate a buffer of `len` elements of the type named by `dtype`
///
/// Contents are unspecified. Allocation failures (`OutOfMemory`) are
/// returned unchanged.
///
/// # Panics
/// If `dtype` is not a primitive type known to the registry.
#[track_caller]
pub fn allocate<R: Runtime>(device: &R::Device, dtype: DType, len: usize) -> Result<Buffer<R>> {
    dispatch(dtype, Allocate { device, len })
}
