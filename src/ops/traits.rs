//! Buffer operations trait.

use crate::buffer::Buffer;
use crate::dispatch::ExecutionMode;
use crate::dtype::{DType, Element};
use crate::error::Result;
use crate::runtime::{Event, Runtime};

/// Buffer operations
///
/// Implemented by every runtime client; each method delegates to the
/// generic function of the same name in [`crate::ops`].
pub trait BufferOps<R: Runtime> {
    /// Allocate `len` elements of `dtype` on this client's device
    fn allocate(&self, dtype: DType, len: usize) -> Result<Buffer<R>>;

    /// Copy `count` elements from `src[src_offset..]` to `dst[dst_offset..]`
    ///
    /// # Example
    ///
    /// ```ignore
    /// client.copy(&dst, 90, &src, 0, 10, ExecutionMode::Blocking)?;
    /// ```
    fn copy(
        &self,
        dst: &Buffer<R>,
        dst_offset: usize,
        src: &Buffer<R>,
        src_offset: usize,
        count: usize,
        mode: ExecutionMode,
    ) -> Result<Option<Event>>;

    /// Copy `count` elements from a host byte array into `dst[dst_offset..]`
    fn copy_from_host(
        &self,
        dst: &Buffer<R>,
        dst_offset: usize,
        src: &[u8],
        src_offset: usize,
        count: usize,
        mode: ExecutionMode,
    ) -> Result<Option<Event>>;

    /// Copy a typed host slice into `dst[dst_offset..]`
    fn write_slice<T: Element>(
        &self,
        dst: &Buffer<R>,
        dst_offset: usize,
        data: &[T],
        mode: ExecutionMode,
    ) -> Result<Option<Event>>;

    /// Set every element of `dst` to `value`
    fn fill(&self, dst: &Buffer<R>, value: f64, mode: ExecutionMode) -> Result<Option<Event>>;

    /// Read every element of `src` back to the host
    fn read_to_vec<T: Element>(&self, src: &Buffer<R>) -> Result<Vec<T>>;

    /// Read every element of `src` back to the host as `f64`
    fn read_as_f64(&self, src: &Buffer<R>) -> Result<Vec<f64>>;
}
