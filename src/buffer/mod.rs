//! Buffer: type-erased device memory with Arc-based sharing
//!
//! A [`Buffer`] is the universal handle passed between modules: it knows
//! its element type only as a runtime [`DType`]. Once the concrete type is
//! known (usually inside a dispatched operation) it can be unwrapped into a
//! [`TypedView`] and from there into checked [`Window`]s.

mod view;

pub use view::{Access, TypedView, Window};

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::runtime::Runtime;
use std::sync::Arc;

/// Type-erased buffer on a device
///
/// Clones share the underlying allocation. Memory is deallocated when the
/// last reference is dropped.
///
/// # Concurrent access
///
/// Nothing serializes work on the contents. Work submitted through one
/// client runs in order, but two clients each own a queue. Overlapping
/// writes, or a write and a read, issued through different clients may run
/// at the same time and race. Wait on the earlier [`Event`](crate::runtime::Event)
/// before submitting conflicting work elsewhere.
pub struct Buffer<R: Runtime> {
    inner: Arc<BufferInner<R>>,
}

struct BufferInner<R: Runtime> {
    /// Raw device pointer (GPU address or CPU ptr cast to u64)
    ptr: u64,
    /// Number of elements (not bytes)
    len: usize,
    /// Element type
    dtype: DType,
    /// Device where memory is allocated
    device: R::Device,
}

impl<R: Runtime> Buffer<R> {
    /// Allocate a buffer of `len` elements of type `dtype`
    ///
    /// Contents are unspecified. Fails with `OutOfMemory` if the byte size
    /// overflows or the runtime cannot satisfy the request.
    pub fn new(len: usize, dtype: DType, device: &R::Device) -> Result<Self> {
        let size_bytes = len
            .checked_mul(dtype.size_in_bytes())
            .ok_or(Error::OutOfMemory { size: usize::MAX })?;
        let ptr = R::allocate(size_bytes, device)?;

        Ok(Self::from_parts(ptr, len, dtype, device))
    }

    /// Create a buffer holding a copy of `data`
    ///
    /// The dtype is inferred from the Element type.
    pub fn from_slice<T: Element>(data: &[T], device: &R::Device) -> Result<Self> {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        let ptr = R::allocate(bytes.len(), device)?;
        let buffer = Self::from_parts(ptr, data.len(), T::DTYPE, device);

        // SAFETY: `ptr` was just allocated with exactly `bytes.len()` bytes
        unsafe { R::copy_to_device(bytes, ptr, device)? };

        Ok(buffer)
    }

    fn from_parts(ptr: u64, len: usize, dtype: DType, device: &R::Device) -> Self {
        Self {
            inner: Arc::new(BufferInner {
                ptr,
                len,
                dtype,
                device: device.clone(),
            }),
        }
    }

    /// Get the raw device pointer
    #[inline]
    pub fn ptr(&self) -> u64 {
        self.inner.ptr
    }

    /// Get the number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len
    }

    /// Check if buffer is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.len == 0
    }

    /// Get the element type
    #[inline]
    pub fn dtype(&self) -> DType {
        self.inner.dtype
    }

    /// Get the device
    #[inline]
    pub fn device(&self) -> &R::Device {
        &self.inner.device
    }

    /// Get size in bytes
    #[inline]
    pub fn size_in_bytes(&self) -> usize {
        self.inner.len * self.inner.dtype.size_in_bytes()
    }

    /// Get the reference count
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check if this is the only reference
    #[inline]
    pub fn is_unique(&self) -> bool {
        Arc::strong_count(&self.inner) == 1
    }

    /// Check if two handles share the same allocation
    #[inline]
    pub fn same_allocation(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Unwrap into a typed view
    ///
    /// Fails with `DTypeMismatch` unless `T` is the buffer's element type.
    pub fn as_typed<T: Element>(&self) -> Result<TypedView<'_, T, R>> {
        if T::DTYPE != self.dtype() {
            return Err(Error::dtype_mismatch(T::DTYPE, self.dtype()));
        }
        Ok(TypedView::new(self))
    }
}

impl<R: Runtime> Clone for Buffer<R> {
    /// Clone increments the reference count (zero-copy)
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Runtime> Drop for BufferInner<R> {
    fn drop(&mut self) {
        if self.ptr != 0 {
            tracing::trace!(dtype = %self.dtype, len = self.len, "releasing buffer");
            R::deallocate(
                self.ptr,
                self.len * self.dtype.size_in_bytes(),
                &self.device,
            );
        }
    }
}

impl<R: Runtime> std::fmt::Debug for Buffer<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("ptr", &format!("0x{:x}", self.inner.ptr))
            .field("len", &self.inner.len)
            .field("dtype", &self.inner.dtype)
            .field("refs", &Arc::strong_count(&self.inner))
            .finish()
    }
}
