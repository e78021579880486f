//! Typed views and access windows over a [`Buffer`]

use super::Buffer;
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::runtime::Runtime;
use std::marker::PhantomData;
use std::mem::size_of;

/// How submitted work touches a window
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Access {
    /// Contents are only read
    Read,
    /// Contents are overwritten without being read
    Write,
    /// Contents are read and written
    ReadWrite,
}

/// A buffer whose element type has been checked to be `T`
///
/// Obtained from [`Buffer::as_typed`].
#[derive(Debug)]
pub struct TypedView<'a, T: Element, R: Runtime> {
    buffer: &'a Buffer<R>,
    _marker: PhantomData<T>,
}

impl<'a, T: Element, R: Runtime> TypedView<'a, T, R> {
    pub(super) fn new(buffer: &'a Buffer<R>) -> Self {
        Self {
            buffer,
            _marker: PhantomData,
        }
    }

    /// Number of `T` elements in the buffer
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The type-erased buffer behind this view
    #[inline]
    pub fn buffer(&self) -> &'a Buffer<R> {
        self.buffer
    }

    /// Acquire a window over elements `[offset, offset + count)`
    ///
    /// Fails with `OutOfRange` if the range does not fit in the buffer.
    pub fn window(&self, offset: usize, count: usize, access: Access) -> Result<Window<T>> {
        let len = self.len();
        match offset.checked_add(count) {
            Some(end) if end <= len => {}
            _ => return Err(Error::out_of_range(offset, count, len)),
        }

        let ptr = if count == 0 {
            0
        } else {
            self.buffer.ptr() + (offset * size_of::<T>()) as u64
        };

        Ok(Window {
            ptr,
            offset,
            len: count,
            access,
            _marker: PhantomData,
        })
    }

    /// Window spanning every element of the buffer
    pub fn whole(&self, access: Access) -> Window<T> {
        Window {
            ptr: self.buffer.ptr(),
            offset: 0,
            len: self.len(),
            access,
            _marker: PhantomData,
        }
    }
}

/// A range-checked run of `T` elements inside a buffer
///
/// Carries a raw device address, so whoever submits work over a window must
/// also keep its [`Buffer`] alive until that work completes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window<T> {
    ptr: u64,
    offset: usize,
    len: usize,
    access: Access,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Window<T> {
    /// Device address of the first element (0 for an empty window)
    #[inline]
    pub fn ptr(&self) -> u64 {
        self.ptr
    }

    /// Element offset of the window inside its buffer
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the window is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Declared access mode
    #[inline]
    pub fn access(&self) -> Access {
        self.access
    }

    /// Size of the window in bytes
    #[inline]
    pub fn size_in_bytes(&self) -> usize {
        self.len * size_of::<T>()
    }
}

#[cfg(all(test, feature = "cpu"))]
mod tests {
    use super::*;
    use crate::dtype::DType;
    use crate::runtime::cpu::{CpuDevice, CpuRuntime};

    fn buffer(len: usize) -> Buffer<CpuRuntime> {
        Buffer::new(len, DType::F64, &CpuDevice::new()).unwrap()
    }

    #[test]
    fn test_window_address_and_len() {
        let buffer = buffer(10);
        let view = buffer.as_typed::<f64>().unwrap();

        let window = view.window(3, 4, Access::Read).unwrap();
        assert_eq!(window.ptr(), buffer.ptr() + 24);
        assert_eq!(window.offset(), 3);
        assert_eq!(window.len(), 4);
        assert_eq!(window.size_in_bytes(), 32);
        assert_eq!(window.access(), Access::Read);
    }

    #[test]
    fn test_window_at_end_is_allowed() {
        let buffer = buffer(10);
        let view = buffer.as_typed::<f64>().unwrap();
        assert_eq!(view.window(6, 4, Access::Write).unwrap().len(), 4);
        assert!(view.window(10, 0, Access::Write).unwrap().is_empty());
    }

    #[test]
    fn test_window_out_of_range() {
        let buffer = buffer(10);
        let view = buffer.as_typed::<f64>().unwrap();
        assert_eq!(
            view.window(8, 3, Access::Read),
            Err(Error::out_of_range(8, 3, 10))
        );
        assert_eq!(
            view.window(usize::MAX, 2, Access::Read),
            Err(Error::out_of_range(usize::MAX, 2, 10))
        );
    }

    #[test]
    fn test_whole_window() {
        let buffer = buffer(5);
        let window = buffer.as_typed::<f64>().unwrap().whole(Access::ReadWrite);
        assert_eq!(window.len(), 5);
        assert_eq!(window.ptr(), buffer.ptr());
    }
}
