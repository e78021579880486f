//! Host array to device buffer copy

use crate::buffer::{Access, Buffer};
use crate::dispatch::{DeviceOp, ExecutionMode, execute};
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::runtime::{Event, Runtime, RuntimeClient};
use std::mem::size_of;

struct CopyFromHost<'h, R: Runtime> {
    dst: Buffer<R>,
    dst_offset: usize,
    src: &'h [u8],
    src_offset: usize,
    count: usize,
}

impl<R: Runtime> DeviceOp<R> for CopyFromHost<'_, R> {
    const NAME: &'static str = "copy_from_host";

    fn submit<T: Element>(self, client: &R::Client) -> Result<Event> {
        let dst_window = self
            .dst
            .as_typed::<T>()?
            .window(self.dst_offset, self.count, Access::Write)?;

        let elem = size_of::<T>();
        let available = self.src.len() / elem;
        let end = match self.src_offset.checked_add(self.count) {
            Some(end) if end <= available => end,
            _ => return Err(Error::out_of_range(self.src_offset, self.count, available)),
        };

        // Staged so the host array may be reused as soon as this returns
        let mut staged = vec![T::zero(); self.count];
        bytemuck::cast_slice_mut::<T, u8>(staged.as_mut_slice())
            .copy_from_slice(&self.src[self.src_offset * elem..end * elem]);

        let dst = self.dst;
        client.submit(Box::new(move || {
            // SAFETY: the window was range-checked against `dst`, which this
            // closure keeps alive
            unsafe {
                R::copy_to_device(
                    bytemuck::cast_slice(staged.as_slice()),
                    dst_window.ptr(),
                    dst.device(),
                )
            }
        }))
    }
}

/// Copy `count` elements from a host byte array into `dst[dst_offset..]`
///
/// The bytes are read as elements of the destination's dtype; `src_offset`
/// counts elements, not bytes. Fails with `OutOfRange` if the destination
/// range does not fit, or if `src` holds fewer than `src_offset + count`
/// whole elements.
pub fn copy_from_host<R: Runtime>(
    client: &R::Client,
    dst: &Buffer<R>,
    dst_offset: usize,
    src: &[u8],
    src_offset: usize,
    count: usize,
    mode: ExecutionMode,
) -> Result<Option<Event>> {
    let op = CopyFromHost {
        dst: dst.clone(),
        dst_offset,
        src,
        src_offset,
        count,
    };
    execute(client, dst.dtype(), op, mode)
}

/// Copy a typed host slice into `dst[dst_offset..]`
///
/// Fails with `DTypeMismatch` unless `T` is the destination's dtype.
pub fn write_slice<T: Element, R: Runtime>(
    client: &R::Client,
    dst: &Buffer<R>,
    dst_offset: usize,
    data: &[T],
    mode: ExecutionMode,
) -> Result<Option<Event>> {
    if T::DTYPE != dst.dtype() {
        return Err(Error::dtype_mismatch(dst.dtype(), T::DTYPE));
    }
    copy_from_host(
        client,
        dst,
        dst_offset,
        bytemuck::cast_slice(data),
        0,
        data.len(),
        mode,
    )
}
