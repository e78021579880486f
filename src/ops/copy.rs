//! Device-to-device buffer copy

use crate::buffer::{Access, Buffer};
use crate::dispatch::{DeviceOp, ExecutionMode, execute};
use crate::dtype::Element;
use crate::error::Result;
use crate::runtime::{Event, Runtime, RuntimeClient};

struct CopyBuffer<R: Runtime> {
    dst: Buffer<R>,
    dst_offset: usize,
    src: Buffer<R>,
    src_offset: usize,
    count: usize,
}

impl<R: Runtime> DeviceOp<R> for CopyBuffer<R> {
    const NAME: &'static str = "copy";

    fn submit<T: Element>(self, client: &R::Client) -> Result<Event> {
        let src_window = self
            .src
            .as_typed::<T>()?
            .window(self.src_offset, self.count, Access::Read)?;
        let dst_window = self
            .dst
            .as_typed::<T>()?
            .window(self.dst_offset, self.count, Access::Write)?;

        let (src, dst) = (self.src, self.dst);
        client.submit(Box::new(move || {
            // SAFETY: both windows were range-checked against buffers that
            // this closure keeps alive
            let copied = unsafe {
                R::copy_within_device(
                    src_window.ptr(),
                    dst_window.ptr(),
                    dst_window.size_in_bytes(),
                    dst.device(),
                )
            };
            drop(src);
            copied
        }))
    }
}

/// Copy `count` elements from `src[src_offset..]` to `dst[dst_offset..]`
///
/// Specialized on the destination's dtype. Fails before anything is
/// submitted with `DTypeMismatch` if `src` holds a different dtype, or
/// `OutOfRange` if either range does not fit its buffer. The two ranges may
/// overlap when `src` and `dst` share an allocation.
///
/// Returns the completion handle in [`ExecutionMode::NonBlocking`].
pub fn copy<R: Runtime>(
    client: &R::Client,
    dst: &Buffer<R>,
    dst_offset: usize,
    src: &Buffer<R>,
    src_offset: usize,
    count: usize,
    mode: ExecutionMode,
) -> Result<Option<Event>> {
    let op = CopyBuffer {
        dst: dst.clone(),
        dst_offset,
        src: src.clone(),
        src_offset,
        count,
    };
    execute(client, dst.dtype(), op, mode)
}
