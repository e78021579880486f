//! Device-to-host readback

use crate::buffer::{Access, Buffer};
use crate::dispatch::{DTypeOp, dispatch};
use crate::dtype::Element;
use crate::error::Result;
use crate::runtime::{Runtime, RuntimeClient};
use parking_lot::Mutex;
use std::sync::Arc;

/// Copy every element of `src` to a host vector
///
/// The readback is queued behind all work already submitted on `client` and
/// waited for, so it observes every earlier write issued through that
/// client, including non-blocking ones whose events were never awaited.
/// Fails with `DTypeMismatch` unless `T` is the buffer's dtype.
pub fn read_to_vec<T: Element, R: Runtime>(client: &R::Client, src: &Buffer<R>) -> Result<Vec<T>> {
    let window = src.as_typed::<T>()?.whole(Access::Read);
    let host = Arc::new(Mutex::new(vec![T::zero(); window.len()]));

    let sink = Arc::clone(&host);
    let buffer = src.clone();
    client
        .submit(Box::new(move || {
            let mut out = sink.lock();
            // SAFETY: the window spans exactly `buffer`, which this closure
            // keeps alive
            unsafe {
                R::copy_from_device(
                    window.ptr(),
                    bytemuck::cast_slice_mut(out.as_mut_slice()),
                    buffer.device(),
                )
            }
        }))?
        .wait()?;

    let data = std::mem::take(&mut *host.lock());
    Ok(data)
}

struct ReadAsF64<'a, R: Runtime> {
    client: &'a R::Client,
    src: &'a Buffer<R>,
}

impl<R: Runtime> DTypeOp for ReadAsF64<'_, R> {
    type Output = Result<Vec<f64>>;

    fn call<T: Element>(self) -> Result<Vec<f64>> {
        let data = read_to_vec::<T, R>(self.client, self.src)?;
        Ok(data.into_iter().map(Element::to_f64).collect())
    }
}

/// Copy every element of `src` to the host, widened to `f64`
///
/// Works for any dtype; 64-bit integers beyond 2^53 lose precision.
pub fn read_as_f64<R: Runtime>(client: &R::Client, src: &Buffer<R>) -> Result<Vec<f64>> {
    dispatch(src.dtype(), ReadAsF64 { client, src })
}
