//! Fill a buffer with one value

use crate::buffer::{Access, Buffer};
use crate::dispatch::{DeviceOp, ExecutionMode, execute};
use crate::dtype::Element;
use crate::error::Result;
use crate::runtime::{Event, Runtime, RuntimeClient};

struct Fill<R: Runtime> {
    dst: Buffer<R>,
    value: f64,
}

impl<R: Runtime> DeviceOp<R> for Fill<R> {
    const NAME: &'static str = "fill";

    fn submit<T: Element>(self, client: &R::Client) -> Result<Event> {
        let window = self.dst.as_typed::<T>()?.whole(Access::Write);
        let value = T::from_f64(self.value);

        let dst = self.dst;
        client.submit(Box::new(move || {
            // SAFETY: the window spans exactly `dst`, which this closure
            // keeps alive
            unsafe {
                R::fill_pattern(
                    window.ptr(),
                    bytemuck::bytes_of(&value),
                    window.len(),
                    dst.device(),
                )
            }
        }))
    }
}

/// Set every element of `dst` to `value`
///
/// `value` is converted with the element type's `as` conversion from `f64`
/// (see [`Element::from_f64`]); the narrowing is the caller's
/// responsibility and is not validated.
pub fn fill<R: Runtime>(
    client: &R::Client,
    dst: &Buffer<R>,
    value: f64,
    mode: ExecutionMode,
) -> Result<Option<Event>> {
    let op = Fill {
        dst: dst.clone(),
        value,
    };
    execute(client, dst.dtype(), op, mode)
}
