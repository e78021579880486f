//! Dispatch for operations that submit device work
//!
//! Device operations produce an [`Event`] instead of a plain value. They go
//! through the same type matching as [`dispatch`]; the two named entry points
//! only differ in whether the caller waits:
//!
//! - [`dispatch_blocking`] waits for the submitted work and returns `()`
//! - [`dispatch_async`] returns the [`Event`] without waiting
//!
//! [`execute`] picks one of the two from an [`ExecutionMode`].

use super::{DTypeOp, dispatch};
use crate::dtype::{DType, Element};
use crate::error::Result;
use crate::runtime::{Event, Runtime, RuntimeClient};
use std::marker::PhantomData;

/// An operation that submits device work for a resolved element type
pub trait DeviceOp<R: Runtime> {
    /// Short operation name used in diagnostics
    const NAME: &'static str;

    /// Submit the work specialized for `T` and return its completion handle
    fn submit<T: Element>(self, client: &R::Client) -> Result<Event>;
}

/// Whether a buffer operation waits for its device work
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// Wait until the device work has completed (default)
    #[default]
    Blocking,
    /// Return the completion handle immediately
    ///
    /// The caller must wait on the returned [`Event`] before relying on the
    /// new buffer contents.
    NonBlocking,
}

// Adapts a DeviceOp to the device-less dispatcher so the type list is walked
// by exactly one implementation.
struct Submit<'c, R: Runtime, O> {
    client: &'c R::Client,
    op: O,
    _runtime: PhantomData<R>,
}

impl<R: Runtime, O: DeviceOp<R>> DTypeOp for Submit<'_, R, O> {
    type Output = Result<Event>;

    fn call<T: Element>(self) -> Result<Event> {
        self.op.submit::<T>(self.client)
    }
}

/// Dispatch a device operation and return its completion handle
///
/// On a client without asynchronous capability the returned handle is
/// already complete.
///
/// # Panics
/// If `dtype` is not a primitive type known to the registry.
#[track_caller]
pub fn dispatch_async<R: Runtime, O: DeviceOp<R>>(
    client: &R::Client,
    dtype: DType,
    op: O,
) -> Result<Event> {
    dispatch(
        dtype,
        Submit {
            client,
            op,
            _runtime: PhantomData,
        },
    )
}

/// Dispatch a device operation and wait for it to complete
///
/// # Panics
/// If `dtype` is not a primitive type known to the registry.
#[track_caller]
pub fn dispatch_blocking<R: Runtime, O: DeviceOp<R>>(
    client: &R::Client,
    dtype: DType,
    op: O,
) -> Result<()> {
    dispatch_async(client, dtype, op)?.wait()
}

/// Dispatch a device operation in the requested mode
///
/// Returns `None` in [`ExecutionMode::Blocking`] (the work has completed),
/// `Some(event)` in [`ExecutionMode::NonBlocking`].
#[track_caller]
pub fn execute<R: Runtime, O: DeviceOp<R>>(
    client: &R::Client,
    dtype: DType,
    op: O,
    mode: ExecutionMode,
) -> Result<Option<Event>> {
    tracing::debug!(op = O::NAME, dtype = %dtype, ?mode, runtime = R::name(), "submitting");
    match mode {
        ExecutionMode::Blocking => dispatch_blocking(client, dtype, op).map(|()| None),
        ExecutionMode::NonBlocking => {
            if !client.supports_async() {
                tracing::warn!(
                    op = O::NAME,
                    "non-blocking request on a queue without async support; work ran inline"
                );
            }
            dispatch_async(client, dtype, op).map(Some)
        }
    }
}

#[cfg(all(test, feature = "cpu"))]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU8, Ordering};

    // Records the dtype it was specialized for from inside the queued work
    struct RecordDType(Arc<AtomicU8>);

    impl DeviceOp<CpuRuntime> for RecordDType {
        const NAME: &'static str = "record";

        fn submit<T: Element>(self, client: &CpuClient) -> Result<Event> {
            let slot = self.0;
            client.submit(Box::new(move || {
                slot.store(T::DTYPE as u8, Ordering::SeqCst);
                Ok(())
            }))
        }
    }

    struct Failing;

    impl DeviceOp<CpuRuntime> for Failing {
        const NAME: &'static str = "failing";

        fn submit<T: Element>(self, client: &CpuClient) -> Result<Event> {
            client.submit(Box::new(|| Err(Error::Backend("device lost".into()))))
        }
    }

    #[test]
    fn test_dispatch_blocking_runs_specialized_work() {
        let client = CpuClient::new(CpuDevice::new());
        let slot = Arc::new(AtomicU8::new(u8::MAX));
        dispatch_blocking(&client, DType::U32, RecordDType(Arc::clone(&slot))).unwrap();
        assert_eq!(DType::from_u8(slot.load(Ordering::SeqCst)), Some(DType::U32));
    }

    #[test]
    fn test_dispatch_async_returns_handle() {
        let client = CpuClient::new(CpuDevice::new());
        let slot = Arc::new(AtomicU8::new(u8::MAX));
        let event = dispatch_async(&client, DType::I8, RecordDType(Arc::clone(&slot))).unwrap();
        event.wait().unwrap();
        assert_eq!(DType::from_u8(slot.load(Ordering::SeqCst)), Some(DType::I8));
    }

    #[test]
    fn test_execute_modes() {
        let client = CpuClient::new(CpuDevice::new());
        let slot = Arc::new(AtomicU8::new(u8::MAX));

        let blocking = execute(
            &client,
            DType::F64,
            RecordDType(Arc::clone(&slot)),
            ExecutionMode::Blocking,
        )
        .unwrap();
        assert!(blocking.is_none());

        let event = execute(
            &client,
            DType::F32,
            RecordDType(Arc::clone(&slot)),
            ExecutionMode::NonBlocking,
        )
        .unwrap()
        .expect("non-blocking mode returns a handle");
        event.wait().unwrap();
        assert_eq!(DType::from_u8(slot.load(Ordering::SeqCst)), Some(DType::F32));
    }

    #[test]
    fn test_non_blocking_without_async_support_returns_completed_handle() {
        let client = CpuClient::inline(CpuDevice::new());
        let slot = Arc::new(AtomicU8::new(u8::MAX));
        let event = execute(
            &client,
            DType::I16,
            RecordDType(Arc::clone(&slot)),
            ExecutionMode::NonBlocking,
        )
        .unwrap()
        .unwrap();
        assert!(event.is_complete());
        assert_eq!(DType::from_u8(slot.load(Ordering::SeqCst)), Some(DType::I16));
    }

    #[test]
    fn test_work_failure_propagates_in_blocking_mode() {
        let client = CpuClient::new(CpuDevice::new());
        assert_eq!(
            dispatch_blocking(&client, DType::U8, Failing),
            Err(Error::Backend("device lost".into()))
        );
    }

    #[test]
    fn test_default_mode_is_blocking() {
        assert_eq!(ExecutionMode::default(), ExecutionMode::Blocking);
    }
}
