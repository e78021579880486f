//! CPU client: the device queue of the CPU runtime

use super::device::CpuDevice;
use super::queue::{self, WorkQueue};
use super::runtime::CpuRuntime;
use crate::error::Result;
use crate::runtime::{Device, Event, RuntimeClient, Work};
use std::fmt;
use std::sync::Arc;

/// CPU client for submitting buffer work
///
/// Clones share the same queue. The worker thread is joined when the last
/// clone is dropped.
#[derive(Clone)]
pub struct CpuClient {
    pub(crate) device: CpuDevice,
    queue: Option<Arc<WorkQueue>>,
}

impl CpuClient {
    /// Create a client backed by an asynchronous in-order queue
    ///
    /// If the worker thread cannot be started the client degrades to inline
    /// execution; [`supports_async`](RuntimeClient::supports_async) reports
    /// which one you got.
    pub fn new(device: CpuDevice) -> Self {
        let queue = match WorkQueue::spawn(&format!("numdispatch-{}-queue", device.name())) {
            Ok(queue) => Some(Arc::new(queue)),
            Err(err) => {
                tracing::warn!(error = %err, "falling back to inline execution");
                None
            }
        };
        Self { device, queue }
    }

    /// Create a client that runs every submission on the calling thread
    pub fn inline(device: CpuDevice) -> Self {
        Self {
            device,
            queue: None,
        }
    }
}

impl RuntimeClient<CpuRuntime> for CpuClient {
    fn device(&self) -> &CpuDevice {
        &self.device
    }

    fn supports_async(&self) -> bool {
        self.queue.is_some()
    }

    fn submit(&self, work: Work) -> Result<Event> {
        match &self.queue {
            Some(queue) => queue.push(work),
            None => Ok(match queue::run(work) {
                Ok(()) => Event::completed(),
                Err(err) => Event::failed(err),
            }),
        }
    }
}

impl fmt::Debug for CpuClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CpuClient")
            .field("device", &self.device)
            .field("async", &self.queue.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_inline_client_completes_before_returning() {
        let client = CpuClient::inline(CpuDevice::new());
        assert!(!client.supports_async());

        let event = client.submit(Box::new(|| Ok(()))).unwrap();
        assert!(event.is_complete());
    }

    #[test]
    fn test_inline_client_reports_work_error_through_event() {
        let client = CpuClient::inline(CpuDevice::new());
        let event = client
            .submit(Box::new(|| Err(Error::Backend("bad".into()))))
            .unwrap();
        assert_eq!(event.wait(), Err(Error::Backend("bad".into())));
    }

    #[test]
    fn test_panicking_work_fails_the_event_on_both_clients() {
        for client in [
            CpuClient::inline(CpuDevice::new()),
            CpuClient::new(CpuDevice::new()),
        ] {
            let event = client.submit(Box::new(|| panic!("kernel bug"))).unwrap();
            assert!(matches!(event.wait(), Err(Error::Backend(_))));
        }
    }

    #[test]
    fn test_last_clone_dropped_by_queued_work() {
        let client = CpuClient::new(CpuDevice::new());
        let (release, gate) = std::sync::mpsc::channel::<()>();

        let captured = client.clone();
        let event = client
            .submit(Box::new(move || {
                gate.recv().map_err(|_| Error::QueueClosed)?;
                drop(captured);
                Ok(())
            }))
            .unwrap();

        drop(client);
        release.send(()).unwrap();
        assert_eq!(event.wait(), Ok(()));
    }

    #[test]
    fn test_queued_client_synchronize() {
        let client = CpuClient::new(CpuDevice::new());
        assert!(client.supports_async());
        client.submit(Box::new(|| Ok(()))).unwrap();
        client.synchronize().unwrap();
    }

    #[test]
    fn test_worker_thread_named_after_device() {
        let client = CpuClient::new(CpuDevice::new());
        let name = Arc::new(parking_lot::Mutex::new(None));

        let slot = Arc::clone(&name);
        client
            .submit(Box::new(move || {
                *slot.lock() = std::thread::current().name().map(String::from);
                Ok(())
            }))
            .unwrap()
            .wait()
            .unwrap();
        assert_eq!(name.lock().as_deref(), Some("numdispatch-cpu-queue"));
    }

    #[test]
    fn test_clones_share_queue() {
        let client = CpuClient::new(CpuDevice::new());
        let other = client.clone();
        drop(client);
        let event = other.submit(Box::new(|| Ok(()))).unwrap();
        assert_eq!(event.wait(), Ok(()));
    }
}
