//! Core trait for compute backends

use crate::error::Result;

/// Core trait for compute backends
///
/// `Runtime` abstracts over different compute devices (CPU, GPU, etc.).
/// It uses static dispatch via generics for zero-cost abstraction.
///
/// The memory primitives here are untyped and synchronous; they are what
/// queued [`Work`](super::Work) calls once a buffer operation has resolved
/// its element type.
///
/// # Example
///
/// ```ignore
/// let device = CpuRuntime::default_device();
/// let ptr = CpuRuntime::allocate(1024, &device)?;
/// // ... use memory ...
/// CpuRuntime::deallocate(ptr, 1024, &device);
/// ```
pub trait Runtime: Clone + Send + Sync + 'static {
    /// Device identifier type
    type Device: super::Device;

    /// Client (device queue) for submitting work
    type Client: super::RuntimeClient<Self>;

    /// Human-readable name of this runtime
    fn name() -> &'static str;

    /// Allocate device memory
    ///
    /// Returns a device pointer (u64) that can be used for operations.
    /// Returns `Err(OutOfMemory)` if allocation fails.
    fn allocate(size_bytes: usize, device: &Self::Device) -> Result<u64>;

    /// Deallocate device memory
    fn deallocate(ptr: u64, size_bytes: usize, device: &Self::Device);

    /// Copy data from host to device
    ///
    /// # Safety
    /// `dst` must address at least `src.len()` bytes of live device memory.
    unsafe fn copy_to_device(src: &[u8], dst: u64, device: &Self::Device) -> Result<()>;

    /// Copy data from device to host
    ///
    /// # Safety
    /// `src` must address at least `dst.len()` bytes of live device memory.
    unsafe fn copy_from_device(src: u64, dst: &mut [u8], device: &Self::Device) -> Result<()>;

    /// Copy data within device (device to device)
    ///
    /// Source and destination may overlap.
    ///
    /// # Safety
    /// `src` and `dst` must each address at least `size_bytes` bytes of live
    /// device memory.
    unsafe fn copy_within_device(
        src: u64,
        dst: u64,
        size_bytes: usize,
        device: &Self::Device,
    ) -> Result<()>;

    /// Write `pattern` to `count` consecutive slots starting at `dst`
    ///
    /// `pattern` is the byte image of a single element.
    ///
    /// # Safety
    /// `dst` must address at least `pattern.len() * count` bytes of live
    /// device memory.
    unsafe fn fill_pattern(
        dst: u64,
        pattern: &[u8],
        count: usize,
        device: &Self::Device,
    ) -> Result<()>;

    /// Get the default device
    fn default_device() -> Self::Device;

    /// Get the default client for a device
    fn default_client(device: &Self::Device) -> Self::Client;
}
