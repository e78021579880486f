//! CPU runtime implementation

use super::client::CpuClient;
use super::device::CpuDevice;
use crate::error::{Error, Result};
use crate::runtime::Runtime;
use std::alloc::{Layout as AllocLayout, alloc_zeroed, dealloc};

// AVX-512 alignment
const ALIGN: usize = 64;

/// CPU compute runtime
///
/// This is the default runtime that works on any platform.
/// Memory is allocated on the heap using the system allocator.
#[derive(Clone, Debug, Default)]
pub struct CpuRuntime;

impl Runtime for CpuRuntime {
    type Device = CpuDevice;
    type Client = CpuClient;

    fn name() -> &'static str {
        "cpu"
    }

    fn allocate(size_bytes: usize, _device: &Self::Device) -> Result<u64> {
        if size_bytes == 0 {
            return Ok(0);
        }

        let layout = AllocLayout::from_size_align(size_bytes, ALIGN)
            .map_err(|_| Error::OutOfMemory { size: size_bytes })?;

        let ptr = unsafe { alloc_zeroed(layout) };
        if ptr.is_null() {
            return Err(Error::OutOfMemory { size: size_bytes });
        }

        Ok(ptr as u64)
    }

    fn deallocate(ptr: u64, size_bytes: usize, _device: &Self::Device) {
        if ptr == 0 || size_bytes == 0 {
            return;
        }

        // Same size/align as a successful allocate, so this cannot fail
        if let Ok(layout) = AllocLayout::from_size_align(size_bytes, ALIGN) {
            unsafe {
                dealloc(ptr as *mut u8, layout);
            }
        }
    }

    unsafe fn copy_to_device(src: &[u8], dst: u64, _device: &Self::Device) -> Result<()> {
        if src.is_empty() || dst == 0 {
            return Ok(());
        }

        unsafe {
            std::ptr::copy_nonoverlapping(src.as_ptr(), dst as *mut u8, src.len());
        }
        Ok(())
    }

    unsafe fn copy_from_device(src: u64, dst: &mut [u8], _device: &Self::Device) -> Result<()> {
        if dst.is_empty() || src == 0 {
            return Ok(());
        }

        unsafe {
            std::ptr::copy_nonoverlapping(src as *const u8, dst.as_mut_ptr(), dst.len());
        }
        Ok(())
    }

    unsafe fn copy_within_device(
        src: u64,
        dst: u64,
        size_bytes: usize,
        _device: &Self::Device,
    ) -> Result<()> {
        if size_bytes == 0 || src == 0 || dst == 0 {
            return Ok(());
        }

        unsafe {
            // Use copy (not copy_nonoverlapping) in case src and dst overlap
            std::ptr::copy(src as *const u8, dst as *mut u8, size_bytes);
        }
        Ok(())
    }

    unsafe fn fill_pattern(
        dst: u64,
        pattern: &[u8],
        count: usize,
        _device: &Self::Device,
    ) -> Result<()> {
        if pattern.is_empty() || count == 0 || dst == 0 {
            return Ok(());
        }

        let out = unsafe { std::slice::from_raw_parts_mut(dst as *mut u8, pattern.len() * count) };
        for slot in out.chunks_exact_mut(pattern.len()) {
            slot.copy_from_slice(pattern);
        }
        Ok(())
    }

    fn default_device() -> Self::Device {
        CpuDevice::new()
    }

    fn default_client(device: &Self::Device) -> Self::Client {
        CpuClient::new(device.clone())
    }
}
