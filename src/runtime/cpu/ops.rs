//! BufferOps implementation for the CPU runtime

use super::{CpuClient, CpuRuntime};
use crate::buffer::Buffer;
use crate::dispatch::ExecutionMode;
use crate::dtype::{DType, Element};
use crate::error::Result;
use crate::ops::{self, BufferOps};
use crate::runtime::{Event, RuntimeClient};

type CpuBuffer = Buffer<CpuRuntime>;

impl BufferOps<CpuRuntime> for CpuClient {
    fn allocate(&self, dtype: DType, len: usize) -> Result<CpuBuffer> {
        ops::allocate(self.device(), dtype, len)
    }

    fn copy(
        &self,
        dst: &CpuBuffer,
        dst_offset: usize,
        src: &CpuBuffer,
        src_offset: usize,
        count: usize,
        mode: ExecutionMode,
    ) -> Result<Option<Event>> {
        ops::copy(self, dst, dst_offset, src, src_offset, count, mode)
    }

    fn copy_from_host(
        &self,
        dst: &CpuBuffer,
        dst_offset: usize,
        src: &[u8],
        src_offset: usize,
        count: usize,
        mode: ExecutionMode,
    ) -> Result<Option<Event>> {
        ops::copy_from_host(self, dst, dst_offset, src, src_offset, count, mode)
    }

    fn write_slice<T: Element>(
        &self,
        dst: &CpuBuffer,
        dst_offset: usize,
        data: &[T],
        mode: ExecutionMode,
    ) -> Result<Option<Event>> {
        ops::write_slice(self, dst, dst_offset, data, mode)
    }

    fn fill(&self, dst: &CpuBuffer, value: f64, mode: ExecutionMode) -> Result<Option<Event>> {
        ops::fill(self, dst, value, mode)
    }

    fn read_to_vec<T: Element>(&self, src: &CpuBuffer) -> Result<Vec<T>> {
        ops::read_to_vec(self, src)
    }

    fn read_as_f64(&self, src: &CpuBuffer) -> Result<Vec<f64>> {
        ops::read_as_f64(self, src)
    }
}
