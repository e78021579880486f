//! Common test utilities
#![allow(dead_code)]

use numdispatch::dtype::DType;
use numdispatch::ops;
use numdispatch::prelude::*;

/// Create a queued (asynchronous) CPU client and its device
pub fn create_cpu_client() -> (CpuClient, CpuDevice) {
    let device = CpuDevice::new();
    let client = CpuRuntime::default_client(&device);
    (client, device)
}

/// Create a CPU client that executes work inline
pub fn create_inline_client() -> (CpuClient, CpuDevice) {
    let device = CpuDevice::new();
    let client = CpuClient::inline(device.clone());
    (client, device)
}

/// Allocate a buffer and give every element a distinct value (its index + 1)
pub fn iota_buffer(client: &CpuClient, dtype: DType, len: usize) -> Buffer<CpuRuntime> {
    let buffer = client.allocate(dtype, len).unwrap();
    let values: Vec<f64> = (1..=len).map(|i| (i % 100) as f64).collect();
    write_f64(client, &buffer, &values);
    buffer
}

/// Write `values` (converted to the buffer's dtype) starting at element 0
pub fn write_f64(client: &CpuClient, buffer: &Buffer<CpuRuntime>, values: &[f64]) {
    struct Write<'a> {
        client: &'a CpuClient,
        buffer: &'a Buffer<CpuRuntime>,
        values: &'a [f64],
    }

    impl DTypeOp for Write<'_> {
        type Output = ();

        fn call<T: Element>(self) {
            let typed: Vec<T> = self.values.iter().map(|&v| T::from_f64(v)).collect();
            self.client
                .write_slice(self.buffer, 0, &typed, ExecutionMode::Blocking)
                .unwrap();
        }
    }

    dispatch(
        buffer.dtype(),
        Write {
            client,
            buffer,
            values,
        },
    );
}

/// Read a buffer back as f64
pub fn read_f64(client: &CpuClient, buffer: &Buffer<CpuRuntime>) -> Vec<f64> {
    ops::read_as_f64(client, buffer).unwrap()
}

/// Install a fmt subscriber once so debug events show up in test output
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
