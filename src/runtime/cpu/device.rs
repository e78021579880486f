//! The host as a device

use crate::runtime::Device;

/// Host memory, seen as the only device of [`CpuRuntime`](super::CpuRuntime)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CpuDevice {
    index: usize,
}

impl CpuDevice {
    /// The host device
    pub fn new() -> Self {
        Self::default()
    }
}

impl Device for CpuDevice {
    fn id(&self) -> usize {
        self.index
    }

    fn name(&self) -> String {
        "cpu".into()
    }
}
