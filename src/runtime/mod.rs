//! Runtime backends for buffer operations
//!
//! This module defines the `Runtime` trait (backend memory primitives), the
//! `RuntimeClient` trait (the device queue), and provides a CPU
//! implementation.
//!
//! # Architecture
//!
//! ```text
//! Runtime (backend identity, static memory primitives)
//! ├── Device (identifies a specific GPU/CPU)
//! └── Client (device queue: submit work, hand back an Event)
//! ```

mod event;
pub mod traits;

#[cfg(feature = "cpu")]
pub mod cpu;

pub use event::Event;
pub use traits::{Device, Runtime, RuntimeClient, Work};
