//! Runtime dtype dispatch
//!
//! This is the single place where a runtime [`DType`] becomes a compile-time
//! element type. An operation is a small value type implementing [`DTypeOp`]
//! (or [`FloatOp`] for float-only operations); the dispatcher walks a fixed
//! [`TypeList`] in order and calls the operation monomorphized for the first
//! type whose tag equals the runtime tag.
//!
//! # Usage
//!
//! ```
//! use numdispatch::dispatch::{DTypeOp, dispatch};
//! use numdispatch::dtype::{DType, Element};
//!
//! struct ElementSize;
//!
//! impl DTypeOp for ElementSize {
//!     type Output = usize;
//!
//!     fn call<T: Element>(self) -> usize {
//!         std::mem::size_of::<T>()
//!     }
//! }
//!
//! assert_eq!(dispatch(DType::I16, ElementSize), 2);
//! ```
//!
//! # Unknown types
//!
//! A tag that is not in the dispatched list is a contract violation (an
//! integer tag handed to [`float_dispatch`], or a tag that never came from
//! the registry). The dispatcher panics with an `unknown type` diagnostic;
//! it never no-ops and never falls back to a neighbouring type.
//!
//! Operations that submit device work go through [`device`], which reuses
//! the same matching logic.

pub mod device;

pub use device::{DeviceOp, ExecutionMode, dispatch_async, dispatch_blocking, execute};

use crate::dtype::{DType, Element, FloatElement};
use std::fmt;

/// An operation that can run for any primitive element type
pub trait DTypeOp {
    /// Value produced by the operation
    type Output;

    /// Run the operation specialized for `T`
    fn call<T: Element>(self) -> Self::Output;
}

/// An operation that is only defined for floating point element types
pub trait FloatOp {
    /// Value produced by the operation
    type Output;

    /// Run the operation specialized for `T`
    fn call<T: FloatElement>(self) -> Self::Output;
}

/// Ordered, closed list of dtypes a dispatch walks
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TypeList {
    name: &'static str,
    dtypes: &'static [DType],
}

impl TypeList {
    /// Human-readable name of the list
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Dtypes in dispatch order
    #[inline]
    pub const fn dtypes(&self) -> &'static [DType] {
        self.dtypes
    }

    /// Number of dtypes in the list
    #[inline]
    pub const fn len(&self) -> usize {
        self.dtypes.len()
    }

    /// Check if the list is empty
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.dtypes.is_empty()
    }

    /// Check if `dtype` is in the list
    pub fn contains(&self, dtype: DType) -> bool {
        self.dtypes.contains(&dtype)
    }
}

impl fmt::Display for TypeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Every supported element type, in dispatch order
pub const PRIMITIVE_TYPES: TypeList = TypeList {
    name: "primitive",
    dtypes: &[
        DType::I8,
        DType::I16,
        DType::I32,
        DType::I64,
        DType::U8,
        DType::U16,
        DType::U32,
        DType::U64,
        DType::F32,
        DType::F64,
    ],
};

/// Floating point element types, in dispatch order
pub const FLOAT_TYPES: TypeList = TypeList {
    name: "float",
    dtypes: &[DType::F32, DType::F64],
};

// Emits one exact-match test per listed type, in order. Each arm moves
// `$op` and returns, so at most one arm runs.
macro_rules! match_type_list {
    ($dtype:expr, $op:ident, [$($T:ty),+ $(,)?]) => {
        $(
            if $dtype == <$T as Element>::DTYPE {
                tracing::trace!(dtype = %$dtype, "dispatch resolved");
                return $op.call::<$T>();
            }
        )+
    };
}

/// Invoke `op` specialized for the primitive type whose tag is `dtype`
///
/// Walks [`PRIMITIVE_TYPES`] in order.
///
/// # Panics
/// If `dtype` is not in [`PRIMITIVE_TYPES`].
#[inline]
#[track_caller]
pub fn dispatch<O: DTypeOp>(dtype: DType, op: O) -> O::Output {
    match_type_list!(dtype, op, [i8, i16, i32, i64, u8, u16, u32, u64, f32, f64]);
    unknown_type(dtype, PRIMITIVE_TYPES)
}

/// Invoke `op` specialized for the float type whose tag is `dtype`
///
/// Walks [`FLOAT_TYPES`] in order.
///
/// # Panics
/// If `dtype` is not a floating point type.
#[inline]
#[track_caller]
pub fn float_dispatch<O: FloatOp>(dtype: DType, op: O) -> O::Output {
    match_type_list!(dtype, op, [f32, f64]);
    unknown_type(dtype, FLOAT_TYPES)
}

#[cold]
#[inline(never)]
#[track_caller]
fn unknown_type(dtype: DType, list: TypeList) -> ! {
    tracing::error!(dtype = %dtype, list = list.name(), "unknown type in dispatch");
    panic!("unknown type: {dtype} is not in the {list} type list")
}
