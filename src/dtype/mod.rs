//! Data type registry for numdispatch buffers
//!
//! This module provides the `DType` enum naming every supported element type,
//! the [`Element`] trait that ties a Rust type to its `DType`, and
//! [`dtype_of`], the registry lookup used by every dispatch call site.

mod element;

pub use element::{Element, FloatElement};

use std::fmt;

// ============================================================================
// DType Enum
// ============================================================================

/// Element types supported by numdispatch buffers
///
/// This is the runtime type tag carried by every [`Buffer`](crate::buffer::Buffer).
/// Callers hold a `DType` instead of a type parameter when the element type is
/// chosen at runtime (from configuration, or inferred from input data).
///
/// # Discriminant Values (Serialization Stability)
///
/// The discriminant values are **stable** for serialization purposes:
/// - Floats: 0-9 (F64=0, F32=1)
/// - Signed ints: 10-19 (I64=10, I32=11, I16=12, I8=13)
/// - Unsigned ints: 20-29 (U64=20, U32=21, U16=22, U8=23)
///
/// Existing values are NEVER changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DType {
    // Floating point types (0-9)
    /// 64-bit floating point
    F64 = 0,
    /// 32-bit floating point (most common)
    F32 = 1,

    // Integer types
    /// 64-bit signed integer
    I64 = 10,
    /// 32-bit signed integer
    I32 = 11,
    /// 16-bit signed integer
    I16 = 12,
    /// 8-bit signed integer
    I8 = 13,

    // Unsigned integer types
    /// 64-bit unsigned integer
    U64 = 20,
    /// 32-bit unsigned integer
    U32 = 21,
    /// 16-bit unsigned integer
    U16 = 22,
    /// 8-bit unsigned integer
    U8 = 23,
}

impl DType {
    /// Recover a tag from its stable discriminant
    ///
    /// Returns `None` for bytes that the registry never issued.
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::F64),
            1 => Some(Self::F32),
            10 => Some(Self::I64),
            11 => Some(Self::I32),
            12 => Some(Self::I16),
            13 => Some(Self::I8),
            20 => Some(Self::U64),
            21 => Some(Self::U32),
            22 => Some(Self::U16),
            23 => Some(Self::U8),
            _ => None,
        }
    }

    /// Size of one element in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::F64 | Self::I64 | Self::U64 => 8,
            Self::F32 | Self::I32 | Self::U32 => 4,
            Self::I16 | Self::U16 => 2,
            Self::I8 | Self::U8 => 1,
        }
    }

    /// Returns true if this is a floating point type
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F64 | Self::F32)
    }

    /// Returns true if this is a signed integer type
    #[inline]
    pub const fn is_signed_int(self) -> bool {
        matches!(self, Self::I64 | Self::I32 | Self::I16 | Self::I8)
    }

    /// Returns true if this is an unsigned integer type
    #[inline]
    pub const fn is_unsigned_int(self) -> bool {
        matches!(self, Self::U64 | Self::U32 | Self::U16 | Self::U8)
    }

    /// Returns true if this is any integer type (signed or unsigned)
    #[inline]
    pub const fn is_int(self) -> bool {
        self.is_signed_int() || self.is_unsigned_int()
    }

    /// Short name for display (e.g., "f32", "i64")
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
            Self::I64 => "i64",
            Self::I32 => "i32",
            Self::I16 => "i16",
            Self::I8 => "i8",
            Self::U64 => "u64",
            Self::U32 => "u32",
            Self::U16 => "u16",
            Self::U8 => "u8",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Registry lookup: the runtime tag of a concrete element type
///
/// Only types implementing [`Element`] are accepted, so asking for the tag of
/// an unsupported type is a compile error rather than a runtime fault.
///
/// ```
/// use numdispatch::dtype::{DType, dtype_of};
///
/// assert_eq!(dtype_of::<f32>(), DType::F32);
/// assert_ne!(dtype_of::<u32>(), dtype_of::<i32>());
/// ```
#[inline]
pub const fn dtype_of<T: Element>() -> DType {
    T::DTYPE
}

/// Set of dtypes for efficient membership testing
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DTypeSet {
    bits: u32,
}

impl DTypeSet {
    /// All floating point types
    pub const FLOATS: Self = Self {
        bits: (1 << DType::F64 as u8) | (1 << DType::F32 as u8),
    };

    /// All signed integer types
    pub const SIGNED_INTS: Self = Self {
        bits: (1 << DType::I64 as u8)
            | (1 << DType::I32 as u8)
            | (1 << DType::I16 as u8)
            | (1 << DType::I8 as u8),
    };

    /// All unsigned integer types
    pub const UNSIGNED_INTS: Self = Self {
        bits: (1 << DType::U64 as u8)
            | (1 << DType::U32 as u8)
            | (1 << DType::U16 as u8)
            | (1 << DType::U8 as u8),
    };

    /// All integer types
    pub const INTS: Self = Self {
        bits: Self::SIGNED_INTS.bits | Self::UNSIGNED_INTS.bits,
    };

    /// Every primitive type (floats + ints)
    pub const PRIMITIVE: Self = Self {
        bits: Self::FLOATS.bits | Self::INTS.bits,
    };

    /// Check if the set contains a dtype
    #[inline]
    pub const fn contains(self, dtype: DType) -> bool {
        self.bits & (1 << dtype as u8) != 0
    }

    /// Intersection of two sets
    #[inline]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Check if set is empty
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Number of dtypes in the set
    #[inline]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }
}
