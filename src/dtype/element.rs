//! Element trait for mapping Rust types to DType

use super::DType;
use bytemuck::{Pod, Zeroable};
use std::fmt::Debug;

/// Trait for types that can be elements of a buffer
///
/// This trait connects Rust's type system to numdispatch's runtime dtype
/// system. It is implemented for exactly the ten primitive numeric types;
/// those implementations are the type registry.
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - values move freely onto queue threads
/// - `Pod + Zeroable` - safe memory transmutation (bytemuck)
/// - `PartialEq + Debug` - assertions in tests and diagnostics
pub trait Element:
    Copy + Send + Sync + Pod + Zeroable + PartialEq + PartialOrd + Debug + 'static
{
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Convert to f64 for generic numeric operations
    fn to_f64(self) -> f64;

    /// Convert from f64 to this type
    ///
    /// Follows Rust's `as` conversion: float-to-int truncates toward zero and
    /// saturates at the type bounds, NaN becomes 0, f64-to-f32 rounds to
    /// nearest.
    fn from_f64(v: f64) -> Self;

    /// Zero value
    fn zero() -> Self {
        Self::zeroed()
    }
}

/// Floating point elements, the domain of float-only dispatch
pub trait FloatElement: Element {
    /// Precision key used to select precision-specific resources
    const PRECISION_KEY: &'static str;
}

macro_rules! impl_element {
    ($($ty:ty => $dtype:ident),+ $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$dtype;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(v: f64) -> Self {
                    v as $ty
                }
            }
        )+
    };
}

impl_element! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

impl FloatElement for f32 {
    const PRECISION_KEY: &'static str = "f32";
}

impl FloatElement for f64 {
    const PRECISION_KEY: &'static str = "f64";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_f64_truncates_toward_zero() {
        assert_eq!(i32::from_f64(3.9), 3);
        assert_eq!(i32::from_f64(-3.9), -3);
        assert_eq!(u8::from_f64(3.5), 3);
    }

    #[test]
    fn test_from_f64_saturates() {
        assert_eq!(u8::from_f64(-1.0), 0);
        assert_eq!(u8::from_f64(300.0), u8::MAX);
        assert_eq!(i8::from_f64(-1e9), i8::MIN);
        assert_eq!(i64::from_f64(f64::NAN), 0);
        assert_eq!(f32::from_f64(f64::MAX), f32::INFINITY);
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(7u16.to_f64(), 7.0);
        assert_eq!((-2i8).to_f64(), -2.0);
        assert_eq!(0.5f32.to_f64(), 0.5);
    }

    #[test]
    fn test_zero() {
        assert_eq!(u64::zero(), 0);
        assert_eq!(f64::zero(), 0.0);
    }

    #[test]
    fn test_precision_keys() {
        assert_eq!(f32::PRECISION_KEY, "f32");
        assert_eq!(f64::PRECISION_KEY, "f64");
    }
}
