//! Precision labels for floating point dtypes

use crate::dispatch::{FloatOp, float_dispatch};
use crate::dtype::{DType, FloatElement};

struct PrecisionKey;

impl FloatOp for PrecisionKey {
    type Output = &'static str;

    fn call<T: FloatElement>(self) -> &'static str {
        T::PRECISION_KEY
    }
}

/// Canonical key of a floating point dtype (`"f32"` or `"f64"`)
///
/// Used to pick precision-specific resource variants.
///
/// # Panics
/// If `dtype` is not a floating point type.
#[track_caller]
pub fn label(dtype: DType) -> &'static str {
    float_dispatch(dtype, PrecisionKey)
}
