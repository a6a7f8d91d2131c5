use super::simd::{self, SimdFunc};
use crate::error::{LshError, Result};
use std::sync::OnceLock;

fn kernel() -> SimdFunc {
    static KERNEL: OnceLock<SimdFunc> = OnceLock::new();
    *KERNEL.get_or_init(simd::get_vector_kernel)
}

/// Dot product (sum of elementwise products).
///
/// Callers guarantee equal lengths; only the common prefix is read when they
/// differ, so a mismatch never reads out of bounds.
#[inline]
pub fn dot(v1: &[f64], v2: &[f64]) -> f64 {
    debug_assert_eq!(v1.len(), v2.len(), "dot product of unequal lengths");
    let n = v1.len().min(v2.len());
    // SAFETY: both slices hold at least `n` elements.
    unsafe { kernel()(v1.as_ptr(), v2.as_ptr(), n) }
}

/// Cosine similarity, `dot(v1, v2) / sqrt(|v1|^2 * |v2|^2)`.
/// Range: [-1.0, 1.0]
///
/// # Errors
/// `DimensionMismatch` when the lengths differ, `NotANumber` when either
/// vector has zero magnitude.
pub fn cosine(v1: &[f64], v2: &[f64]) -> Result<f64> {
    if v1.len() != v2.len() {
        return Err(LshError::DimensionMismatch {
            expected: v1.len(),
            actual: v2.len(),
        });
    }

    let dot_product = dot(v1, v2);
    let sum1 = dot(v1, v1);
    let sum2 = dot(v2, v2);

    let similarity = dot_product / (sum1 * sum2).sqrt();
    if similarity.is_nan() {
        return Err(LshError::NotANumber);
    }

    Ok(similarity)
}
