#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Function pointer signature for the dot product kernels.
pub type SimdFunc = unsafe fn(*const f64, *const f64, usize) -> f64;

/// The reference implementation.
///
/// # Safety
/// `a` and `b` must both be valid for `n` reads.
pub unsafe fn scalar_dot(a: *const f64, b: *const f64, n: usize) -> f64 {
    let mut acc = 0.0f64;
    for i in 0..n {
        acc += (*a.add(i)) * (*b.add(i));
    }
    acc
}

/// AVX2 kernel: four 256-bit accumulators of four doubles each, fused multiply-add.
///
/// # Safety
/// `a` and `b` must both be valid for `n` reads, and the CPU must support
/// AVX2 and FMA.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2", enable = "fma")]
pub unsafe fn avx2_dot(a: *const f64, b: *const f64, n: usize) -> f64 {
    let mut acc0 = _mm256_setzero_pd();
    let mut acc1 = _mm256_setzero_pd();
    let mut acc2 = _mm256_setzero_pd();
    let mut acc3 = _mm256_setzero_pd();

    let mut i = 0;
    while i + 16 <= n {
        acc0 = _mm256_fmadd_pd(_mm256_loadu_pd(a.add(i)), _mm256_loadu_pd(b.add(i)), acc0);
        acc1 = _mm256_fmadd_pd(_mm256_loadu_pd(a.add(i + 4)), _mm256_loadu_pd(b.add(i + 4)), acc1);
        acc2 = _mm256_fmadd_pd(_mm256_loadu_pd(a.add(i + 8)), _mm256_loadu_pd(b.add(i + 8)), acc2);
        acc3 = _mm256_fmadd_pd(
            _mm256_loadu_pd(a.add(i + 12)),
            _mm256_loadu_pd(b.add(i + 12)),
            acc3,
        );
        i += 16;
    }

    while i + 4 <= n {
        acc0 = _mm256_fmadd_pd(_mm256_loadu_pd(a.add(i)), _mm256_loadu_pd(b.add(i)), acc0);
        i += 4;
    }

    acc0 = _mm256_add_pd(acc0, acc1);
    acc2 = _mm256_add_pd(acc2, acc3);
    acc0 = _mm256_add_pd(acc0, acc2);

    let mut lanes = [0.0f64; 4];
    _mm256_storeu_pd(lanes.as_mut_ptr(), acc0);
    let mut result = lanes.iter().sum::<f64>();

    // Tail (n % 4)
    while i < n {
        result += (*a.add(i)) * (*b.add(i));
        i += 1;
    }

    result
}

/// Picks the fastest kernel the running CPU supports.
pub fn get_vector_kernel() -> SimdFunc {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma") {
            return avx2_dot;
        }
    }

    scalar_dot
}
