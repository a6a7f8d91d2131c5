use hyperlsh_core::index::simd;
use hyperlsh_core::{Embedding, GaussianSource};
use std::time::Instant;

fn main() {
    let n = 200; // Dimension used by the recall benchmark
    let iterations = 5_000_000;

    let v1 = vec![1.2f64; n];
    let v2 = vec![0.8f64; n];

    // 1. Dot product kernels
    println!("Benchmarking scalar f64 dot product ({} iterations)...", iterations);
    let start_scalar = Instant::now();
    let mut sum_scalar = 0.0;
    for _ in 0..iterations {
        unsafe {
            sum_scalar += simd::scalar_dot(v1.as_ptr(), v2.as_ptr(), n);
        }
    }
    let duration_scalar = start_scalar.elapsed();
    println!("Scalar f64: {:?} (Dummy sum: {})", duration_scalar, sum_scalar);

    println!("Benchmarking dispatched f64 dot product...");
    let kernel = simd::get_vector_kernel();
    let start_kernel = Instant::now();
    let mut sum_kernel = 0.0;
    for _ in 0..iterations {
        unsafe {
            sum_kernel += kernel(v1.as_ptr(), v2.as_ptr(), n);
        }
    }
    let duration_kernel = start_kernel.elapsed();
    println!("Dispatched f64: {:?} (Dummy sum: {})", duration_kernel, sum_kernel);

    // 2. Signatures (one dot product per hyperplane)
    let hyperplanes = 18;
    let signatures = 200_000;
    let mut source = GaussianSource::seeded(1);
    let embedding = Embedding::new(hyperplanes, n, &mut source);

    println!("\nBenchmarking {}-bit signatures ({} vectors)...", hyperplanes, signatures);
    let start_embed = Instant::now();
    let mut ones = 0u64;
    for _ in 0..signatures {
        ones += embedding.embed(&v1).count_ones() as u64;
    }
    let duration_embed = start_embed.elapsed();
    println!(
        "Embed: {:?} ({:.0} ns/signature, Dummy popcount: {})",
        duration_embed,
        duration_embed.as_nanos() as f64 / signatures as f64,
        ones
    );

    println!(
        "\nSummary Speedup (dispatched vs scalar): {:.2}x",
        duration_scalar.as_secs_f64() / duration_kernel.as_secs_f64()
    );
}
