pub mod distance;
pub mod embedding;
pub mod lsh;
pub mod signature;
pub mod simd;

use crate::error::Result;

/// Read-only nearest-neighbor search by cosine similarity.
pub trait VectorIndex {
    fn dimension(&self) -> usize;
    /// Up to `top_k` `(id, similarity)` pairs, best first.
    fn search(&self, query: &[f64], top_k: usize) -> Result<Vec<(u64, f64)>>;
}
