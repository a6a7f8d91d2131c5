//! HyperLSH core: approximate nearest-neighbor search over dense `f64`
//! vectors with random-hyperplane Locality-Sensitive Hashing.
//!
//! Vectors are bucketed by the sign pattern of random projections, one
//! bucket map per embedding. A query collects the members of the buckets its
//! own signatures hit, deduplicates them, re-scores them exactly by cosine
//! similarity and returns the best `k`.
//!
//! ```
//! use hyperlsh_core::{LshConfig, LshIndex};
//!
//! let vectors = vec![
//!     (1, vec![1.0, 0.1, 0.0]),
//!     (2, vec![0.9, 0.2, 0.1]),
//!     (3, vec![-1.0, 0.0, 0.3]),
//! ];
//! let index = LshIndex::new(vectors, &LshConfig::new(4, 2).with_seed(7)).unwrap();
//! let neighbors = index.ann(&[1.0, 0.1, 0.0], 1).unwrap();
//! assert_eq!(neighbors.hits[0].id, 1);
//! ```

pub mod config;
pub mod error;
pub mod index;
pub mod random;

/// A dense vector; every vector in one index has the same length.
pub type Vector = Vec<f64>;

pub use config::LshConfig;
pub use error::{LshError, Result};
pub use index::embedding::{Embedding, EmbeddingTable};
pub use index::lsh::{deduplicate, min_similarity, sort_hits, BucketStats, Hit, LshIndex, Neighbors};
pub use index::signature::Signature;
pub use index::VectorIndex;
pub use random::{FixedSequence, GaussianSource, RandomSource};
