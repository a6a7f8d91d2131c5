use crate::error::{LshError, Result};

/// Construction parameters for an [`LshIndex`](crate::LshIndex).
///
/// # Tuning
/// More embeddings raise recall at the cost of a larger candidate fan-out.
/// More hyperplanes per embedding shrink the buckets: fewer, more precise
/// candidates, lower recall.
#[derive(Debug, Clone, PartialEq)]
pub struct LshConfig {
    /// Number of independent hash tables.
    pub num_embeddings: usize,
    /// Hyperplanes per embedding, i.e. signature width in bits.
    pub hyperplanes: usize,
    /// Bucket every embedding on its own thread during construction.
    pub parallel_build: bool,
    /// Seed for the normal generator used by `LshIndex::new`.
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for LshConfig {
    fn default() -> Self {
        Self {
            num_embeddings: 3,
            hyperplanes: 18,
            parallel_build: true,
            seed: None,
        }
    }
}

impl LshConfig {
    pub fn new(num_embeddings: usize, hyperplanes: usize) -> Self {
        Self {
            num_embeddings,
            hyperplanes,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel_build(mut self, parallel: bool) -> Self {
        self.parallel_build = parallel;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_embeddings == 0 {
            return Err(LshError::InvalidParameter(
                "num_embeddings must be at least 1".to_string(),
            ));
        }
        if self.hyperplanes == 0 {
            return Err(LshError::InvalidParameter(
                "hyperplanes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
