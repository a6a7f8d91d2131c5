//! Random-hyperplane embeddings.
//!
//! An [`Embedding`] is one LSH hash function: `d` random normals through the
//! origin. Two vectors at angle θ land on the same side of a random hyperplane
//! with probability `1 - θ/π`, so the Hamming distance between signatures
//! tracks angular distance (Charikar 2002).

use super::distance::dot;
use super::signature::Signature;
use crate::error::{LshError, Result};
use crate::random::RandomSource;

#[derive(Debug, Clone)]
pub struct Embedding {
    normals: Vec<Vec<f64>>,
    dimension: usize,
}

impl Embedding {
    /// Draws `hyperplanes` normals of length `dimension` from `source`,
    /// one hyperplane after another.
    pub fn new<R: RandomSource + ?Sized>(
        hyperplanes: usize,
        dimension: usize,
        source: &mut R,
    ) -> Self {
        let normals = (0..hyperplanes)
            .map(|_| (0..dimension).map(|_| source.draw()).collect())
            .collect();
        Self { normals, dimension }
    }

    /// Builds an embedding from explicit hyperplane normals.
    ///
    /// # Errors
    /// `DimensionMismatch` if the normals differ in length.
    pub fn from_normals(normals: Vec<Vec<f64>>) -> Result<Self> {
        let dimension = normals.first().map_or(0, Vec::len);
        if let Some(bad) = normals.iter().find(|n| n.len() != dimension) {
            return Err(LshError::DimensionMismatch {
                expected: dimension,
                actual: bad.len(),
            });
        }
        Ok(Self { normals, dimension })
    }

    /// Maps `vector` to its signature: bit `i` is set iff the vector lies
    /// strictly on the positive side of hyperplane `i`. A dot product of
    /// exactly zero leaves the bit clear.
    ///
    /// `vector` must have `self.dimension()` components.
    pub fn embed(&self, vector: &[f64]) -> Signature {
        debug_assert_eq!(vector.len(), self.dimension);
        self.normals
            .iter()
            .map(|normal| dot(vector, normal) > 0.0)
            .collect()
    }

    /// Number of hyperplanes, i.e. signature width.
    pub fn hyperplanes(&self) -> usize {
        self.normals.len()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn normals(&self) -> &[Vec<f64>] {
        &self.normals
    }
}

/// Independent embeddings queried together to raise recall.
///
/// The position of an embedding in the table namespaces its signatures:
/// equal signatures from different embeddings never share a bucket.
#[derive(Debug, Clone)]
pub struct EmbeddingTable {
    embeddings: Vec<Embedding>,
}

impl EmbeddingTable {
    pub fn new<R: RandomSource + ?Sized>(
        count: usize,
        hyperplanes: usize,
        dimension: usize,
        source: &mut R,
    ) -> Self {
        let embeddings = (0..count)
            .map(|_| Embedding::new(hyperplanes, dimension, &mut *source))
            .collect();
        Self { embeddings }
    }

    /// Signature of `vector` under every embedding, tagged with the
    /// embedding's index.
    pub fn signatures<'a>(
        &'a self,
        vector: &'a [f64],
    ) -> impl Iterator<Item = (usize, Signature)> + 'a {
        self.embeddings
            .iter()
            .enumerate()
            .map(move |(i, embedding)| (i, embedding.embed(vector)))
    }

    pub fn get(&self, index: usize) -> Option<&Embedding> {
        self.embeddings.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Embedding> {
        self.embeddings.iter()
    }

    pub fn len(&self) -> usize {
        self.embeddings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.embeddings.is_empty()
    }
}
