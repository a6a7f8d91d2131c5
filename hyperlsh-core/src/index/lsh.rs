use super::distance::cosine;
use super::embedding::{Embedding, EmbeddingTable};
use super::signature::Signature;
use super::VectorIndex;
use crate::config::LshConfig;
use crate::error::{LshError, Result};
use crate::random::{GaussianSource, RandomSource};
use crate::Vector;
use crossbeam_utils::thread;
use log::{debug, info, log_enabled, trace, warn, Level};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::time::Instant;

/// Buckets of one embedding: signature -> ids that hashed to it.
type BucketTable = HashMap<Signature, Vec<u64>>;

/// A scored query result, borrowing its vector from the index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit<'a> {
    pub id: u64,
    pub vector: &'a [f64],
    pub similarity: f64,
}

/// Ranked hits plus the raw (pre-dedup) candidate count for tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbors<'a> {
    pub hits: Vec<Hit<'a>>,
    pub candidates: usize,
}

/// Bucket occupancy across all tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketStats {
    pub tables: usize,
    pub buckets: usize,
    pub largest: usize,
    pub mean: f64,
}

/// Random-hyperplane LSH index ranked by cosine similarity.
///
/// # Layout
/// - `corpus`: id -> vector, ordered by id so bucket contents are reproducible.
/// - `embeddings`: `num_embeddings` independent hash functions.
/// - `tables`: one bucket map per embedding; the table position namespaces
///   the signature, so the effective bucket key is (embedding, signature).
///
/// # Thread Safety
/// Nothing mutates after construction. Share a built index by reference
/// across query threads; no locking is needed.
#[derive(Debug)]
pub struct LshIndex {
    corpus: BTreeMap<u64, Vector>,
    dimension: usize,
    embeddings: EmbeddingTable,
    tables: Vec<BucketTable>,
}

impl LshIndex {
    /// Builds an index with hyperplanes drawn from a standard normal
    /// generator, seeded from `config.seed` when set.
    pub fn new<I>(vectors: I, config: &LshConfig) -> Result<Self>
    where
        I: IntoIterator<Item = (u64, Vector)>,
    {
        let mut source = match config.seed {
            Some(seed) => GaussianSource::seeded(seed),
            None => GaussianSource::from_entropy(),
        };
        Self::with_source(vectors, config, &mut source)
    }

    /// Builds an index drawing hyperplanes from `source`.
    ///
    /// # Errors
    /// - `InvalidParameter` for a zero table/hyperplane count or zero-length vectors.
    /// - `DuplicateId` if `vectors` repeats an id.
    /// - `DimensionMismatch` if the vectors disagree on dimensionality.
    pub fn with_source<I, R>(vectors: I, config: &LshConfig, source: &mut R) -> Result<Self>
    where
        I: IntoIterator<Item = (u64, Vector)>,
        R: RandomSource + ?Sized,
    {
        config.validate()?;

        let mut corpus = BTreeMap::new();
        for (id, vector) in vectors {
            if corpus.insert(id, vector).is_some() {
                return Err(LshError::DuplicateId(id));
            }
        }

        let dimension = corpus.values().next().map_or(0, Vec::len);
        if !corpus.is_empty() && dimension == 0 {
            return Err(LshError::InvalidParameter(
                "vectors must have at least one component".to_string(),
            ));
        }
        if let Some(bad) = corpus.values().find(|v| v.len() != dimension) {
            return Err(LshError::DimensionMismatch {
                expected: dimension,
                actual: bad.len(),
            });
        }
        if corpus.is_empty() {
            warn!("Building LSH index over an empty corpus; every query will return no hits");
        }

        let start = Instant::now();
        let embeddings =
            EmbeddingTable::new(config.num_embeddings, config.hyperplanes, dimension, source);

        let tables = if config.parallel_build && embeddings.len() > 1 {
            bucket_parallel(&corpus, &embeddings)
        } else {
            embeddings.iter().map(|e| bucket(&corpus, e)).collect()
        };

        let index = Self {
            corpus,
            dimension,
            embeddings,
            tables,
        };

        info!(
            "LSH index built: {} vectors (dim {}), {} tables x {} hyperplanes in {:?}",
            index.len(),
            dimension,
            config.num_embeddings,
            config.hyperplanes,
            start.elapsed()
        );
        if log_enabled!(Level::Debug) {
            let stats = index.bucket_stats();
            debug!(
                "Bucket occupancy: {} buckets, largest {}, mean {:.2}",
                stats.buckets, stats.largest, stats.mean
            );
        }

        Ok(index)
    }

    /// Fetches the stored vector for `id`.
    pub fn vector(&self, id: u64) -> Option<&[f64]> {
        self.corpus.get(&id).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    /// Components per vector; 0 for an empty index.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    pub fn embeddings(&self) -> &EmbeddingTable {
        &self.embeddings
    }

    pub fn bucket_stats(&self) -> BucketStats {
        let buckets: usize = self.tables.iter().map(HashMap::len).sum();
        let largest = self
            .tables
            .iter()
            .flat_map(|t| t.values().map(Vec::len))
            .max()
            .unwrap_or(0);
        let members: usize = self
            .tables
            .iter()
            .flat_map(|t| t.values().map(Vec::len))
            .sum();
        let mean = if buckets == 0 { 0.0 } else { members as f64 / buckets as f64 };

        BucketStats {
            tables: self.tables.len(),
            buckets,
            largest,
            mean,
        }
    }

    /// Raw candidate ids for `query`: the members of every bucket its
    /// signatures land in, concatenated across embeddings. An id matched
    /// by several embeddings appears several times.
    ///
    /// # Errors
    /// `DimensionMismatch` if `query` has the wrong length for a non-empty index.
    pub fn candidates(&self, query: &[f64]) -> Result<Vec<u64>> {
        if self.is_empty() {
            return Ok(Vec::new());
        }
        self.check_dimension(query)?;

        let mut candidates = Vec::with_capacity(100);
        for (i, signature) in self.embeddings.signatures(query) {
            if let Some(ids) = self.tables[i].get(&signature) {
                trace!("Embedding {} signature {} -> {} ids", i, signature, ids.len());
                candidates.extend_from_slice(ids);
            }
        }
        Ok(candidates)
    }

    /// Scores `candidates` exactly against `query` and keeps the `k` best.
    ///
    /// Candidates are expected to be unique; duplicates would be scored and
    /// returned twice.
    ///
    /// # Errors
    /// The first scoring failure aborts the call: `UnknownId` for an id not in
    /// the corpus, `DimensionMismatch` or `NotANumber` from the similarity.
    pub fn knn(&self, query: &[f64], candidates: &[u64], k: usize) -> Result<Vec<Hit<'_>>> {
        let mut hits = self.score(query, candidates)?;
        sort_hits(&mut hits);
        hits.truncate(k);
        Ok(hits)
    }

    /// Approximate `k` nearest neighbors of `query` by cosine similarity.
    pub fn ann(&self, query: &[f64], k: usize) -> Result<Neighbors<'_>> {
        self.search_pipeline(query, k, None)
    }

    /// Like [`ann`](Self::ann), dropping every hit whose similarity is below
    /// `min_similarity`.
    ///
    /// # Errors
    /// `InvalidParameter` if `min_similarity` is NaN, plus the errors of `ann`.
    pub fn ann_with_min_similarity(
        &self,
        query: &[f64],
        k: usize,
        min_similarity: f64,
    ) -> Result<Neighbors<'_>> {
        self.search_pipeline(query, k, Some(min_similarity))
    }

    fn search_pipeline(
        &self,
        query: &[f64],
        k: usize,
        threshold: Option<f64>,
    ) -> Result<Neighbors<'_>> {
        if threshold.is_some_and(f64::is_nan) {
            return Err(LshError::InvalidParameter(
                "min_similarity must not be NaN".to_string(),
            ));
        }
        let raw = self.candidates(query)?;
        let unique = deduplicate(&raw);

        let mut hits = self.score(query, &unique)?;
        sort_hits(&mut hits);
        if let Some(t) = threshold {
            hits = min_similarity(hits, t);
        }
        hits.truncate(k);

        debug!(
            "ANN query: {} candidates, {} unique, {} hits (k={}, min={:?})",
            raw.len(),
            unique.len(),
            hits.len(),
            k,
            threshold
        );

        Ok(Neighbors {
            hits,
            candidates: raw.len(),
        })
    }

    fn score(&self, query: &[f64], candidates: &[u64]) -> Result<Vec<Hit<'_>>> {
        let mut hits = Vec::with_capacity(candidates.len());
        for &id in candidates {
            let vector = self.vector(id).ok_or(LshError::UnknownId(id))?;
            let similarity = cosine(query, vector).map_err(|e| {
                debug!("Scoring candidate {} failed: {}", id, e);
                e
            })?;
            hits.push(Hit {
                id,
                vector,
                similarity,
            });
        }
        Ok(hits)
    }

    fn check_dimension(&self, query: &[f64]) -> Result<()> {
        if query.len() != self.dimension {
            return Err(LshError::DimensionMismatch {
                expected: self.dimension,
                actual: query.len(),
            });
        }
        Ok(())
    }
}

impl VectorIndex for LshIndex {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn search(&self, query: &[f64], top_k: usize) -> Result<Vec<(u64, f64)>> {
        let neighbors = self.ann(query, top_k)?;
        Ok(neighbors.hits.iter().map(|h| (h.id, h.similarity)).collect())
    }
}

fn bucket(corpus: &BTreeMap<u64, Vector>, embedding: &Embedding) -> BucketTable {
    let mut table = BucketTable::new();
    for (&id, vector) in corpus {
        table.entry(embedding.embed(vector)).or_default().push(id);
    }
    table
}

/// One scoped thread per embedding. Each table is built exactly as the
/// sequential path builds it, so the result does not depend on scheduling.
fn bucket_parallel(
    corpus: &BTreeMap<u64, Vector>,
    embeddings: &EmbeddingTable,
) -> Vec<BucketTable> {
    let joined = thread::scope(|s| {
        let handles: Vec<_> = embeddings
            .iter()
            .map(|embedding| s.spawn(move |_| bucket(corpus, embedding)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join())
            .collect::<std::thread::Result<Vec<_>>>()
    })
    .and_then(|tables| tables);

    match joined {
        Ok(tables) => tables,
        Err(payload) => std::panic::resume_unwind(payload),
    }
}

/// Unique ids in first-seen order.
pub fn deduplicate(ids: &[u64]) -> Vec<u64> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

/// Stable sort by descending similarity.
pub fn sort_hits(hits: &mut [Hit<'_>]) {
    hits.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
}

/// Keeps the prefix of a descending-sorted hit list whose similarity is at
/// least `threshold`; everything from the first hit below it is dropped.
/// A NaN threshold keeps nothing.
pub fn min_similarity(mut hits: Vec<Hit<'_>>, threshold: f64) -> Vec<Hit<'_>> {
    let cut = hits
        .iter()
        .position(|h| threshold.is_nan() || h.similarity < threshold)
        .unwrap_or(hits.len());
    hits.truncate(cut);
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedSequence;
    use approx::assert_relative_eq;

    fn corpus() -> Vec<(u64, Vector)> {
        vec![
            (10, vec![-1.0, 0.0, 0.0]),
            (20, vec![0.0, 1.0, 0.0]),
            (30, vec![0.0, 0.0, 1.0]),
        ]
    }

    // Every hyperplane is [1, 2, 3].
    fn fixed_index(parallel: bool) -> LshIndex {
        let mut source = FixedSequence::new(vec![1.0, 2.0, 3.0]);
        let config = LshConfig::new(3, 2).with_parallel_build(parallel);
        LshIndex::with_source(corpus(), &config, &mut source).unwrap()
    }

    fn sorted(mut ids: Vec<u64>) -> Vec<u64> {
        ids.sort_unstable();
        ids
    }

    #[test]
    fn test_build() {
        let index = fixed_index(false);
        assert_eq!(index.len(), 3);
        assert_eq!(index.dimension(), 3);
        assert_eq!(index.embeddings().len(), 3);
        let first = index.embeddings().get(0).unwrap();
        assert_eq!(first.hyperplanes(), 2);
        assert_eq!(first.normals()[0], vec![1.0, 2.0, 3.0]);

        let stats = index.bucket_stats();
        assert_eq!(stats.tables, 3);
        // "00" holds id 10, "11" holds ids 20 and 30, in every table
        assert_eq!(stats.buckets, 6);
        assert_eq!(stats.largest, 2);
        assert_relative_eq!(stats.mean, 1.5);
    }

    #[test]
    fn test_vector_lookup() {
        let index = fixed_index(false);
        assert_eq!(index.vector(10), Some(&[-1.0, 0.0, 0.0][..]));
        assert_eq!(index.vector(99), None);
    }

    #[test]
    fn test_candidates() {
        let index = fixed_index(false);
        let raw = index.candidates(&[0.0, 0.0, 1.0]).unwrap();
        // 2 ids x 3 embeddings
        assert_eq!(raw.len(), 6);
        assert_eq!(sorted(deduplicate(&raw)), vec![20, 30]);
    }

    #[test]
    fn test_deduplicate() {
        let ids = [1, 2, 3, 1, 2, 3, 2, 3, 1];
        assert_eq!(deduplicate(&ids), vec![1, 2, 3]);
        assert!(deduplicate(&[]).is_empty());
    }

    #[test]
    fn test_sort_hits() {
        let vec = [-1.0, 0.0, 0.0];
        let mut hits = vec![
            Hit {
                id: 1,
                vector: &vec,
                similarity: 5.0,
            },
            Hit {
                id: 2,
                vector: &vec,
                similarity: 2.0,
            },
            Hit {
                id: 3,
                vector: &vec,
                similarity: 4.0,
            },
        ];
        sort_hits(&mut hits);
        let order: Vec<u64> = hits.iter().map(|h| h.id).collect();
        assert_eq!(order, vec![1, 3, 2]);
    }

    #[test]
    fn test_sort_hits_is_stable() {
        let vec = [1.0];
        let mut hits = vec![
            Hit {
                id: 7,
                vector: &vec,
                similarity: 0.5,
            },
            Hit {
                id: 3,
                vector: &vec,
                similarity: 0.9,
            },
            Hit {
                id: 5,
                vector: &vec,
                similarity: 0.5,
            },
        ];
        sort_hits(&mut hits);
        let order: Vec<u64> = hits.iter().map(|h| h.id).collect();
        assert_eq!(order, vec![3, 7, 5]);
    }

    #[test]
    fn test_min_similarity() {
        let vec = [-1.0, 0.0, 0.0];
        let mut hits = vec![
            Hit {
                id: 1,
                vector: &vec,
                similarity: 0.1,
            },
            Hit {
                id: 1,
                vector: &vec,
                similarity: 0.6,
            },
            Hit {
                id: 1,
                vector: &vec,
                similarity: 0.8,
            },
        ];
        sort_hits(&mut hits);
        let filtered = min_similarity(hits, 0.6);
        let scores: Vec<f64> = filtered.iter().map(|h| h.similarity).collect();
        assert_eq!(scores, vec![0.8, 0.6]);
    }

    #[test]
    fn test_min_similarity_stops_at_first_miss() {
        let vec = [1.0];
        // Not sorted: the trailing 0.9 is behind the cut and is not rescanned.
        let hits = vec![
            Hit {
                id: 1,
                vector: &vec,
                similarity: 0.7,
            },
            Hit {
                id: 2,
                vector: &vec,
                similarity: 0.2,
            },
            Hit {
                id: 3,
                vector: &vec,
                similarity: 0.9,
            },
        ];
        let filtered = min_similarity(hits, 0.5);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_knn() {
        let index = fixed_index(false);
        let result = index.knn(&[1.0, 1.0, 1.0], &[10, 20, 30], 2).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(sorted(result.iter().map(|h| h.id).collect()), vec![20, 30]);
    }

    #[test]
    fn test_knn_single() {
        let index = fixed_index(false);
        let result = index.knn(&[-1.0, -1.0, -1.0], &[10, 20, 30], 1).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 10);
        assert_eq!(result[0].vector, &[-1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_knn_unknown_id() {
        let index = fixed_index(false);
        assert_eq!(
            index.knn(&[1.0, 1.0, 1.0], &[20, 42], 2),
            Err(LshError::UnknownId(42))
        );
    }

    #[test]
    fn test_ann() {
        let index = fixed_index(false);
        let neighbors = index.ann(&[1.0, 1.0, 1.0], 2).unwrap();
        assert_eq!(neighbors.candidates, 6);
        assert_eq!(neighbors.hits.len(), 2);
        assert_eq!(sorted(neighbors.hits.iter().map(|h| h.id).collect()), vec![20, 30]);
        for hit in &neighbors.hits {
            assert_relative_eq!(hit.similarity, 1.0 / 3.0f64.sqrt(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_ann_k_larger_than_candidates() {
        let index = fixed_index(false);
        let neighbors = index.ann(&[1.0, 1.0, 1.0], 10).unwrap();
        assert_eq!(neighbors.hits.len(), 2);
    }

    #[test]
    fn test_ann_k_zero_reports_candidates() {
        let index = fixed_index(false);
        let neighbors = index.ann(&[1.0, 1.0, 1.0], 0).unwrap();
        assert!(neighbors.hits.is_empty());
        assert_eq!(neighbors.candidates, 6);
    }

    #[test]
    fn test_ann_with_min_similarity() {
        let index = fixed_index(false);
        let neighbors = index.ann_with_min_similarity(&[1.0, 1.0, 1.0], 2, 0.9).unwrap();
        assert!(neighbors.hits.is_empty());
        assert_eq!(neighbors.candidates, 6);

        let neighbors = index.ann_with_min_similarity(&[1.0, 1.0, 1.0], 2, 0.5).unwrap();
        assert_eq!(neighbors.hits.len(), 2);
    }

    #[test]
    fn test_ann_with_nan_min_similarity_rejected() {
        let index = fixed_index(false);
        assert!(matches!(
            index.ann_with_min_similarity(&[1.0, 1.0, 1.0], 2, f64::NAN),
            Err(LshError::InvalidParameter(_))
        ));
        let empty = LshIndex::new(Vec::<(u64, Vector)>::new(), &LshConfig::default()).unwrap();
        assert!(matches!(
            empty.ann_with_min_similarity(&[1.0], 2, f64::NAN),
            Err(LshError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_min_similarity_nan_threshold_keeps_nothing() {
        let vec = [1.0];
        let hits = vec![Hit {
            id: 1,
            vector: &vec,
            similarity: 0.9,
        }];
        assert!(min_similarity(hits, f64::NAN).is_empty());
    }

    #[test]
    fn test_ann_dimension_mismatch() {
        let index = fixed_index(false);
        assert_eq!(
            index.ann(&[1.0, 1.0], 2),
            Err(LshError::DimensionMismatch { expected: 3, actual: 2 })
        );
    }

    #[test]
    fn test_ann_nan_aborts_query() {
        let mut source = FixedSequence::new(vec![1.0, 2.0, 3.0]);
        let mut vectors = corpus();
        vectors.push((40, vec![0.0, 0.0, 0.0]));
        let index = LshIndex::with_source(vectors, &LshConfig::new(1, 2), &mut source).unwrap();
        // [-1, -1, -1] shares the "00" bucket with ids 10 and 40
        assert_eq!(index.ann(&[-1.0, -1.0, -1.0], 5), Err(LshError::NotANumber));
        // Queries that miss the zero vector are unaffected
        assert_eq!(index.ann(&[1.0, 1.0, 1.0], 5).unwrap().hits.len(), 2);
    }

    #[test]
    fn test_empty_corpus() {
        let index = LshIndex::new(Vec::<(u64, Vector)>::new(), &LshConfig::default()).unwrap();
        assert!(index.is_empty());
        assert_eq!(index.dimension(), 0);
        let neighbors = index.ann(&[1.0, 2.0], 5).unwrap();
        assert!(neighbors.hits.is_empty());
        assert_eq!(neighbors.candidates, 0);
    }

    #[test]
    fn test_no_bucket_hit() {
        let mut source = FixedSequence::new(vec![1.0, 2.0, 3.0]);
        let vectors = vec![(1, vec![1.0, 1.0, 1.0])];
        let index = LshIndex::with_source(vectors, &LshConfig::new(2, 2), &mut source).unwrap();
        let neighbors = index.ann(&[-1.0, -1.0, -1.0], 5).unwrap();
        assert!(neighbors.hits.is_empty());
        assert_eq!(neighbors.candidates, 0);
    }

    #[test]
    fn test_inconsistent_corpus_rejected() {
        let vectors = vec![(1, vec![1.0, 0.0]), (2, vec![1.0, 0.0, 0.0])];
        assert_eq!(
            LshIndex::new(vectors, &LshConfig::default()).unwrap_err(),
            LshError::DimensionMismatch { expected: 2, actual: 3 }
        );
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let vectors = vec![(1, vec![1.0, 0.0]), (1, vec![0.0, 1.0])];
        assert_eq!(
            LshIndex::new(vectors, &LshConfig::default()).unwrap_err(),
            LshError::DuplicateId(1)
        );
    }

    #[test]
    fn test_zero_length_vectors_rejected() {
        let vectors = vec![(1, Vec::new())];
        assert!(matches!(
            LshIndex::new(vectors, &LshConfig::default()),
            Err(LshError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(matches!(
            LshIndex::new(corpus(), &LshConfig::new(0, 4)),
            Err(LshError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_parallel_build_matches_sequential() {
        let vectors: Vec<(u64, Vector)> = (0..500u64)
            .map(|id| {
                let v = (0..12).map(|j| ((id * 31 + j * 7) % 17) as f64 - 8.0).collect();
                (id, v)
            })
            .collect();
        let sequential = LshIndex::new(
            vectors.clone(),
            &LshConfig::new(4, 6).with_seed(99).with_parallel_build(false),
        )
        .unwrap();
        let parallel = LshIndex::new(
            vectors.clone(),
            &LshConfig::new(4, 6).with_seed(99).with_parallel_build(true),
        )
        .unwrap();

        assert_eq!(sequential.tables, parallel.tables);
        for (_, query) in vectors.iter().take(20) {
            assert_eq!(
                sequential.candidates(query).unwrap(),
                parallel.candidates(query).unwrap()
            );
        }
    }

    #[test]
    fn test_self_query_finds_itself() {
        let vectors: Vec<(u64, Vector)> = (0..200u64)
            .map(|id| {
                let v = (0..16).map(|j| (((id + 1) * (j + 3)) % 13) as f64 - 6.0).collect();
                (id, v)
            })
            .filter(|(_, v): &(u64, Vector)| v.iter().any(|x| *x != 0.0))
            .collect();
        let index = LshIndex::new(vectors.clone(), &LshConfig::new(3, 8).with_seed(5)).unwrap();
        for (id, vector) in &vectors {
            let neighbors = index.ann(vector, 1).unwrap();
            assert!(neighbors.candidates >= 3, "id {} missed its own buckets", id);
            assert_relative_eq!(neighbors.hits[0].similarity, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_search_trait() {
        let index = fixed_index(true);
        let results = index.search(&[-1.0, -1.0, -1.0], 3).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0, 10);
        assert_relative_eq!(results[0].1, 1.0 / 3.0f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_index_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LshIndex>();
    }
}
