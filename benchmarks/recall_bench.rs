mod latency;

use anyhow::{anyhow, Result};
use clap::Parser;
use crossbeam_utils::thread;
use hyperlsh_core::index::distance::cosine;
use hyperlsh_core::{LshConfig, LshIndex, Vector, VectorIndex};
use latency::LiveHistogram;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Recall and latency benchmark for the LSH index",
    long_about = None
)]
struct Args {
    /// Corpus size
    #[arg(short = 'n', long, default_value_t = 20_000)]
    vectors: usize,

    #[arg(short, long, default_value_t = 200)]
    dimension: usize,

    /// Number of embeddings (hash tables)
    #[arg(short, long, default_value_t = 3)]
    tables: usize,

    /// Hyperplanes per embedding
    #[arg(short, long, default_value_t = 18)]
    bits: usize,

    #[arg(short = 'k', long, default_value_t = 30)]
    top_k: usize,

    #[arg(short, long, default_value_t = 0.1)]
    min_similarity: f64,

    #[arg(short, long, default_value_t = 500)]
    queries: usize,

    /// Query worker threads sharing one index
    #[arg(short = 'j', long, default_value_t = 4)]
    threads: usize,

    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(long)]
    sequential_build: bool,
}

/// Brute-force ground truth over the same corpus.
struct ExactScan<'a> {
    corpus: &'a [(u64, Vector)],
    dimension: usize,
}

impl VectorIndex for ExactScan<'_> {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn search(&self, query: &[f64], top_k: usize) -> hyperlsh_core::Result<Vec<(u64, f64)>> {
        let mut scored = self
            .corpus
            .iter()
            .map(|(id, v)| cosine(query, v).map(|s| (*id, s)))
            .collect::<hyperlsh_core::Result<Vec<_>>>()?;
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(top_k);
        Ok(scored)
    }
}

#[derive(Default)]
struct WorkerStats {
    queries: usize,
    recall: f64,
    candidates: usize,
    short: usize,
}

impl WorkerStats {
    fn merge(mut self, other: WorkerStats) -> Self {
        self.queries += other.queries;
        self.recall += other.recall;
        self.candidates += other.candidates;
        self.short += other.short;
        self
    }
}

fn random_corpus(n: usize, dim: usize, rng: &mut StdRng) -> Vec<(u64, Vector)> {
    (0..n as u64)
        .map(|id| (id, (0..dim).map(|_| rng.gen::<f64>()).collect()))
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.vectors == 0 || args.queries == 0 || args.threads == 0 {
        return Err(anyhow!("--vectors, --queries and --threads must be positive"));
    }
    if args.min_similarity.is_nan() {
        return Err(anyhow!("--min-similarity must be a number"));
    }

    println!("--- HYPERLSH RECALL BENCHMARK ---");
    println!("Corpus:        {} x {}", args.vectors, args.dimension);
    println!("Tables:        {} x {} bits", args.tables, args.bits);
    println!("Top-k:         {} (min similarity {})", args.top_k, args.min_similarity);
    println!("Queries:       {} on {} threads", args.queries, args.threads);
    println!("---------------------------------\n");

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let corpus = random_corpus(args.vectors, args.dimension, &mut rng);
    let query_ids: Vec<usize> = (0..args.queries).map(|_| rng.gen_range(0..corpus.len())).collect();

    let mut config =
        LshConfig::new(args.tables, args.bits).with_parallel_build(!args.sequential_build);
    config.seed = args.seed;

    let build_start = Instant::now();
    let index = LshIndex::new(corpus.iter().cloned(), &config)?;
    let build_time = build_start.elapsed();
    let stats = index.bucket_stats();
    info!(
        "Index ready: {} buckets across {} tables (largest {}, mean {:.2})",
        stats.buckets, stats.tables, stats.largest, stats.mean
    );

    let exact = ExactScan {
        corpus: &corpus,
        dimension: args.dimension,
    };
    let histogram = LiveHistogram::new();

    let query_start = Instant::now();
    let totals = thread::scope(|s| {
        let handles: Vec<_> = (0..args.threads)
            .map(|worker| {
                let (index, exact, histogram) = (&index, &exact, &histogram);
                let (corpus, query_ids, args) = (&corpus, &query_ids, &args);
                s.spawn(move |_| -> Result<WorkerStats> {
                    let mut stats = WorkerStats::default();
                    for &qi in query_ids.iter().skip(worker).step_by(args.threads) {
                        let query = &corpus[qi].1;

                        let start = Instant::now();
                        let neighbors =
                            index.ann_with_min_similarity(query, args.top_k, args.min_similarity)?;
                        histogram.record(start.elapsed());

                        let truth: HashSet<u64> = exact
                            .search(query, args.top_k)?
                            .into_iter()
                            .filter(|(_, s)| *s >= args.min_similarity)
                            .map(|(id, _)| id)
                            .collect();
                        let found = neighbors.hits.iter().filter(|h| truth.contains(&h.id)).count();

                        stats.queries += 1;
                        stats.candidates += neighbors.candidates;
                        stats.recall += if truth.is_empty() {
                            1.0
                        } else {
                            found as f64 / truth.len() as f64
                        };
                        if neighbors.hits.len() < args.top_k {
                            stats.short += 1;
                        }
                    }
                    Ok(stats)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| {
                h.join()
                    .map_err(|_| anyhow!("query worker panicked"))
                    .and_then(|r| r)
            })
            .try_fold(WorkerStats::default(), |acc, r| r.map(|s| acc.merge(s)))
    })
    .map_err(|_| anyhow!("query scope panicked"))??;
    let query_time = query_start.elapsed();

    if totals.short > 0 {
        warn!(
            "{}/{} queries returned fewer than {} hits; consider fewer bits or more tables",
            totals.short, totals.queries, args.top_k
        );
    }

    let n = totals.queries.max(1) as f64;
    println!("Build:         {:?}", build_time);
    println!("Query wall:    {:?} ({:.0} QPS)", query_time, n / query_time.as_secs_f64());
    println!("Recall@{}:     {:.4}", args.top_k, totals.recall / n);
    println!("Candidates:    {:.1} per query (raw, before dedup)", totals.candidates as f64 / n);
    println!("Short results: {}", totals.short);
    println!(
        "Latency:       p50 <{}us  p99 <{}us",
        histogram.percentile(0.50),
        histogram.percentile(0.99)
    );

    Ok(())
}
