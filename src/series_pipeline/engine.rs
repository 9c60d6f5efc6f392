//! The parallel binary-split engine.
//!
//! This module evaluates the Chudnovsky series over a term range by
//! divide-and-conquer: leaves are exact closed-form terms, internal nodes are
//! order-preserving combines of their two halves. Two parallelism layers
//! coexist:
//!
//! 1. The top-level driver partitions the full term count across the
//!    configured workers as near-equal contiguous ranges and reduces the
//!    per-worker partials left-to-right on the calling thread. The combine
//!    algebra is order-sensitive, so this reduction must follow range order,
//!    never a commutative fold.
//! 2. Inside each range, the recursion forks via `rayon::join` when the
//!    subrange size meets the task-granularity threshold, and stays
//!    sequential below it.
//!
//! The engine owns an explicitly constructed `rayon` pool rather than using
//! the ambient global one, so the worker count is a real, observable knob.

use num_bigint::BigInt;
use rayon::prelude::*;

use crate::error::PiError;
use crate::kernels::pqt::{combine, CpuMultiplier, Multiplier, Pqt};
use crate::kernels::series;

/// Default subrange size (in terms) at or above which recursion forks.
pub const TASK_THRESHOLD: u64 = 1024;

/// A configured evaluator for one run. The `C³/24` constant is computed once
/// here and shared read-only by every leaf evaluation.
pub struct SplitEngine {
    pool: rayon::ThreadPool,
    workers: usize,
    threshold: u64,
    c3_over_24: BigInt,
    multiplier: Box<dyn Multiplier>,
}

impl SplitEngine {
    /// Builds an engine with the default fork threshold.
    pub fn new(workers: usize) -> Result<Self, PiError> {
        Self::with_threshold(workers, TASK_THRESHOLD)
    }

    /// Builds an engine with an explicit fork threshold. A threshold of 1
    /// forks at every internal node; a threshold above the term count keeps
    /// each range fully sequential. Results are identical either way.
    pub fn with_threshold(workers: usize, threshold: u64) -> Result<Self, PiError> {
        let workers = workers.max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("split-worker-{i}"))
            .build()?;
        Ok(SplitEngine {
            pool,
            workers,
            threshold: threshold.max(1),
            c3_over_24: series::c3_over_24(),
            multiplier: Box::new(CpuMultiplier),
        })
    }

    /// Replaces the multiply strategy used by the combiner. Any substitute
    /// must be value-equivalent to `CpuMultiplier`.
    pub fn with_multiplier(mut self, multiplier: Box<dyn Multiplier>) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Evaluates the series over `[0, terms)` and returns the fully merged
    /// triple.
    ///
    /// Workers in excess of the term count would receive zero terms, so the
    /// partition width is capped at `terms`. Degenerate partials are skipped
    /// in the reduction; they must never be merged into a running total as if
    /// they were contributions.
    pub fn compute(&self, terms: u64) -> Pqt {
        let terms = terms.max(1);
        let workers = (self.workers as u64).min(terms);

        let ranges: Vec<(u64, u64)> = (0..workers)
            .map(|i| (i * terms / workers, (i + 1) * terms / workers))
            .filter(|(start, end)| start < end)
            .collect();

        log::debug!(
            "splitting {} terms across {} contiguous ranges (fork threshold {})",
            terms,
            ranges.len(),
            self.threshold
        );

        let partials: Vec<Pqt> = self.pool.install(|| {
            ranges
                .par_iter()
                .map(|&(start, end)| self.split(start, end))
                .collect()
        });

        // Ordered left-to-right reduction on the calling thread.
        let mut merged: Option<Pqt> = None;
        for partial in partials {
            if partial.is_empty() {
                continue;
            }
            merged = Some(match merged {
                None => partial,
                Some(acc) => combine(&acc, &partial, &*self.multiplier),
            });
        }

        // Unreachable for terms >= 1, but a missing partial must not poison
        // the downstream division with a zero denominator.
        merged.unwrap_or_else(|| series::term(0, &self.c3_over_24))
    }

    /// Evaluates one term range `[a, b)`, `a < b`, forking above the
    /// threshold.
    fn split(&self, a: u64, b: u64) -> Pqt {
        debug_assert!(a < b, "split range must be non-empty: [{a}, {b})");
        if b - a == 1 {
            return series::term(a, &self.c3_over_24);
        }

        let mid = a + (b - a) / 2;
        let (left, right) = if b - a >= self.threshold {
            rayon::join(|| self.split(a, mid), || self.split(mid, b))
        } else {
            (self.split(a, mid), self.split(mid, b))
        };

        combine(&left, &right, &*self.multiplier)
    }
}
