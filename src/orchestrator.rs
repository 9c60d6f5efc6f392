// In: src/orchestrator.rs

//! The top-level coordinator for one Pi computation run.
//!
//! This module owns the phase sequence — split, precision sizing, assembly,
//! streaming — and the producer/consumer thread pair of the streaming phase.
//! It acts as a high-level coordinator, delegating each phase to the focused
//! modules that implement it.

use std::thread;
use std::time::Instant;

use serde::Serialize;

use crate::config::ComputeConfig;
use crate::digit_pipeline::{choose_block_size, handoff, stream_digits, write_stream};
use crate::error::PiError;
use crate::kernels::series;
use crate::series_pipeline::{assemble_pi, working_precision, SplitEngine};

/// What one completed run looked like. Serialized by the binary as a single
/// JSON log line.
#[derive(Serialize, Debug, Clone)]
pub struct RunSummary {
    pub digits: u64,
    pub terms: u64,
    pub workers: usize,
    pub precision_bits: u64,
    pub block_size: usize,
}

/// Computes `config.digits` decimal digits of Pi and streams them to
/// `config.output_path`.
///
/// Non-positive digit or worker counts are clamped to 1. The only fatal
/// outcomes are a failure to build the worker pool, a failure to open the
/// output sink (surfaced after the writer joins), and I/O errors while
/// writing.
pub fn compute_pi(config: &ComputeConfig) -> Result<RunSummary, PiError> {
    let digits = config.digits.max(1);
    let workers = config.workers.max(1);
    let terms = series::terms_for_digits(digits);

    log::info!(
        "computing {} digits of pi: {} series terms on {} workers",
        digits,
        terms,
        workers
    );

    // 1. Parallel binary split over the full term range.
    let split_started = Instant::now();
    let engine = SplitEngine::with_threshold(workers, config.task_threshold)?;
    let result = engine.compute(terms);
    log::debug!("split phase finished in {:.2?}", split_started.elapsed());

    // 2. Size the working precision from both the digit count and the actual
    //    integer magnitudes.
    let precision = working_precision(digits, &result);

    // 3. Assemble pi at that precision.
    let assemble_started = Instant::now();
    let pi = assemble_pi(&result, precision)?;
    log::debug!(
        "assembly finished in {:.2?} at {} bits",
        assemble_started.elapsed(),
        precision
    );

    if pi.is_negative() {
        return Err(PiError::InternalError(
            "assembled value is negative".to_string(),
        ));
    }
    let integer_part = pi.trunc();

    // 4. Stream the fractional digits through the producer/consumer pair.
    let block_size = config
        .block_size
        .unwrap_or_else(|| choose_block_size(digits, workers));
    log_metric!(
        "event" = "plan_stream",
        "block_size" = &block_size,
        "precision_bits" = &precision,
        "terms" = &terms,
    );

    let (sender, receiver) = handoff();
    let output_path = config.output_path.clone();
    let integer_text = integer_part.to_string();
    let writer = thread::Builder::new()
        .name("digit-writer".to_string())
        .spawn(move || write_stream(&output_path, &integer_text, receiver))?;

    stream_digits(&pi, digits, block_size, sender);

    match writer.join() {
        Ok(outcome) => outcome?,
        Err(_) => {
            return Err(PiError::InternalError(
                "digit writer thread panicked".to_string(),
            ))
        }
    }

    let summary = RunSummary {
        digits,
        terms,
        workers,
        precision_bits: precision,
        block_size,
    };
    log::info!("run summary: {}", serde_json::to_string(&summary)?);
    Ok(summary)
}
