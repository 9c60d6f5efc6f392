// In: src/config.rs

//! The single source of truth for all pistream run configuration.
//!
//! This module defines the unified `ComputeConfig` struct, which is designed to
//! be created once at the application boundary (the CLI binary, or a test
//! harness) and then passed down through the system by reference.
//!
//! This approach centralizes all settings, eliminates "prop drilling," and
//! keeps the orchestrator's signature stable as tuning knobs are added.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The unified configuration for one Pi computation run.
///
/// Non-positive `digits` or `workers` are not an error: the orchestrator
/// clamps both to a minimum of 1, since the domain requires at least one
/// digit and one worker.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "snake_case")]
pub struct ComputeConfig {
    /// Number of worker threads for the series split phase. Silently capped
    /// at the term count when it exceeds the available work.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Requested decimal digit count after the decimal point.
    #[serde(default = "default_digits")]
    pub digits: u64,

    /// Path of the output sink the digit stream is written to.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Subrange size (in series terms) at or above which the split recursion
    /// forks into parallel tasks; below it, recursion stays on the current
    /// thread to bound scheduling overhead.
    #[serde(default = "default_task_threshold")]
    pub task_threshold: u64,

    /// Explicit digit-block size for the streaming phase. `None` selects the
    /// block size heuristically from `digits` and `workers`. Mainly a hook
    /// for exercising block-boundary behavior in tests.
    #[serde(default)]
    pub block_size: Option<usize>,
}

impl Default for ComputeConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            digits: default_digits(),
            output_path: default_output_path(),
            task_threshold: default_task_threshold(),
            block_size: None,
        }
    }
}

/// Helper for `serde` to provide the default worker count.
fn default_workers() -> usize {
    8
}

/// Helper for `serde` to provide the default digit count.
fn default_digits() -> u64 {
    100_000
}

/// Helper for `serde` to provide the default output path.
fn default_output_path() -> PathBuf {
    PathBuf::from("pi_stream_output.txt")
}

/// Helper for `serde` to provide the default fork threshold.
fn default_task_threshold() -> u64 {
    1024
}
