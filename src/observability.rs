//! This module provides observability and diagnostics capabilities for the
//! computation pipeline.
//!
//! A run that spans minutes to hours needs visibility into its phase-by-phase
//! decisions (term count, working precision, chosen block size). This module
//! provides structured logging hooks to make that behavior transparent and
//! debuggable. The `log_metric!` macro is the primary tool.
//!
//! It is a zero-cost abstraction: the `#[cfg(debug_assertions)]` attribute
//! ensures that the macro and all calls to it are completely compiled out of
//! release builds, imposing no performance penalty in production.

/// Logs a structured key-value metric string to stdout, only in debug builds.
///
/// # Example
/// ```
/// use pistream::log_metric;
/// let block_size = 4;
/// log_metric!("event"="plan_stream", "block_size"=&block_size);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            // Collect each pair as a JSON string fragment
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            let output = format!("PISTREAM_METRIC: {{ {} }}", parts.join(", "));
            println!("{}", output);
        }
    };
}
