//! The pistream command-line binary.
//!
//! Usage: `pistream [threads] [digits] [output]`, where `digits` accepts
//! case-insensitive `K`/`M`/`B` magnitude suffixes. Prints the execution time
//! and a head/tail preview of the written file.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use pistream::utils::{format_duration, parse_digit_count, preview};
use pistream::ComputeConfig;

/// Characters shown from each end of the output file after a run.
const PREVIEW_CHARS: usize = 32;

#[derive(Parser, Debug)]
#[command(name = "pistream", version)]
#[command(about = "Compute decimal digits of Pi and stream them to a file")]
struct Args {
    /// Number of worker threads for the series computation
    #[arg(default_value_t = 8)]
    threads: usize,

    /// Decimal digits to compute; accepts K/M/B suffixes (e.g. 25M)
    #[arg(default_value = "100000", value_parser = parse_digit_count)]
    digits: u64,

    /// Output file path
    #[arg(default_value = "pi_stream_output.txt")]
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let config = ComputeConfig {
        workers: args.threads,
        digits: args.digits,
        output_path: args.output,
        ..ComputeConfig::default()
    };

    let started = Instant::now();
    if let Err(e) = pistream::compute_pi(&config) {
        eprintln!("pistream: {e}");
        return ExitCode::FAILURE;
    }

    println!("Execution time: {}", format_duration(started.elapsed()));

    match preview(&config.output_path, PREVIEW_CHARS) {
        Ok((head, tail)) => {
            println!("{} ... {}", head.trim_end(), tail.trim_end());
        }
        Err(e) => log::warn!(
            "could not preview {}: {}",
            config.output_path.display(),
            e
        ),
    }

    ExitCode::SUCCESS
}
