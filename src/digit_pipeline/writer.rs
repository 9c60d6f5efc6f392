//! The streaming-writer consumer.
//!
//! Runs on its own thread: opens the output sink once, writes the integer
//! part and the decimal point, then drains the handoff queue in FIFO order.
//! Block text shorter than its expected length is left-padded with zeros —
//! big-integer string conversion drops a block's leading zeros, and writing
//! the short form verbatim would shift every later digit. Output is flushed
//! after each block to bound the memory held by unwritten output.
//!
//! The sink-open failure is this thread's own: it is logged here and returned
//! through the join handle; the producer keeps running and the orchestrator
//! surfaces the error after the join.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::digit_pipeline::queue::BlockReceiver;
use crate::error::PiError;

/// Opens (creates or truncates) the output file and streams the digit queue
/// into it. Entry point for the writer thread.
pub fn write_stream(
    path: &Path,
    integer_part: &str,
    receiver: BlockReceiver,
) -> Result<(), PiError> {
    let file = File::create(path).map_err(|e| {
        log::error!("cannot open output file {}: {}", path.display(), e);
        PiError::Writer(format!("cannot open {}: {}", path.display(), e))
    })?;
    let mut sink = BufWriter::new(file);
    write_blocks(&mut sink, integer_part, receiver)
}

/// The sink-agnostic core of the writer: integer part, decimal point, padded
/// blocks in order, trailing newline.
pub(crate) fn write_blocks<W: Write>(
    sink: &mut W,
    integer_part: &str,
    receiver: BlockReceiver,
) -> Result<(), PiError> {
    sink.write_all(integer_part.as_bytes())?;
    sink.write_all(b".")?;
    sink.flush()?;

    while let Some(block) = receiver.pop() {
        if block.digits.len() < block.expected_len {
            let padding = vec![b'0'; block.expected_len - block.digits.len()];
            sink.write_all(&padding)?;
        }
        sink.write_all(block.digits.as_bytes())?;
        sink.flush()?;
    }

    sink.write_all(b"\n")?;
    sink.flush()?;
    Ok(())
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::digit_pipeline::block::DigitBlock;
    use crate::digit_pipeline::queue::handoff;

    fn block(digits: &str, expected_len: usize) -> DigitBlock {
        DigitBlock {
            digits: digits.to_string(),
            expected_len,
        }
    }

    #[test]
    fn test_blocks_are_concatenated_in_order() {
        let (tx, rx) = handoff();
        tx.push(block("1415", 4));
        tx.push(block("9265", 4));
        tx.finish();

        let mut out = Vec::new();
        write_blocks(&mut out, "3", rx).unwrap();
        assert_eq!(out, b"3.14159265\n");
    }

    #[test]
    fn test_short_block_is_left_padded_with_zeros() {
        let (tx, rx) = handoff();
        tx.push(block("7", 4));
        tx.push(block("42", 3));
        tx.finish();

        let mut out = Vec::new();
        write_blocks(&mut out, "3", rx).unwrap();
        assert_eq!(out, b"3.0007042\n");
    }

    #[test]
    fn test_empty_queue_still_writes_frame() {
        let (tx, rx) = handoff();
        tx.finish();

        let mut out = Vec::new();
        write_blocks(&mut out, "3", rx).unwrap();
        assert_eq!(out, b"3.\n");
    }

    #[test]
    fn test_missing_directory_is_a_writer_error() {
        let (tx, rx) = handoff();
        tx.finish();

        let path = std::env::temp_dir()
            .join("pistream_no_such_dir")
            .join("out.txt");
        let result = write_stream(&path, "3", rx);
        assert!(matches!(result, Err(PiError::Writer(_))));
    }
}
