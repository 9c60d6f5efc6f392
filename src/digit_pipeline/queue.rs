//! The handoff queue decoupling the digit producer from the file writer.
//!
//! This is the sole synchronization point between the two pipeline threads:
//! an unbounded FIFO with a non-blocking push, a blocking pop, and a one-shot
//! completion signal. Unbounded capacity is acceptable because the producer
//! is the pipeline bottleneck and never outruns the writer by more than about
//! one block.
//!
//! The completion signal is the channel close: `finish` consumes the sender,
//! and a pop on a closed, drained channel reports no-more-items.

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::digit_pipeline::block::DigitBlock;

/// Creates the producer and consumer halves of one run's handoff queue.
pub fn handoff() -> (BlockSender, BlockReceiver) {
    let (tx, rx) = unbounded();
    (BlockSender { tx }, BlockReceiver { rx })
}

/// Producer half. Dropping it (or calling `finish`) closes the queue.
pub struct BlockSender {
    tx: Sender<DigitBlock>,
}

impl BlockSender {
    /// Enqueues a block without blocking. If the consumer has already exited
    /// (its own open failure, for instance), the block is dropped; the
    /// producer still runs to completion, which is the accepted degenerate
    /// behavior for this single-shot tool.
    pub fn push(&self, block: DigitBlock) {
        if self.tx.send(block).is_err() {
            log::debug!("digit writer exited early; dropping block");
        }
    }

    /// Signals completion. Called exactly once, after the producer loop.
    pub fn finish(self) {
        // Dropping the sender closes the channel and unblocks the consumer.
    }
}

/// Consumer half.
pub struct BlockReceiver {
    rx: Receiver<DigitBlock>,
}

impl BlockReceiver {
    /// Blocks until a block is available, or returns `None` once the queue is
    /// finished and empty.
    pub fn pop(&self) -> Option<DigitBlock> {
        self.rx.recv().ok()
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn block(digits: &str, expected_len: usize) -> DigitBlock {
        DigitBlock {
            digits: digits.to_string(),
            expected_len,
        }
    }

    #[test]
    fn test_fifo_order_is_preserved() {
        let (tx, rx) = handoff();
        tx.push(block("11", 2));
        tx.push(block("22", 2));
        tx.push(block("33", 2));
        tx.finish();

        assert_eq!(rx.pop().unwrap().digits, "11");
        assert_eq!(rx.pop().unwrap().digits, "22");
        assert_eq!(rx.pop().unwrap().digits, "33");
        assert!(rx.pop().is_none());
    }

    #[test]
    fn test_finish_unblocks_a_waiting_consumer() {
        let (tx, rx) = handoff();
        let consumer = std::thread::spawn(move || {
            let mut seen = 0;
            while rx.pop().is_some() {
                seen += 1;
            }
            seen
        });

        tx.push(block("7", 1));
        tx.finish();
        assert_eq!(consumer.join().unwrap(), 1);
    }

    #[test]
    fn test_push_after_consumer_exit_is_dropped() {
        let (tx, rx) = handoff();
        drop(rx);
        // Must not panic or block.
        tx.push(block("9", 1));
        tx.finish();
    }
}
