//! The streaming half of the computation: a single-producer/single-consumer
//! pipeline that extracts decimal digit blocks from the assembled Pi value
//! and appends them to the output sink without ever materializing the whole
//! digit string.

pub mod block;
pub mod extract;
pub mod queue;
pub mod writer;

pub use block::{choose_block_size, DigitBlock};
pub use extract::stream_digits;
pub use queue::{handoff, BlockReceiver, BlockSender};
pub use writer::write_stream;
