//! Replacement policy implementations (replacers).
//!
//! Only [`FifoReplacer`] exists: the simulator is about FIFO and nothing else.

mod fifo;

pub use fifo::FifoReplacer;
