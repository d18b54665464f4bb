pub mod bit_ops;
pub mod stage_traits;
pub mod trace;
pub mod transformer;
pub mod crowned_prime;
pub mod quantum;
pub mod pipeline;
pub mod config;
pub mod error;
pub mod message;
pub mod exchange;
pub mod batch;
pub mod snake_io;
pub mod visualize;

/// A 16-bit word travelling through the pipeline.
pub type Word = u16;
