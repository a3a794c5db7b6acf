//! Concurrency management
//!
//! Fan-out of the per-repository workers. Workers share only the read-only
//! registry client; there is no cross-worker state to lock.

pub mod fanout;

pub use fanout::{FanOut, RunSummary};
