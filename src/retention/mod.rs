//! Retention engine
//!
//! Selection of the items to delete ([`policy`]), sequential execution of the
//! deletes ([`deleter`]) and the per-repository state machine tying them
//! together ([`worker`]).

pub mod deleter;
pub mod policy;
pub mod worker;

pub use deleter::{DeleteOutcome, Deleter};
pub use policy::{Retainable, RetentionPolicy, Selection, select};
pub use worker::{PhaseReport, RepositoryWorker, WorkerReport};
