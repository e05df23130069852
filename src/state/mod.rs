//! State module for tracking per-document progress
//!
//! Every URL in a batch is driven through the same linear pipeline. The
//! [`TaskState`] machine records how far a document got, and [`FailureStage`]
//! names the stage at which a failed document stopped.

mod task_state;

pub use task_state::{FailureStage, TaskState};
