//! Shared building blocks for app features.

mod task;

pub use task::{TaskId, TaskSeq, TaskState, Tasks};
