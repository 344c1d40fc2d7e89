//! Behavior-tree runtime built on `drivesim-core`.
//!
//! Composites are a tagged variant dispatching a parallel policy over child
//! statuses rather than a chain of dynamic composite types; only the leaves
//! (scripted behaviors and evaluation criteria) are caller-supplied trait
//! objects.

#![forbid(unsafe_code)]

pub mod criterion;
pub mod node;
pub mod status;
pub mod timeout;

pub use criterion::Criterion;
pub use node::{Behavior, Node, ParallelPolicy};
pub use status::Status;
pub use timeout::TimeoutGuard;
