//! Business logic services
//!
//! Pure orchestration logic that operates on domain models. Version control is
//! reached only through the [`IgnoreOracle`](crate::core::ports::IgnoreOracle) port.
//!
//! - [`decider`] - Classify one path against the configured rules
//! - [`filter`] - Apply a decider to a list of candidate files

pub mod decider;
pub mod filter;

pub use decider::Decider;
pub use filter::{FilterOutcome, filter_files, partition_files};
