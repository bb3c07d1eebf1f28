//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `git/` - Ignore lookups through `git check-ignore`

pub mod git;
