//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the filtering logic and the
//! systems it consults (version control).
//!
//! Implementations live in the `adapters` module.

mod ignore_oracle;

pub use ignore_oracle::IgnoreOracle;

#[cfg(test)]
pub use ignore_oracle::MockIgnoreOracle;
