//! Testing infrastructure for the study tracker.
//!
//! - **Traits**: [`Clock`], the only external dependency the core reads
//! - **Mocks**: [`MockClock`], a settable clock shared between handles
//! - **Fixtures**: sample plans in temporary directories (test-only)
//! - **Assertions**: streak and checkbox assertions

pub mod assertions;
#[cfg(test)]
pub mod fixtures;
pub mod mocks;
pub mod traits;

// Re-export commonly used types
pub use assertions::*;
#[cfg(test)]
pub use fixtures::*;
pub use mocks::*;
pub use traits::*;
