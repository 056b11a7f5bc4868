//! Document types, document numbers, and next-number allocation.
//!
//! Numbers look like `IV-2025-0004`: a per-type prefix, the year, and a
//! sequence that restarts at 1 every year for every type.

mod allocator;
mod candidate;
mod error;
mod sequence;
mod types;

pub use allocator::*;
pub use candidate::NumberCandidate;
pub use error::*;
pub use sequence::*;
pub use types::*;
