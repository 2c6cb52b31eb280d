//! Collections backed by a single contiguous allocation.

pub(crate) mod buffer;
pub mod vector;

#[doc(inline)]
pub use vector::Vector;
