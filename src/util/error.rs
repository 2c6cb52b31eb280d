//! Error types shared by the collections and algorithms in this crate.

use std::alloc::Layout;

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside of the live elements of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The number of elements in the collection at the time.
    pub len: usize,
}

/// The requested capacity can't be represented, either because it overflowed [`usize`] or
/// because it is larger than the allocation strategy's maximum length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

/// The allocation strategy was unable to provide memory for the given layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Failed to allocate {} bytes with alignment {}!", layout.size(), layout.align())]
pub struct AllocFailure {
    /// The layout that couldn't be allocated.
    pub layout: Layout,
}

/// An output cursor was asked to write past the end of the storage it writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Output range exhausted before all elements were written!")]
pub struct OutputExhausted;

/// The error returned by all fallible capacity manipulation methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum TryReserveError {
    /// The requested capacity can't be represented.
    CapacityOverflow(CapacityOverflow),
    /// The allocation strategy ran out of memory.
    AllocFailure(AllocFailure),
}
