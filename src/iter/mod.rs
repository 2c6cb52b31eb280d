//! The cursor model used by the range algorithms.
//!
//! A [`Cursor`] is a lightweight position within a range. Cursors come in the capability levels
//! described by [`Category`], and each level is a trait: [`Cursor`] for forward traversal,
//! [`BidirectionalCursor`] and [`RandomAccessCursor`]. Algorithms are written once against
//! [`Cursor`] and pick a faster strategy at compile time when a more capable cursor is passed.
//!
//! [`RawCursor`] is the random access cursor over contiguous storage, while [`ForwardOnly`] and
//! [`BidirectionalOnly`] wrap a cursor to hide some of its capabilities.
//!
//! Writing results is done through an [`OutputCursor`], which is implemented by growable
//! collections (appending) and by mutable slice iterators (overwriting).

mod category;
mod cursor;
mod output;
mod restrict;


pub use category::Category;
pub use cursor::{
    BidirectionalCursor, Cursor, RandomAccessCursor, RawCursor, advance, distance, next, prev,
};
pub use output::OutputCursor;
pub use restrict::{BidirectionalOnly, ForwardOnly};
