use derive_more::IsVariant;

/// The capability level of a position type, from least to most capable.
///
/// Every level can do everything the levels before it can:
/// - `Input` positions can be read once, in a single pass. In Rust these are plain
///   [`Iterator`]s.
/// - `Forward` positions can be copied and stepped forward, so a range can be traversed more
///   than once.
/// - `Bidirectional` positions can also step backward.
/// - `RandomAccess` positions can jump by any offset and measure the distance between each
///   other in constant time.
///
/// Algorithms pick their strategy from the category at compile time, so asking for the category
/// of a cursor is free.
///
/// ```
/// # use sequence_lib::iter::{Category, Cursor, RawCursor, ForwardOnly};
/// assert_eq!(<RawCursor<u8> as Cursor>::CATEGORY, Category::RandomAccess);
/// assert_eq!(<ForwardOnly<RawCursor<u8>> as Cursor>::CATEGORY, Category::Forward);
/// assert!(Category::Forward < Category::Bidirectional);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IsVariant)]
pub enum Category {
    Input,
    Forward,
    Bidirectional,
    RandomAccess,
}

impl Category {
    /// Returns true if a position of this category can do everything a position of `other` can.
    pub fn includes(self, other: Category) -> bool {
        self >= other
    }
}
