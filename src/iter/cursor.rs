use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use super::Category;

/// A position within a range of slots, which can be stepped forward and compared with other
/// positions in the same range.
///
/// A range is described by two cursors, `first` and `last`, where `last` is one past the final
/// slot. Cursors never own the slots they point to and are invalidated by anything that moves
/// those slots.
///
/// # Safety
/// Implementors must guarantee that two cursors into the same range compare equal if and only if
/// they denote the same slot, and that stepping a cursor denotes the following slot. The pointer
/// returned by [`slot`](Cursor::slot) must be valid for as long as the underlying range is. The
/// category must match the traits implemented: a cursor reporting
/// [`Category::Bidirectional`] or higher must implement [`BidirectionalCursor`], and so on.
pub unsafe trait Cursor: Clone + PartialEq {
    /// The type of the elements in the range.
    type Item;

    /// The capability level of this cursor.
    const CATEGORY: Category = Category::Forward;

    /// Moves the cursor to the next slot.
    fn step(&mut self);

    /// Returns a pointer to the slot at this position. The slot may be uninitialized, it is up to
    /// the caller to know whether it is.
    fn slot(&self) -> *mut Self::Item;
}

/// A [`Cursor`] that can also step backward.
///
/// # Safety
/// Stepping back must undo a step, such that `c.step(); c.step_back();` leaves `c` equal to
/// its original value.
#[rustc_specialization_trait]
pub unsafe trait BidirectionalCursor: Cursor {
    /// Moves the cursor to the previous slot.
    fn step_back(&mut self);
}

/// A [`BidirectionalCursor`] that can jump to any slot in the range in constant time.
///
/// # Safety
/// `offset` and `distance_to` must agree with repeated stepping: `c.offset(n)` denotes the same
/// slot as `n` steps from `c`, and `a.distance_to(&b)` is the number of steps from `a` to `b`.
#[rustc_specialization_trait]
pub unsafe trait RandomAccessCursor: BidirectionalCursor {
    /// Returns a cursor `n` slots after this one, or before it if `n` is negative.
    fn offset(&self, n: isize) -> Self;

    /// Returns the number of steps from this cursor to `other`, which is negative if `other`
    /// comes first.
    fn distance_to(&self, other: &Self) -> isize;
}

/// The contiguous cursor: a base pointer and an index into the slots after it.
///
/// Storing an index rather than a moving pointer keeps positions distinct for zero-sized types,
/// where every slot shares the same address.
pub struct RawCursor<T> {
    pub(crate) base: *mut T,
    pub(crate) index: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> RawCursor<T> {
    /// Creates a cursor at `index` slots after `base`.
    pub const fn new(base: *mut T, index: usize) -> RawCursor<T> {
        RawCursor {
            base,
            index,
            _phantom: PhantomData,
        }
    }

    /// Creates the pair of cursors describing every slot in `slice`.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::iter::{Cursor, RawCursor, distance};
    /// let mut values = [1, 2, 3];
    /// let (first, last) = RawCursor::range(&mut values);
    /// assert_eq!(distance(&first, &last), 3);
    /// ```
    pub const fn range(slice: &mut [T]) -> (RawCursor<T>, RawCursor<T>) {
        let base = slice.as_mut_ptr();
        (RawCursor::new(base, 0), RawCursor::new(base, slice.len()))
    }

    /// The index of this cursor, relative to its base.
    pub const fn index(&self) -> usize {
        self.index
    }
}

impl<T> Clone for RawCursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RawCursor<T> {}

impl<T> PartialEq for RawCursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.index == other.index
    }
}

impl<T> Eq for RawCursor<T> {}

impl<T> Debug for RawCursor<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawCursor")
            .field("base", &self.base)
            .field("index", &self.index)
            .finish()
    }
}

// SAFETY: Positions are compared by base and index, which uniquely identify a slot.
unsafe impl<T> Cursor for RawCursor<T> {
    type Item = T;

    const CATEGORY: Category = Category::RandomAccess;

    fn step(&mut self) {
        self.index = self.index.strict_add(1);
    }

    fn slot(&self) -> *mut T {
        self.base.wrapping_add(self.index)
    }
}

// SAFETY: Decrementing the index undoes an increment.
unsafe impl<T> BidirectionalCursor for RawCursor<T> {
    fn step_back(&mut self) {
        self.index = self.index.strict_sub(1);
    }
}

// SAFETY: Offsetting by n is the same as n increments of the index.
unsafe impl<T> RandomAccessCursor for RawCursor<T> {
    fn offset(&self, n: isize) -> Self {
        RawCursor::new(self.base, self.index.strict_add_signed(n))
    }

    fn distance_to(&self, other: &Self) -> isize {
        (other.index as isize).strict_sub(self.index as isize)
    }
}

/// Moves `cursor` forward by `n` slots. Takes constant time for random access cursors and
/// linear time otherwise.
pub fn advance<C: Cursor>(cursor: &mut C, n: usize) {
    cursor.spec_advance(n)
}

/// Returns the number of steps from `first` to `last`. Takes constant time for random access
/// cursors and linear time otherwise.
///
/// `last` must be reachable from `first`, otherwise this never returns for non-random access
/// cursors.
pub fn distance<C: Cursor>(first: &C, last: &C) -> usize {
    first.spec_distance(last)
}

/// Returns a copy of `cursor`, moved forward by `n` slots.
pub fn next<C: Cursor>(cursor: &C, n: usize) -> C {
    let mut result = cursor.clone();
    advance(&mut result, n);
    result
}

/// Returns a copy of `cursor`, moved backward by `n` slots.
pub fn prev<C: BidirectionalCursor>(cursor: &C, n: usize) -> C {
    let mut result = cursor.clone();
    result.spec_retreat(n);
    result
}

trait SpecAdvance: Cursor {
    fn spec_advance(&mut self, n: usize);

    fn spec_distance(&self, last: &Self) -> usize;
}

impl<C: Cursor> SpecAdvance for C {
    default fn spec_advance(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    default fn spec_distance(&self, last: &Self) -> usize {
        let mut current = self.clone();
        let mut count = 0;
        while current != *last {
            current.step();
            count += 1;
        }
        count
    }
}

impl<C: RandomAccessCursor> SpecAdvance for C {
    fn spec_advance(&mut self, n: usize) {
        *self = self.offset(n as isize);
    }

    fn spec_distance(&self, last: &Self) -> usize {
        self.distance_to(last) as usize
    }
}

trait SpecRetreat: BidirectionalCursor {
    fn spec_retreat(&mut self, n: usize);
}

impl<C: BidirectionalCursor> SpecRetreat for C {
    default fn spec_retreat(&mut self, n: usize) {
        for _ in 0..n {
            self.step_back();
        }
    }
}

impl<C: RandomAccessCursor> SpecRetreat for C {
    fn spec_retreat(&mut self, n: usize) {
        *self = self.offset(-(n as isize));
    }
}
