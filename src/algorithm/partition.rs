use std::ptr;

use super::rotate_range;
use crate::iter::{BidirectionalCursor, Cursor, OutputCursor, RawCursor, advance, distance};

/// Reorders `slice` so that every element for which `pred` returns true comes before every
/// element for which it returns false, returning the number of elements in the first group.
///
/// The relative order within each group is not preserved, see [`stable_partition`].
///
/// # Examples
/// ```
/// # use sequence_lib::algorithm::{partition, is_partitioned};
/// let mut values = [1, 2, 3, 4, 5, 6];
/// let point = partition(&mut values, |v| v % 2 == 0);
/// assert_eq!(point, 3);
/// assert!(is_partitioned(&values, |v| *v % 2 == 0));
/// ```
pub fn partition<T, P: FnMut(&T) -> bool>(slice: &mut [T], pred: P) -> usize {
    let (first, last) = RawCursor::range(slice);
    // SAFETY: Both cursors describe the slice.
    unsafe { partition_range(first, last, pred).index }
}

/// Partitions `[first, last)` by `pred`, returning the cursor to the first element of the
/// second group.
///
/// Forward cursors sweep once, swapping each matching element back to the end of the first
/// group. Bidirectional cursors work inward from both ends, which swaps each misplaced element at
/// most once.
///
/// # Safety
/// `[first, last)` must be a range of live elements.
pub unsafe fn partition_range<C, P>(first: C, last: C, pred: P) -> C
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    // SAFETY: Forwarded from the caller.
    unsafe { C::spec_partition(first, last, pred) }
}

/// Partitions `slice` like [`partition`], but keeps the relative order of the elements within
/// each group.
///
/// No buffer is allocated. The range is split in half, each half is partitioned recursively and
/// the false group of the left half is rotated past the true group of the right half, which takes
/// `O(n log n)` swaps.
///
/// # Examples
/// ```
/// # use sequence_lib::algorithm::stable_partition;
/// let mut values = [1, 2, 3, 4, 5, 6, 7];
/// assert_eq!(stable_partition(&mut values, |v| v % 3 == 0), 2);
/// assert_eq!(values, [3, 6, 1, 2, 4, 5, 7]);
/// ```
pub fn stable_partition<T, P: FnMut(&T) -> bool>(slice: &mut [T], pred: P) -> usize {
    let (first, last) = RawCursor::range(slice);
    // SAFETY: Both cursors describe the slice.
    unsafe { stable_partition_range(first, last, pred).index }
}

/// Stably partitions `[first, last)` by `pred`, returning the cursor to the first element of the
/// second group.
///
/// # Safety
/// `[first, last)` must be a range of live elements.
pub unsafe fn stable_partition_range<C, P>(mut first: C, last: C, mut pred: P) -> C
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    loop {
        if first == last {
            return first;
        }
        // SAFETY: first is live.
        if !pred(unsafe { &*first.slot() }) {
            break;
        }
        first.step();
    }

    let len = distance(&first, &last);
    // SAFETY: first is live and known to be false.
    unsafe { stable_partition_from_false(first, last, &mut pred, len) }
}

/// Stably partitions `len` elements starting at `first`, which is known to fail `pred`.
unsafe fn stable_partition_from_false<C, P>(first: C, last: C, pred: &mut P, len: usize) -> C
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    if len == 1 {
        return first;
    }
    if len == 2 {
        let mut second = first.clone();
        second.step();
        // SAFETY: Both elements are live.
        unsafe {
            if pred(&*second.slot()) {
                ptr::swap(first.slot(), second.slot());
                return second;
            }
        }
        return first;
    }

    let len_left = len / 2;
    let mut middle = first.clone();
    advance(&mut middle, len_left);
    // SAFETY: The left half starts with first.
    let first_false = unsafe { stable_partition_from_false(first, middle.clone(), pred, len_left) };

    let mut right = middle.clone();
    let mut len_right = len - len_left;
    // SAFETY: Every element before last is live.
    while pred(unsafe { &*right.slot() }) {
        right.step();
        if right == last {
            // SAFETY: All three cursors are ordered within the range.
            return unsafe { rotate_range(first_false, middle, last) };
        }
        len_right -= 1;
    }

    // SAFETY: right is known to be false.
    let second_false = unsafe { stable_partition_from_false(right, last, pred, len_right) };
    // SAFETY: All three cursors are ordered within the range.
    unsafe { rotate_range(first_false, middle, second_false) }
}

/// Returns true if every item for which `pred` returns true comes before every item for which it
/// returns false.
pub fn is_partitioned<I, P>(iter: I, mut pred: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut iter = iter.into_iter();
    for item in iter.by_ref() {
        if !pred(&item) {
            break;
        }
    }
    iter.all(|item| !pred(&item))
}

/// Returns the index of the first element in a partitioned `slice` for which `pred` returns
/// false, using a binary search.
///
/// # Examples
/// ```
/// # use sequence_lib::algorithm::partition_point;
/// assert_eq!(partition_point(&[2, 4, 6, 1, 3], |v| v % 2 == 0), 3);
/// ```
pub fn partition_point<T, P: FnMut(&T) -> bool>(slice: &[T], mut pred: P) -> usize {
    let mut first = 0;
    let mut len = slice.len();
    while len != 0 {
        let half = len / 2;
        let mid = first + half;
        if pred(&slice[mid]) {
            first = mid + 1;
            len -= half + 1;
        } else {
            len = half;
        }
    }
    first
}

/// Writes each item to `out_true` if `pred` returns true for it and to `out_false` otherwise,
/// returning both output cursors.
pub fn partition_copy<I, O1, O2, P>(
    iter: I,
    mut out_true: O1,
    mut out_false: O2,
    mut pred: P,
) -> (O1, O2)
where
    I: IntoIterator,
    O1: OutputCursor<I::Item>,
    O2: OutputCursor<I::Item>,
    P: FnMut(&I::Item) -> bool,
{
    for item in iter {
        if pred(&item) {
            out_true.put(item);
        } else {
            out_false.put(item);
        }
    }
    (out_true, out_false)
}

trait SpecPartition: Cursor {
    unsafe fn spec_partition<P: FnMut(&Self::Item) -> bool>(
        first: Self,
        last: Self,
        pred: P,
    ) -> Self;
}

impl<C: Cursor> SpecPartition for C {
    default unsafe fn spec_partition<P: FnMut(&C::Item) -> bool>(
        mut first: C,
        last: C,
        mut pred: P,
    ) -> C {
        loop {
            if first == last {
                return last;
            }
            // SAFETY: first is live.
            if !pred(unsafe { &*first.slot() }) {
                break;
            }
            first.step();
        }

        let mut p = first.clone();
        p.step();
        while p != last {
            // SAFETY: p is live and distinct from first.
            unsafe {
                if pred(&*p.slot()) {
                    ptr::swap(first.slot(), p.slot());
                    first.step();
                }
            }
            p.step();
        }
        first
    }
}

impl<C: BidirectionalCursor> SpecPartition for C {
    unsafe fn spec_partition<P: FnMut(&C::Item) -> bool>(
        mut first: C,
        mut last: C,
        mut pred: P,
    ) -> C {
        loop {
            loop {
                if first == last {
                    return first;
                }
                // SAFETY: first is live.
                if !pred(unsafe { &*first.slot() }) {
                    break;
                }
                first.step();
            }

            loop {
                last.step_back();
                if first == last {
                    return first;
                }
                // SAFETY: last is live.
                if pred(unsafe { &*last.slot() }) {
                    break;
                }
            }

            // SAFETY: Both are live and distinct.
            unsafe { ptr::swap(first.slot(), last.slot()) }
            first.step();
        }
    }
}
