//! The sorted range family: merging and set operations.
//!
//! Every function here expects its inputs to already be sorted by the ordering it is given, and
//! produces sorted output. Where both inputs hold equivalent elements, the one from the first
//! input is written first (or is the one written, for the set operations), so all of these are
//! stable. Inputs are consumed in a single pass, so any [`IntoIterator`] will do.

use std::cmp::Ordering;
use std::iter::Peekable;

use crate::iter::OutputCursor;

/// Which of two peeked inputs comes first.
enum Next {
    A,
    B,
    Both,
    Done,
}

fn compare_heads<I1, I2, F>(a: &mut Peekable<I1>, b: &mut Peekable<I2>, compare: &mut F) -> Next
where
    I1: Iterator,
    I2: Iterator<Item = I1::Item>,
    F: FnMut(&I1::Item, &I1::Item) -> Ordering,
{
    match (a.peek(), b.peek()) {
        (Some(x), Some(y)) => match compare(x, y) {
            Ordering::Less => Next::A,
            Ordering::Greater => Next::B,
            Ordering::Equal => Next::Both,
        },
        (Some(_), None) => Next::A,
        (None, Some(_)) => Next::B,
        (None, None) => Next::Done,
    }
}

/// Merges two sorted inputs into `out`, returning the output cursor.
///
/// # Examples
/// ```
/// # use sequence_lib::algorithm::merge;
/// let merged = merge([1, 3, 5], [2, 3, 4], Vec::new());
/// assert_eq!(merged, [1, 2, 3, 3, 4, 5]);
/// ```
pub fn merge<I1, I2, O>(a: I1, b: I2, out: O) -> O
where
    I1: IntoIterator,
    I2: IntoIterator<Item = I1::Item>,
    I1::Item: Ord,
    O: OutputCursor<I1::Item>,
{
    merge_by(a, b, out, Ord::cmp)
}

/// Merges two inputs sorted by `compare` into `out`, returning the output cursor. Equivalent
/// elements from `a` come before those from `b`.
pub fn merge_by<I1, I2, O, F>(a: I1, b: I2, mut out: O, mut compare: F) -> O
where
    I1: IntoIterator,
    I2: IntoIterator<Item = I1::Item>,
    O: OutputCursor<I1::Item>,
    F: FnMut(&I1::Item, &I1::Item) -> Ordering,
{
    let mut a = a.into_iter().peekable();
    let mut b = b.into_iter().peekable();

    loop {
        let item = match compare_heads(&mut a, &mut b, &mut compare) {
            Next::A | Next::Both => a.next(),
            Next::B => b.next(),
            Next::Done => break,
        };
        if let Some(item) = item {
            out.put(item);
        }
    }
    out
}

/// Writes every element found in either sorted input to `out`. An element present `m` times in
/// `a` and `n` times in `b` is written `max(m, n)` times.
pub fn set_union<I1, I2, O>(a: I1, b: I2, out: O) -> O
where
    I1: IntoIterator,
    I2: IntoIterator<Item = I1::Item>,
    I1::Item: Ord,
    O: OutputCursor<I1::Item>,
{
    set_union_by(a, b, out, Ord::cmp)
}

/// [`set_union`] with a custom ordering.
pub fn set_union_by<I1, I2, O, F>(a: I1, b: I2, mut out: O, mut compare: F) -> O
where
    I1: IntoIterator,
    I2: IntoIterator<Item = I1::Item>,
    O: OutputCursor<I1::Item>,
    F: FnMut(&I1::Item, &I1::Item) -> Ordering,
{
    let mut a = a.into_iter().peekable();
    let mut b = b.into_iter().peekable();

    loop {
        let item = match compare_heads(&mut a, &mut b, &mut compare) {
            Next::A => a.next(),
            Next::B => b.next(),
            Next::Both => {
                b.next();
                a.next()
            }
            Next::Done => break,
        };
        if let Some(item) = item {
            out.put(item);
        }
    }
    out
}

/// Writes every element of `a` that is also found in `b` to `out`. An element present `m` times
/// in `a` and `n` times in `b` is written `min(m, n)` times.
///
/// # Examples
/// ```
/// # use sequence_lib::algorithm::set_intersection;
/// let common = set_intersection([1, 2, 2, 3, 5], [2, 2, 4, 5], Vec::new());
/// assert_eq!(common, [2, 2, 5]);
/// ```
pub fn set_intersection<I1, I2, O>(a: I1, b: I2, out: O) -> O
where
    I1: IntoIterator,
    I2: IntoIterator<Item = I1::Item>,
    I1::Item: Ord,
    O: OutputCursor<I1::Item>,
{
    set_intersection_by(a, b, out, Ord::cmp)
}

/// [`set_intersection`] with a custom ordering.
pub fn set_intersection_by<I1, I2, O, F>(a: I1, b: I2, mut out: O, mut compare: F) -> O
where
    I1: IntoIterator,
    I2: IntoIterator<Item = I1::Item>,
    O: OutputCursor<I1::Item>,
    F: FnMut(&I1::Item, &I1::Item) -> Ordering,
{
    let mut a = a.into_iter().peekable();
    let mut b = b.into_iter().peekable();

    loop {
        match compare_heads(&mut a, &mut b, &mut compare) {
            Next::A => {
                a.next();
            }
            Next::B => {
                b.next();
            }
            Next::Both => {
                b.next();
                if let Some(item) = a.next() {
                    out.put(item);
                }
            }
            Next::Done => break,
        }
        if a.peek().is_none() || b.peek().is_none() {
            break;
        }
    }
    out
}

/// Writes every element of `a` that is not found in `b` to `out`. An element present `m` times
/// in `a` and `n` times in `b` is written `m - n` times, if that is positive.
pub fn set_difference<I1, I2, O>(a: I1, b: I2, out: O) -> O
where
    I1: IntoIterator,
    I2: IntoIterator<Item = I1::Item>,
    I1::Item: Ord,
    O: OutputCursor<I1::Item>,
{
    set_difference_by(a, b, out, Ord::cmp)
}

/// [`set_difference`] with a custom ordering.
pub fn set_difference_by<I1, I2, O, F>(a: I1, b: I2, mut out: O, mut compare: F) -> O
where
    I1: IntoIterator,
    I2: IntoIterator<Item = I1::Item>,
    O: OutputCursor<I1::Item>,
    F: FnMut(&I1::Item, &I1::Item) -> Ordering,
{
    let mut a = a.into_iter().peekable();
    let mut b = b.into_iter().peekable();

    loop {
        match compare_heads(&mut a, &mut b, &mut compare) {
            Next::A => {
                if let Some(item) = a.next() {
                    out.put(item);
                }
            }
            Next::B => {
                if a.peek().is_none() {
                    break;
                }
                b.next();
            }
            Next::Both => {
                a.next();
                b.next();
            }
            Next::Done => break,
        }
    }
    out
}

/// Writes every element found in exactly one of the sorted inputs to `out`. An element present
/// `m` times in `a` and `n` times in `b` is written `|m - n|` times.
///
/// # Examples
/// ```
/// # use sequence_lib::algorithm::set_symmetric_difference;
/// let odd_ones = set_symmetric_difference([1, 2, 3, 4], [3, 4, 5], Vec::new());
/// assert_eq!(odd_ones, [1, 2, 5]);
/// ```
pub fn set_symmetric_difference<I1, I2, O>(a: I1, b: I2, out: O) -> O
where
    I1: IntoIterator,
    I2: IntoIterator<Item = I1::Item>,
    I1::Item: Ord,
    O: OutputCursor<I1::Item>,
{
    set_symmetric_difference_by(a, b, out, Ord::cmp)
}

/// [`set_symmetric_difference`] with a custom ordering.
pub fn set_symmetric_difference_by<I1, I2, O, F>(a: I1, b: I2, mut out: O, mut compare: F) -> O
where
    I1: IntoIterator,
    I2: IntoIterator<Item = I1::Item>,
    O: OutputCursor<I1::Item>,
    F: FnMut(&I1::Item, &I1::Item) -> Ordering,
{
    let mut a = a.into_iter().peekable();
    let mut b = b.into_iter().peekable();

    loop {
        let item = match compare_heads(&mut a, &mut b, &mut compare) {
            Next::A => a.next(),
            Next::B => b.next(),
            Next::Both => {
                a.next();
                b.next();
                None
            }
            Next::Done => break,
        };
        if let Some(item) = item {
            out.put(item);
        }
    }
    out
}

/// Returns true if every element of the sorted input `b` is found in the sorted input `a`, with
/// at least as many occurrences.
pub fn includes<I1, I2>(a: I1, b: I2) -> bool
where
    I1: IntoIterator,
    I2: IntoIterator<Item = I1::Item>,
    I1::Item: Ord,
{
    includes_by(a, b, Ord::cmp)
}

/// [`includes`] with a custom ordering.
pub fn includes_by<I1, I2, F>(a: I1, b: I2, mut compare: F) -> bool
where
    I1: IntoIterator,
    I2: IntoIterator<Item = I1::Item>,
    F: FnMut(&I1::Item, &I1::Item) -> Ordering,
{
    let mut a = a.into_iter().peekable();
    let mut b = b.into_iter().peekable();

    loop {
        match compare_heads(&mut a, &mut b, &mut compare) {
            Next::A => {
                a.next();
            }
            Next::B => return false,
            Next::Both => {
                a.next();
                b.next();
            }
            Next::Done => return true,
        }
        if b.peek().is_none() {
            return true;
        }
    }
}
