use std::cmp::Ordering;
use std::ops::Range;

use super::partition_point;

/// Returns the index of the first element of the sorted `slice` that is not less than `value`.
///
/// # Examples
/// ```
/// # use sequence_lib::algorithm::{lower_bound, upper_bound};
/// let values = [1, 2, 2, 2, 5];
/// assert_eq!(lower_bound(&values, &2), 1);
/// assert_eq!(upper_bound(&values, &2), 4);
/// assert_eq!(lower_bound(&values, &9), 5);
/// ```
pub fn lower_bound<T: Ord>(slice: &[T], value: &T) -> usize {
    lower_bound_by(slice, value, Ord::cmp)
}

/// [`lower_bound`] for a slice sorted by `compare`.
pub fn lower_bound_by<T, F>(slice: &[T], value: &T, mut compare: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    partition_point(slice, |el| compare(el, value).is_lt())
}

/// Returns the index of the first element of the sorted `slice` that is greater than `value`.
pub fn upper_bound<T: Ord>(slice: &[T], value: &T) -> usize {
    upper_bound_by(slice, value, Ord::cmp)
}

/// [`upper_bound`] for a slice sorted by `compare`.
pub fn upper_bound_by<T, F>(slice: &[T], value: &T, mut compare: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    partition_point(slice, |el| !compare(value, el).is_lt())
}

/// Returns the range of elements of the sorted `slice` that are equivalent to `value`.
pub fn equal_range<T: Ord>(slice: &[T], value: &T) -> Range<usize> {
    equal_range_by(slice, value, Ord::cmp)
}

/// [`equal_range`] for a slice sorted by `compare`.
pub fn equal_range_by<T, F>(slice: &[T], value: &T, mut compare: F) -> Range<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let start = lower_bound_by(slice, value, &mut compare);
    let end = start + upper_bound_by(&slice[start..], value, &mut compare);
    start..end
}

/// Returns true if the sorted `slice` contains an element equivalent to `value`.
pub fn binary_search<T: Ord>(slice: &[T], value: &T) -> bool {
    binary_search_by(slice, value, Ord::cmp)
}

/// [`binary_search`] for a slice sorted by `compare`.
pub fn binary_search_by<T, F>(slice: &[T], value: &T, mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    let index = lower_bound_by(slice, value, &mut compare);
    slice.get(index).is_some_and(|el| !compare(value, el).is_lt())
}

/// Returns true if the elements of `slice` are in non-descending order.
pub fn is_sorted<T: Ord>(slice: &[T]) -> bool {
    is_sorted_until(slice) == slice.len()
}

/// Returns the length of the longest sorted prefix of `slice`.
pub fn is_sorted_until<T: Ord>(slice: &[T]) -> usize {
    is_sorted_until_by(slice, Ord::cmp)
}

/// [`is_sorted_until`] with a custom ordering.
pub fn is_sorted_until_by<T, F>(slice: &[T], mut compare: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    slice
        .windows(2)
        .position(|pair| compare(&pair[1], &pair[0]).is_lt())
        .map_or(slice.len(), |i| i + 1)
}

/// Returns true if both inputs have the same length and equal items at every position.
pub fn equal<I1, I2>(a: I1, b: I2) -> bool
where
    I1: IntoIterator,
    I2: IntoIterator,
    I1::Item: PartialEq<I2::Item>,
{
    let mut b = b.into_iter();
    for x in a {
        match b.next() {
            Some(y) if x == y => (),
            _ => return false,
        }
    }
    b.next().is_none()
}

/// Returns the first index at which `a` and `b` differ, or the length of the shorter slice if one
/// is a prefix of the other.
pub fn mismatch<T: PartialEq<U>, U>(a: &[T], b: &[U]) -> usize {
    a.iter()
        .zip(b)
        .position(|(x, y)| x != y)
        .unwrap_or(a.len().min(b.len()))
}

/// Returns true if `a` is lexicographically less than `b`: the first differing items decide, and
/// if there are none the shorter input is less.
///
/// # Examples
/// ```
/// # use sequence_lib::algorithm::lexicographical_compare;
/// assert!(lexicographical_compare([1, 2], [1, 2, 0]));
/// assert!(lexicographical_compare([1, 2, 3], [1, 3]));
/// assert!(!lexicographical_compare([1, 2], [1, 2]));
/// ```
pub fn lexicographical_compare<I1, I2>(a: I1, b: I2) -> bool
where
    I1: IntoIterator,
    I2: IntoIterator<Item = I1::Item>,
    I1::Item: PartialOrd,
{
    lexicographical_compare_by(a, b, |x, y| x < y)
}

/// [`lexicographical_compare`] with a custom strict weak order, given as a less-than function.
pub fn lexicographical_compare_by<I1, I2, F>(a: I1, b: I2, mut less: F) -> bool
where
    I1: IntoIterator,
    I2: IntoIterator<Item = I1::Item>,
    F: FnMut(&I1::Item, &I1::Item) -> bool,
{
    let mut b = b.into_iter();
    for x in a {
        let Some(y) = b.next() else {
            return false;
        };
        if less(&x, &y) {
            return true;
        }
        if less(&y, &x) {
            return false;
        }
    }
    b.next().is_some()
}

/// Compares two inputs lexicographically with a total order.
pub fn lexicographical_cmp_by<I1, I2, F>(a: I1, b: I2, mut compare: F) -> Ordering
where
    I1: IntoIterator,
    I2: IntoIterator<Item = I1::Item>,
    F: FnMut(&I1::Item, &I1::Item) -> Ordering,
{
    let mut b = b.into_iter();
    for x in a {
        let Some(y) = b.next() else {
            return Ordering::Greater;
        };
        match compare(&x, &y) {
            Ordering::Equal => (),
            decided => return decided,
        }
    }
    if b.next().is_some() {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}
