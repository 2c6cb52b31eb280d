use std::cmp::Ordering;

use super::reverse;

/// Rearranges `slice` into the next lexicographically greater permutation, returning true. If
/// the slice is already the greatest permutation, it is reset to the smallest (sorted) one and
/// false is returned.
///
/// # Examples
/// ```
/// # use sequence_lib::algorithm::next_permutation;
/// let mut values = [1, 2, 3];
/// assert!(next_permutation(&mut values));
/// assert_eq!(values, [1, 3, 2]);
///
/// let mut values = [3, 2, 1];
/// assert!(!next_permutation(&mut values));
/// assert_eq!(values, [1, 2, 3]);
/// ```
pub fn next_permutation<T: Ord>(slice: &mut [T]) -> bool {
    next_permutation_by(slice, Ord::cmp)
}

/// [`next_permutation`] with a custom ordering.
pub fn next_permutation_by<T, F>(slice: &mut [T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    step_permutation(slice, |a, b| compare(a, b).is_lt())
}

/// Rearranges `slice` into the next lexicographically smaller permutation, returning true. If
/// the slice is already the smallest permutation, it is reset to the greatest (reverse sorted)
/// one and false is returned.
pub fn prev_permutation<T: Ord>(slice: &mut [T]) -> bool {
    prev_permutation_by(slice, Ord::cmp)
}

/// [`prev_permutation`] with a custom ordering.
pub fn prev_permutation_by<T, F>(slice: &mut [T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    step_permutation(slice, |a, b| compare(a, b).is_gt())
}

/// Steps to the next permutation in the order where `before(a, b)` means `a` sorts first.
fn step_permutation<T, F>(slice: &mut [T], mut before: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    if slice.len() < 2 {
        return false;
    }

    // The longest suffix in reverse order starts at pivot + 1.
    let Some(pivot) = (0..slice.len() - 1).rev().find(|&i| before(&slice[i], &slice[i + 1]))
    else {
        reverse(slice);
        return false;
    };

    let mut swap_with = slice.len() - 1;
    while !before(&slice[pivot], &slice[swap_with]) {
        swap_with -= 1;
    }

    slice.swap(pivot, swap_with);
    reverse(&mut slice[pivot + 1..]);
    true
}

/// Returns true if `b` contains the same elements as `a`, with the same number of occurrences,
/// in any order.
///
/// # Examples
/// ```
/// # use sequence_lib::algorithm::is_permutation;
/// assert!(is_permutation(&[1, 2, 2, 3], &[2, 3, 1, 2]));
/// assert!(!is_permutation(&[1, 2, 2], &[1, 1, 2]));
/// ```
pub fn is_permutation<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    is_permutation_by(a, b, PartialEq::eq)
}

/// [`is_permutation`] with a custom equivalence.
pub fn is_permutation_by<T, F>(a: &[T], b: &[T], mut eq: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    if a.len() != b.len() {
        return false;
    }

    let common = a.iter().zip(b).take_while(|(x, y)| eq(x, y)).count();
    let (a, b) = (&a[common..], &b[common..]);

    for (i, item) in a.iter().enumerate() {
        if a[..i].iter().any(|seen| eq(seen, item)) {
            continue;
        }

        let in_b = b.iter().filter(|other| eq(item, other)).count();
        if in_b == 0 || in_b != a[i..].iter().filter(|other| eq(item, other)).count() {
            return false;
        }
    }
    true
}
