use std::ptr;

use super::{move_backward, move_range};
use crate::error::IndexOutOfBounds;
use crate::iter::{
    BidirectionalCursor, Cursor, OutputCursor, RandomAccessCursor, RawCursor, distance, next,
};
use crate::util::result::ResultExtension;

/// Rotates `slice` in place so that the element at `mid` becomes the first, returning the new
/// index of the element that was first.
///
/// # Panics
/// Panics if `mid` is greater than the length of the slice.
///
/// # Examples
/// ```
/// # use sequence_lib::algorithm::rotate;
/// let mut values = [1, 2, 3, 4, 5];
/// assert_eq!(rotate(&mut values, 2), 3);
/// assert_eq!(values, [3, 4, 5, 1, 2]);
/// ```
pub fn rotate<T>(slice: &mut [T], mid: usize) -> usize {
    if mid > slice.len() {
        Err(IndexOutOfBounds {
            index: mid,
            len: slice.len(),
        })
        .throw()
    }

    let (first, last) = RawCursor::range(slice);
    // SAFETY: All three cursors are within the slice, in order.
    unsafe { rotate_range(first, RawCursor::new(first.base, mid), last).index }
}

/// Exchanges the ranges `[first, middle)` and `[middle, last)`, so that `middle` becomes the
/// first element, and returns the cursor to the new position of the element at `first`.
///
/// The strategy is chosen from the cursor's category:
/// - A rotation by one element is a single shift, for every category that supports it (left
///   shifts need forward cursors and right shifts bidirectional ones).
/// - Random access cursors follow the cycles of the rotation, of which there are
///   `gcd(middle - first, last - middle)`, moving every element exactly once. When the two
///   halves are the same length they are swapped instead.
/// - Everything else uses the forward swapping algorithm.
///
/// If `middle == first`, nothing moves and `last` is returned, if `middle == last`, `first` is
/// returned.
///
/// # Safety
/// The three cursors must belong to one range of live elements, with `middle` reachable from
/// `first` and `last` reachable from `middle`.
pub unsafe fn rotate_range<C: Cursor>(first: C, middle: C, last: C) -> C {
    if first == middle {
        return last;
    }
    if middle == last {
        return first;
    }

    // SAFETY: Forwarded from the caller.
    unsafe { C::spec_rotate(first, middle, last) }
}

/// Writes the elements of `slice` starting at `mid` to `out`, followed by the elements before
/// `mid`, as if the slice were rotated. The slice is left untouched.
///
/// # Panics
/// Panics if `mid` is greater than the length of the slice.
pub fn rotate_copy<T: Clone, O: OutputCursor<T>>(slice: &[T], mid: usize, mut out: O) -> O {
    if mid > slice.len() {
        Err(IndexOutOfBounds {
            index: mid,
            len: slice.len(),
        })
        .throw()
    }

    for item in slice[mid..].iter().chain(&slice[..mid]) {
        out.put(item.clone());
    }
    out
}

/// Reverses the order of the elements in `slice`.
pub fn reverse<T>(slice: &mut [T]) {
    let (first, last) = RawCursor::range(slice);
    // SAFETY: Both cursors describe the slice.
    unsafe { reverse_range(first, last) }
}

/// Reverses the order of the elements in `[first, last)`.
///
/// # Safety
/// `[first, last)` must be a range of live elements.
pub unsafe fn reverse_range<C: BidirectionalCursor>(mut first: C, mut last: C) {
    while first != last {
        last.step_back();
        if first == last {
            break;
        }
        // SAFETY: Both slots are live and distinct.
        unsafe { ptr::swap(first.slot(), last.slot()) }
        first.step();
    }
}

/// Writes the elements of `slice` to `out` in reverse order.
pub fn reverse_copy<T: Clone, O: OutputCursor<T>>(slice: &[T], mut out: O) -> O {
    for item in slice.iter().rev() {
        out.put(item.clone());
    }
    out
}

/// Moves the first element to the back, shifting the rest left by one.
unsafe fn rotate_left<C: Cursor>(first: C, last: C) -> C {
    // SAFETY: first is live. Its slot is overwritten by the shift before anything reads it again.
    let head = unsafe { first.slot().read() };
    // SAFETY: The destination starts before the source.
    let back = unsafe { move_range(next(&first, 1), last, first) };
    // SAFETY: The last slot was vacated by the shift.
    unsafe { back.slot().write(head) }
    back
}

/// Moves the last element to the front, shifting the rest right by one.
unsafe fn rotate_right<C: BidirectionalCursor>(first: C, last: C) -> C {
    let mut back = last.clone();
    back.step_back();
    // SAFETY: back is live. Its slot is overwritten by the shift before anything reads it again.
    let tail = unsafe { back.slot().read() };
    // SAFETY: The destination ends after the source.
    let result = unsafe { move_backward(first.clone(), back, last) };
    // SAFETY: The first slot was vacated by the shift.
    unsafe { first.slot().write(tail) }
    result
}

unsafe fn rotate_forward<C: Cursor>(mut first: C, mut middle: C, last: C) -> C {
    let mut i = middle.clone();
    loop {
        // SAFETY: first comes before i, both live.
        unsafe { ptr::swap(first.slot(), i.slot()) }
        first.step();
        i.step();
        if i == last {
            break;
        }
        if first == middle {
            middle = i.clone();
        }
    }

    let result = first.clone();
    if first != middle {
        i = middle.clone();
        loop {
            // SAFETY: first comes before i, both live.
            unsafe { ptr::swap(first.slot(), i.slot()) }
            first.step();
            i.step();
            if i == last {
                if first == middle {
                    break;
                }
                i = middle.clone();
            } else if first == middle {
                middle = i.clone();
            }
        }
    }
    result
}

const fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

unsafe fn rotate_gcd<C: RandomAccessCursor>(first: C, middle: C, last: C) -> C {
    let m1 = first.distance_to(&middle);
    let m2 = middle.distance_to(&last);

    if m1 == m2 {
        let (mut a, mut b) = (first, middle.clone());
        while a != middle {
            // SAFETY: a and b are in different halves, both live.
            unsafe { ptr::swap(a.slot(), b.slot()) }
            a.step();
            b.step();
        }
        return middle;
    }

    let cycles = gcd(m1 as usize, m2 as usize) as isize;
    let mut p = first.offset(cycles);
    while p != first {
        p.step_back();
        // SAFETY: Every slot of the cycle is read once before being overwritten, and the final
        // hole is filled with the value taken here.
        let held = unsafe { p.slot().read() };
        let mut p1 = p.clone();
        let mut p2 = p1.offset(m1);
        loop {
            // SAFETY: p2 is live and p1 was vacated.
            unsafe { p1.slot().write(p2.slot().read()) }
            p1 = p2.clone();
            let d = p2.distance_to(&last);
            p2 = if m1 < d {
                p2.offset(m1)
            } else {
                first.offset(m1 - d)
            };
            if p2 == p {
                break;
            }
        }
        // SAFETY: p1 is the last slot vacated in the cycle.
        unsafe { p1.slot().write(held) }
    }

    first.offset(m2)
}

trait SpecRotate: Cursor {
    unsafe fn spec_rotate(first: Self, middle: Self, last: Self) -> Self;
}

impl<C: Cursor> SpecRotate for C {
    default unsafe fn spec_rotate(first: C, middle: C, last: C) -> C {
        // SAFETY: Forwarded from the caller, who ensures that neither half is empty.
        unsafe {
            if next(&first, 1) == middle {
                rotate_left(first, last)
            } else {
                rotate_forward(first, middle, last)
            }
        }
    }
}

impl<C: BidirectionalCursor> SpecRotate for C {
    default unsafe fn spec_rotate(first: C, middle: C, last: C) -> C {
        // SAFETY: Forwarded from the caller, who ensures that neither half is empty.
        unsafe {
            if next(&first, 1) == middle {
                rotate_left(first, last)
            } else if next(&middle, 1) == last {
                rotate_right(first, last)
            } else {
                rotate_forward(first, middle, last)
            }
        }
    }
}

impl<C: RandomAccessCursor> SpecRotate for C {
    unsafe fn spec_rotate(first: C, middle: C, last: C) -> C {
        // SAFETY: Forwarded from the caller, who ensures that neither half is empty.
        unsafe {
            if distance(&first, &middle) == 1 {
                rotate_left(first, last)
            } else if distance(&middle, &last) == 1 {
                rotate_right(first, last)
            } else {
                rotate_gcd(first, middle, last)
            }
        }
    }
}
