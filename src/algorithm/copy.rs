use std::ops::Range;
use std::ptr;

use crate::error::{IndexOutOfBounds, OutputExhausted};
use crate::iter::{BidirectionalCursor, Cursor, OutputCursor, RawCursor};
use crate::util::result::ResultExtension;

/// Clones every element of `src` over the start of `dest`, returning the number of elements
/// written.
///
/// When `T` is [`Copy`], std's `clone_from_slice` makes this a single bulk memory copy instead of
/// a loop.
///
/// # Panics
/// Panics if `dest` is shorter than `src`.
///
/// # Examples
/// ```
/// # use sequence_lib::algorithm::copy;
/// let mut dest = [0; 4];
/// assert_eq!(copy(&[1, 2, 3], &mut dest), 3);
/// assert_eq!(dest, [1, 2, 3, 0]);
/// ```
pub fn copy<T: Clone>(src: &[T], dest: &mut [T]) -> usize {
    if dest.len() < src.len() {
        Err(OutputExhausted).throw()
    }

    dest[..src.len()].clone_from_slice(src);
    src.len()
}

/// Clones the first `n` elements of `src` over the start of `dest`.
///
/// # Panics
/// Panics if `src` has less than `n` elements or `dest` is too short to hold them.
pub fn copy_n<T: Clone>(src: &[T], n: usize, dest: &mut [T]) -> usize {
    if n > src.len() {
        Err(IndexOutOfBounds {
            index: n,
            len: src.len(),
        })
        .throw()
    }

    copy(&src[..n], dest)
}

/// Clones the elements in `src` to the position starting at `dest` within the same slice,
/// returning the index one past the last element written.
///
/// The ranges may overlap. Elements are copied front to back when the destination comes first
/// and back to front when it comes second, so every element is read before it is overwritten.
/// When `T` is [`Copy`], each non-overlapping chunk is a bulk memory copy.
///
/// # Panics
/// Panics if either range is out of bounds of the slice.
///
/// # Examples
/// ```
/// # use sequence_lib::algorithm::copy_within;
/// let mut word = *b"abcdefg";
/// copy_within(&mut word, 0..3, 1);
/// assert_eq!(&word, b"aabcefg");
/// ```
pub fn copy_within<T: Clone>(slice: &mut [T], src: Range<usize>, dest: usize) -> usize {
    let len = slice.len();
    if src.start > src.end || src.end > len {
        Err(IndexOutOfBounds {
            index: src.end,
            len,
        })
        .throw()
    }

    let count = src.end - src.start;
    let dest_end = dest.checked_add(count).unwrap_or(usize::MAX);
    if dest_end > len {
        Err(IndexOutOfBounds {
            index: dest_end,
            len,
        })
        .throw()
    }

    clone_within(slice, src.start, dest, count);
    dest_end
}

/// Clones the elements in `src` so that the last one lands just before `dest_end`, returning the
/// index of the first element written. Overlap is handled as in [`copy_within`].
///
/// # Panics
/// Panics if either range is out of bounds of the slice.
pub fn copy_backward_within<T: Clone>(
    slice: &mut [T],
    src: Range<usize>,
    dest_end: usize,
) -> usize {
    let count = src.end.saturating_sub(src.start);
    let Some(dest) = dest_end.checked_sub(count) else {
        return Err(IndexOutOfBounds {
            index: dest_end,
            len: count,
        })
        .throw();
    };

    copy_within(slice, src, dest);
    dest
}

/// Writes every item of `src` to `out`, returning the output cursor.
pub fn copy_iter<I, O>(src: I, mut out: O) -> O
where
    I: IntoIterator,
    O: OutputCursor<I::Item>,
{
    for item in src {
        out.put(item);
    }
    out
}

/// Writes the items of `src` for which `pred` returns true to `out`, returning the output
/// cursor.
pub fn copy_if<I, O, P>(src: I, mut out: O, mut pred: P) -> O
where
    I: IntoIterator,
    O: OutputCursor<I::Item>,
    P: FnMut(&I::Item) -> bool,
{
    for item in src {
        if pred(&item) {
            out.put(item);
        }
    }
    out
}

/// Assigns `value` to every element of `slice`.
///
/// Single byte types ([`u8`], [`i8`] and [`bool`]) are filled with one memset.
///
/// # Examples
/// ```
/// # use sequence_lib::algorithm::fill;
/// let mut buf = [0u8; 4];
/// fill(&mut buf, 7);
/// assert_eq!(buf, [7; 4]);
/// ```
pub fn fill<T: Clone>(slice: &mut [T], value: T) {
    slice.spec_fill(value);
}

/// Assigns `value` to the first `n` elements of `dest`, returning `n`.
///
/// # Panics
/// Panics if `dest` has less than `n` elements.
pub fn fill_n<T: Clone>(dest: &mut [T], n: usize, value: T) -> usize {
    let len = dest.len();
    let Some(target) = dest.get_mut(..n) else {
        return Err(IndexOutOfBounds { index: n, len }).throw();
    };

    fill(target, value);
    n
}

/// Exchanges the elements of `a` with those at the same index in `b`, returning the number of
/// elements swapped.
///
/// # Panics
/// Panics if `b` is shorter than `a`.
pub fn swap_ranges<T>(a: &mut [T], b: &mut [T]) -> usize {
    if b.len() < a.len() {
        Err(OutputExhausted).throw()
    }

    a.swap_with_slice(&mut b[..a.len()]);
    a.len()
}

/// Relocates the elements in `[first, last)` to the slots starting at `d_first`, front to back,
/// and returns the cursor one past the last slot written.
///
/// Relocation is a bitwise move: afterwards the source slots are logically uninitialized, unless
/// they were overwritten as part of the destination.
///
/// # Safety
/// `[first, last)` must be a valid range of live elements and the destination must be valid for
/// writes of as many slots. Any live elements in the destination are overwritten without being
/// dropped. The destination may only overlap the source if it starts at or before `first`.
pub unsafe fn move_range<C: Cursor>(first: C, last: C, d_first: C) -> C {
    // SAFETY: Forwarded from the caller.
    unsafe { C::spec_move(first, last, d_first) }
}

/// Relocates the elements in `[first, last)` to the slots ending just before `d_last`, back to
/// front, and returns the cursor to the first slot written.
///
/// # Safety
/// As for [`move_range`], except that the destination may only overlap the source if it ends at
/// or after `last`. This is the direction needed to shift a tail right within one buffer.
pub unsafe fn move_backward<C: BidirectionalCursor>(first: C, last: C, d_last: C) -> C {
    // SAFETY: Forwarded from the caller.
    unsafe { C::spec_move_backward(first, last, d_last) }
}

/// Clones `count` elements from `src` to `dest` within `slice`, in chunks that never overlap.
///
/// Each chunk is at most as long as the distance between the two ranges, so it can be split off
/// and handed to `clone_from_slice`, which std turns into a memcpy for [`Copy`] types. Chunks are
/// taken front to back when `dest` comes first and back to front otherwise, so every element is
/// read before it is overwritten.
fn clone_within<T: Clone>(slice: &mut [T], src: usize, dest: usize, count: usize) {
    if dest < src {
        let step = src - dest;
        let mut done = 0;
        while done < count {
            let n = step.min(count - done);
            let (head, tail) = slice.split_at_mut(src + done);
            head[dest + done..dest + done + n].clone_from_slice(&tail[..n]);
            done += n;
        }
    } else if dest > src {
        let step = dest - src;
        let mut remaining = count;
        while remaining > 0 {
            let n = step.min(remaining);
            let start = remaining - n;
            let (head, tail) = slice.split_at_mut(dest + start);
            tail[..n].clone_from_slice(&head[src + start..src + start + n]);
            remaining = start;
        }
    }
}

trait SpecFill<T> {
    fn spec_fill(&mut self, value: T);
}

impl<T: Clone> SpecFill<T> for [T] {
    default fn spec_fill(&mut self, value: T) {
        if let Some((last, elems)) = self.split_last_mut() {
            for el in elems {
                el.clone_from(&value);
            }

            *last = value
        }
    }
}

impl SpecFill<u8> for [u8] {
    fn spec_fill(&mut self, value: u8) {
        // SAFETY: Any byte is a valid u8.
        unsafe { ptr::write_bytes(self.as_mut_ptr(), value, self.len()) }
    }
}

impl SpecFill<i8> for [i8] {
    fn spec_fill(&mut self, value: i8) {
        // SAFETY: Any byte is a valid i8.
        unsafe { ptr::write_bytes(self.as_mut_ptr(), value as u8, self.len()) }
    }
}

impl SpecFill<bool> for [bool] {
    fn spec_fill(&mut self, value: bool) {
        // SAFETY: The byte is either 0 or 1, both valid bools.
        unsafe { ptr::write_bytes(self.as_mut_ptr().cast::<u8>(), value as u8, self.len()) }
    }
}

trait SpecMove: Cursor {
    unsafe fn spec_move(first: Self, last: Self, d_first: Self) -> Self;
}

impl<C: Cursor> SpecMove for C {
    default unsafe fn spec_move(mut first: C, last: C, mut d_first: C) -> C {
        while first != last {
            // SAFETY: The source slot is live and the destination is valid for writes.
            unsafe { d_first.slot().write(first.slot().read()) }
            first.step();
            d_first.step();
        }
        d_first
    }
}

impl<T> SpecMove for RawCursor<T> {
    unsafe fn spec_move(first: Self, last: Self, d_first: Self) -> Self {
        let count = last.index - first.index;
        // SAFETY: Both ranges are valid for count elements. ptr::copy handles overlap in either
        // direction.
        unsafe { ptr::copy(first.slot(), d_first.slot(), count) }
        RawCursor::new(d_first.base, d_first.index + count)
    }
}

trait SpecMoveBackward: BidirectionalCursor {
    unsafe fn spec_move_backward(first: Self, last: Self, d_last: Self) -> Self;
}

impl<C: BidirectionalCursor> SpecMoveBackward for C {
    default unsafe fn spec_move_backward(first: C, mut last: C, mut d_last: C) -> C {
        while first != last {
            last.step_back();
            d_last.step_back();
            // SAFETY: The source slot is live and the destination is valid for writes.
            unsafe { d_last.slot().write(last.slot().read()) }
        }
        d_last
    }
}

impl<T> SpecMoveBackward for RawCursor<T> {
    unsafe fn spec_move_backward(first: Self, last: Self, d_last: Self) -> Self {
        let count = last.index - first.index;
        let d_first = RawCursor::new(d_last.base, d_last.index - count);
        // SAFETY: Both ranges are valid for count elements. ptr::copy handles overlap in either
        // direction.
        unsafe { ptr::copy(first.slot(), d_first.slot(), count) }
        d_first
    }
}
