use std::iter::TrustedLen;
use std::mem;
use std::ops::Range;
use std::ptr;

use super::Vector;
use crate::algorithm::{move_range, rotate};
use crate::alloc::AllocStrategy;
use crate::collections::contiguous::buffer::Construct;
use crate::error::{CapacityOverflow, IndexOutOfBounds, TryReserveError};
use crate::iter::RawCursor;
use crate::util::result::{ReserveResultExtension, ResultExtension};

/// The location of a Vector's original elements while a gap is being filled.
///
/// When the gap is opened in place, every element from `index` onward has been moved `count`
/// slots to the right. When the Vector is reallocating, nothing has moved yet and `count` is 0.
#[derive(Debug)]
pub(crate) struct Shifted<T> {
    base: *mut T,
    index: usize,
    count: usize,
}

impl<T> Shifted<T> {
    /// Returns the current address of the element that was at position `i` before the gap was
    /// opened.
    pub(crate) const fn element(&self, i: usize) -> *const T {
        if i < self.index {
            self.base.wrapping_add(i)
        } else {
            self.base.wrapping_add(i + self.count)
        }
    }
}

/// Moves the `tail` elements at `src` back to `dest` when dropped, and sets the length to cover
/// them. Used to close a gap, both after erasing and when filling a gap panics.
struct ShiftTail<'a, T> {
    base: *mut T,
    dest: usize,
    src: usize,
    tail: usize,
    len: &'a mut usize,
}

impl<'a, T> ShiftTail<'a, T> {
    /// Accepts the gap as filled, so the tail stays where it is.
    fn keep(self) {
        *self.len = self.src + self.tail;
        mem::forget(self);
    }
}

impl<'a, T> Drop for ShiftTail<'a, T> {
    fn drop(&mut self) {
        // SAFETY: The slots between dest and src are vacant and the tail is live.
        unsafe { ptr::copy(self.base.add(self.src), self.base.add(self.dest), self.tail) }
        *self.len = self.dest + self.tail;
    }
}

impl<T, A: AllocStrategy<T>> Vector<T, A> {
    /// Inserts `count` elements at `index`, shifting every element after it to the right.
    ///
    /// `fill` receives a [`Construct`] positioned at the first of `count` vacant slots and must
    /// push exactly `count` elements into it, unless it panics. Anything it pushed before a panic
    /// is destroyed again. It is also told where the original elements are, so that it can read
    /// from the Vector itself.
    ///
    /// If the Vector has to reallocate, the new elements are constructed in the new buffer before
    /// anything else happens, so a panic leaves the Vector untouched. Otherwise, a panic moves the
    /// tail back, restoring the original contents.
    pub(crate) fn try_splice<F>(
        &mut self,
        index: usize,
        count: usize,
        fill: F,
    ) -> Result<(), TryReserveError>
    where
        F: FnOnce(&mut Construct<'_, T, A>, Shifted<T>),
    {
        debug_assert!(index <= self.len);
        let required = self.len.checked_add(count).ok_or(CapacityOverflow)?;
        let base = self.buf.ptr.as_ptr();
        let tail = self.len - index;

        if required > self.cap() {
            let new_cap = self.planned_cap(required)?;
            let fresh = self.buf.try_allocate(new_cap)?;
            let dest = fresh.ptr.as_ptr();

            // SAFETY: The new allocation has room for required elements and is distinct from the
            // old one. Both halves of the old contents are relocated around the new elements.
            unsafe {
                let mut slots = Construct::new(dest.add(index), &self.buf.alloc);
                fill(&mut slots, Shifted { base, index, count: 0 });
                let built = slots.finish();
                debug_assert_eq!(built, count);
                move_range(
                    RawCursor::new(base, 0),
                    RawCursor::new(base, index),
                    RawCursor::new(dest, 0),
                );
                move_range(
                    RawCursor::new(base, index),
                    RawCursor::new(base, self.len),
                    RawCursor::new(dest, index + count),
                );
            }

            let (ptr, cap) = fresh.into_parts();
            // SAFETY: Every element has been relocated out of the old memory.
            unsafe { self.buf.install(ptr, cap) };
            self.len = required;
        } else {
            // SAFETY: There is room for count more elements after the tail.
            unsafe { ptr::copy(base.add(index), base.add(index + count), tail) };

            let guard = ShiftTail {
                base,
                dest: index,
                src: index + count,
                tail,
                len: &mut self.len,
            };
            // SAFETY: The count slots from index are vacant.
            let mut slots = Construct::new(unsafe { base.add(index) }, &self.buf.alloc);
            fill(&mut slots, Shifted { base, index, count });
            let built = slots.finish();
            debug_assert_eq!(built, count);
            guard.keep();
        }

        Ok(())
    }

    /// Panics unless `index` is a valid insertion position.
    fn check_insert_index(&self, index: usize) {
        if index > self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
            .throw()
        }
    }

    /// Panics unless `range` lies within the Vector.
    fn check_range(&self, range: &Range<usize>) {
        if range.end > self.len {
            Err(IndexOutOfBounds {
                index: range.end,
                len: self.len,
            })
            .throw()
        }
        if range.start > range.end {
            Err(IndexOutOfBounds {
                index: range.start,
                len: range.end,
            })
            .throw()
        }
    }

    /// Inserts `value` at `index`, shifting every later element right by one. Returns the index
    /// of the inserted element.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length, or the Vector is full.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::vector;
    /// let mut vec = vector![1, 2, 4];
    /// assert_eq!(vec.insert(2, 3), 2);
    /// assert_eq!(&*vec, &[1, 2, 3, 4]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        self.try_insert(index, value).or_handle()
    }

    /// Fallible version of [`insert`](Vector::insert). If the Vector can't grow, the value is
    /// dropped and the Vector is left untouched.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<usize, TryReserveError> {
        self.check_insert_index(index);
        self.try_splice(index, 1, |slots, _| {
            // SAFETY: The slot is vacant.
            unsafe { slots.push(value) }
        })?;
        Ok(index)
    }

    /// Inserts the value returned by `f` at `index`. `f` is only called once the Vector has room.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length, or the Vector is full.
    pub fn insert_with<F: FnOnce() -> T>(&mut self, index: usize, f: F) -> usize {
        self.check_insert_index(index);
        self.try_splice(index, 1, |slots, _| {
            let value = f();
            // SAFETY: The slot is vacant.
            unsafe { slots.push(value) }
        })
        .or_handle();
        index
    }

    /// Inserts `count` clones of `value` at `index`. Returns the index of the first inserted
    /// element, which is `index` even if `count` is 0.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length, or the new length would exceed
    /// [`max_len`](Vector::max_len).
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::vector;
    /// let mut vec = vector!['a', 'd'];
    /// vec.insert_n(1, 2, 'x');
    /// assert_eq!(&*vec, &['a', 'x', 'x', 'd']);
    /// ```
    pub fn insert_n(&mut self, index: usize, count: usize, value: T) -> usize
    where
        T: Clone,
    {
        self.check_insert_index(index);
        if count != 0 {
            self.try_splice(index, count, |slots, _| {
                for _ in 1..count {
                    // SAFETY: The count slots are vacant.
                    unsafe { slots.push(value.clone()) }
                }
                // SAFETY: As above, for the last slot.
                unsafe { slots.push(value) }
            })
            .or_handle();
        }
        index
    }

    /// Inserts clones of every element of `values` at `index`, keeping their order.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length, or the new length would exceed
    /// [`max_len`](Vector::max_len).
    pub fn insert_from_slice(&mut self, index: usize, values: &[T]) -> usize
    where
        T: Clone,
    {
        self.check_insert_index(index);
        if !values.is_empty() {
            self.try_splice(index, values.len(), |slots, _| {
                for item in values {
                    // SAFETY: The slots are vacant and values can't overlap them.
                    unsafe { slots.push(item.clone()) }
                }
            })
            .or_handle();
        }
        index
    }

    /// Inserts every element produced by `iter` at `index`, keeping their order. Returns the
    /// index of the first inserted element.
    ///
    /// Iterators of trusted length are written straight into a gap of the right size. Others are
    /// appended one at a time and then rotated into place.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length, or the new length would exceed
    /// [`max_len`](Vector::max_len).
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::vector;
    /// let mut vec = vector![1, 5];
    /// vec.insert_iter(1, 2..5);
    /// vec.insert_iter(0, [-1, 0].into_iter().filter(|_| true));
    /// assert_eq!(&*vec, &[-1, 0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn insert_iter<I: IntoIterator<Item = T>>(&mut self, index: usize, iter: I) -> usize {
        self.check_insert_index(index);
        self.spec_insert_iter(index, iter.into_iter())
    }

    /// Inserts a clone of the element at `src` at `index`. The element is read before anything
    /// moves, so `src` is always the position before the insertion.
    ///
    /// # Panics
    /// Panics if `src` is out of bounds, `index` is greater than the length, or the Vector is
    /// full.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::vector;
    /// let mut vec = vector![1, 2, 3];
    /// vec.insert_from_within(0, 2);
    /// assert_eq!(&*vec, &[3, 1, 2, 3]);
    /// ```
    pub fn insert_from_within(&mut self, index: usize, src: usize) -> usize
    where
        T: Clone,
    {
        self.at(src).throw();
        self.insert_range_from_within(index, src..src + 1)
    }

    /// Inserts clones of the elements in `src` at `index`. The range may contain `index`, in
    /// which case the elements on either side of the insertion point are still cloned in their
    /// original order.
    ///
    /// # Panics
    /// Panics if `src` isn't within the Vector, `index` is greater than the length, or the new
    /// length would exceed [`max_len`](Vector::max_len).
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::vector;
    /// let mut vec = vector!['a', 'b', 'c', 'd'];
    /// vec.insert_range_from_within(2, 1..3);
    /// assert_eq!(&*vec, &['a', 'b', 'b', 'c', 'c', 'd']);
    /// ```
    pub fn insert_range_from_within(&mut self, index: usize, src: Range<usize>) -> usize
    where
        T: Clone,
    {
        self.check_insert_index(index);
        self.check_range(&src);

        let count = src.len();
        if count != 0 {
            self.try_splice(index, count, |slots, shifted| {
                for i in src {
                    // SAFETY: Every original element is live at its shifted address until the
                    // gap is closed, and the count slots are vacant.
                    unsafe { slots.push((*shifted.element(i)).clone()) }
                }
            })
            .or_handle();
        }
        index
    }

    /// Appends clones of the elements in `src`.
    ///
    /// # Panics
    /// Panics if `src` isn't within the Vector, or the new length would exceed
    /// [`max_len`](Vector::max_len).
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::vector;
    /// let mut vec = vector![0, 1, 2];
    /// vec.extend_from_within(..2);
    /// assert_eq!(&*vec, &[0, 1, 2, 0, 1]);
    /// ```
    pub fn extend_from_within<R: std::ops::RangeBounds<usize>>(&mut self, src: R)
    where
        T: Clone,
    {
        let src = std::slice::range(src, ..self.len);
        self.insert_range_from_within(self.len, src);
    }

    /// Removes and drops the element at `index`, shifting every later element left by one.
    /// Returns `index`, which is now the position of the element that followed the removed one.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::vector;
    /// let mut vec = vector![1, 2, 3];
    /// assert_eq!(vec.erase(0), 0);
    /// assert_eq!(&*vec, &[2, 3]);
    /// ```
    pub fn erase(&mut self, index: usize) -> usize {
        self.at(index).throw();
        self.erase_range(index..index + 1)
    }

    /// Removes and drops the elements in `range`, shifting every later element left. Returns
    /// `range.start`. An empty range does nothing.
    ///
    /// If dropping an element panics, the rest of the range is leaked, but the elements after it
    /// are still shifted into place.
    ///
    /// # Panics
    /// Panics if `range` isn't within the Vector.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::vector;
    /// let mut vec = vector![0, 1, 2, 3, 4, 5];
    /// assert_eq!(vec.erase_range(1..4), 1);
    /// assert_eq!(&*vec, &[0, 4, 5]);
    /// ```
    pub fn erase_range(&mut self, range: Range<usize>) -> usize {
        self.check_range(&range);
        if range.is_empty() {
            return range.start;
        }

        let base = self.buf.ptr.as_ptr();
        let guard = ShiftTail {
            base,
            dest: range.start,
            src: range.end,
            tail: self.len - range.end,
            len: &mut self.len,
        };
        for i in range.clone() {
            // SAFETY: Every slot in the range is live and is destroyed once.
            unsafe { self.buf.alloc.destroy(self.buf.ptr.add(i)) }
        }
        drop(guard);

        range.start
    }

    /// Removes the element at `index` and returns it, shifting every later element left by one.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        self.at(index).throw();

        let base = self.buf.ptr.as_ptr();
        // SAFETY: The slot at index is live. Reading it vacates the slot, which the tail is
        // then shifted over.
        unsafe {
            let value = base.add(index).read();
            ptr::copy(base.add(index + 1), base.add(index), self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Removes the element at `index` and returns it, replacing it with the last element.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::vector;
    /// let mut vec = vector![1, 2, 3, 4];
    /// assert_eq!(vec.swap_remove(0), 1);
    /// assert_eq!(&*vec, &[4, 2, 3]);
    /// ```
    pub fn swap_remove(&mut self, index: usize) -> T {
        self.at(index).throw();

        let last = self.len - 1;
        (**self).swap(index, last);
        self.len = last;
        // SAFETY: The slot at last held a live element, which is now moved out.
        unsafe { self.buf.ptr.add(last).read() }
    }
}

/// Drops whatever was appended after `old_len` when dropped, so that a panicking iterator leaves
/// the Vector as it was.
struct TruncateOnUnwind<'a, T, A: AllocStrategy<T>> {
    vec: &'a mut Vector<T, A>,
    old_len: usize,
}

impl<'a, T, A: AllocStrategy<T>> Drop for TruncateOnUnwind<'a, T, A> {
    fn drop(&mut self) {
        self.vec.truncate(self.old_len);
    }
}

trait SpecInsertIter<T, I> {
    fn spec_insert_iter(&mut self, index: usize, iter: I) -> usize;
}

impl<T, A: AllocStrategy<T>, I: Iterator<Item = T>> SpecInsertIter<T, I> for Vector<T, A> {
    default fn spec_insert_iter(&mut self, index: usize, iter: I) -> usize {
        let (lower, _) = iter.size_hint();
        self.reserve(lower);

        let mut appended = TruncateOnUnwind {
            old_len: self.len,
            vec: self,
        };
        for item in iter {
            appended.vec.push(item);
        }
        rotate(&mut appended.vec[index..], appended.old_len - index);
        mem::forget(appended);
        index
    }
}

impl<T, A: AllocStrategy<T>, I: TrustedLen<Item = T>> SpecInsertIter<T, I> for Vector<T, A> {
    fn spec_insert_iter(&mut self, index: usize, mut iter: I) -> usize {
        let count = match iter.size_hint() {
            (_, Some(upper)) => upper,
            (_, None) => Err(CapacityOverflow).throw(),
        };
        if count != 0 {
            self.try_splice(index, count, |slots, _| {
                for _ in 0..count {
                    // SAFETY: The count slots are vacant, and a TrustedLen iterator yields exactly
                    // as many items as its size_hint reports.
                    unsafe { slots.push(iter.next().unwrap_unchecked()) }
                }
            })
            .or_handle();
        }
        index
    }
}
