use std::fmt::{self, Debug, Formatter};
use std::iter::{FusedIterator, TrustedLen};
use std::mem::ManuallyDrop;
use std::ptr;
use std::slice;

use super::Vector;
use crate::alloc::{AllocStrategy, Global};
use crate::collections::contiguous::buffer::RawBuf;
use crate::error::CapacityOverflow;
use crate::util::result::{ReserveResultExtension, ResultExtension};

impl<T, A: AllocStrategy<T>> IntoIterator for Vector<T, A> {
    type Item = T;

    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> Self::IntoIter {
        let me = ManuallyDrop::new(self);
        let len = me.len;
        // SAFETY: me is never dropped or used again, so the buffer is moved out exactly once.
        let buf = unsafe { ptr::read(&me.buf) };

        IntoIter {
            buf,
            start: 0,
            end: len,
        }
    }
}

impl<'a, T, A: AllocStrategy<T>> IntoIterator for &'a Vector<T, A> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A: AllocStrategy<T>> IntoIterator for &'a mut Vector<T, A> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owned type for owned iteration over a [`Vector`]. See [`Vector::into_iter`].
///
/// The elements between `start` and `end` are live. The memory is released once the iterator is
/// dropped, along with any elements it didn't yield.
pub struct IntoIter<T, A: AllocStrategy<T> = Global> {
    pub(crate) buf: RawBuf<T, A>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T, A: AllocStrategy<T>> IntoIter<T, A> {
    /// Returns the elements that haven't been yielded yet.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::vector;
    /// let mut iter = vector![1, 2, 3].into_iter();
    /// iter.next();
    /// assert_eq!(iter.as_slice(), &[2, 3]);
    /// ```
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: The slots from start to end are live.
        unsafe {
            slice::from_raw_parts(self.buf.ptr.add(self.start).as_ptr(), self.end - self.start)
        }
    }

    /// Returns the remaining elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: The slots from start to end are live and self is borrowed mutably.
        unsafe {
            slice::from_raw_parts_mut(self.buf.ptr.add(self.start).as_ptr(), self.end - self.start)
        }
    }
}

impl<T, A: AllocStrategy<T>> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        while self.start < self.end {
            let slot = self.start;
            // Advance first, so that a panicking destructor doesn't get run twice.
            self.start += 1;
            // SAFETY: The slot was live and is no longer covered by start..end.
            unsafe { self.buf.alloc.destroy(self.buf.ptr.add(slot)) }
        }
        // Implicitly drop self.buf, which releases the memory.
    }
}

impl<T, A: AllocStrategy<T>> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: The slot at start is live. Incrementing start moves the value out.
            let value = unsafe { self.buf.ptr.add(self.start).read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T, A: AllocStrategy<T>> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: The slot at the newly decremented end was live and is now moved out.
            Some(unsafe { self.buf.ptr.add(self.end).read() })
        } else {
            None
        }
    }
}

impl<T, A: AllocStrategy<T>> FusedIterator for IntoIter<T, A> {}

impl<T, A: AllocStrategy<T>> ExactSizeIterator for IntoIter<T, A> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

// SAFETY: IntoIter::size_hint returns the exact length of the iterator.
unsafe impl<T, A: AllocStrategy<T>> TrustedLen for IntoIter<T, A> {}

impl<T: Debug, A: AllocStrategy<T>> Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, A: AllocStrategy<T>> Extend<T> for Vector<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.spec_extend(iter.into_iter())
    }

    fn extend_one(&mut self, item: T) {
        self.push(item);
    }

    fn extend_reserve(&mut self, additional: usize) {
        self.reserve(additional);
    }

    unsafe fn extend_one_unchecked(&mut self, item: T)
    where
        Self: Sized,
    {
        // SAFETY: extend_reserve is implemented correctly, so all other safety requirements are the
        // responsibility of the caller.
        unsafe { self.push_unchecked(item) }
    }
}

impl<'a, T: Copy + 'a, A: AllocStrategy<T>> Extend<&'a T> for Vector<T, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.spec_extend(iter.into_iter().copied())
    }
}

trait SpecExtend<T, I> {
    fn spec_extend(&mut self, iter: I);
}

impl<T, A: AllocStrategy<T>, I: Iterator<Item = T>> SpecExtend<T, I> for Vector<T, A> {
    default fn spec_extend(&mut self, iter: I) {
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, A: AllocStrategy<T>, I: TrustedLen<Item = T>> SpecExtend<T, I> for Vector<T, A> {
    fn spec_extend(&mut self, iter: I) {
        let count = match iter.size_hint() {
            (_, Some(upper)) => upper,
            (_, None) => Err(CapacityOverflow).throw(),
        };
        self.try_grow_for(count).or_handle();
        for item in iter {
            // SAFETY: There is room for every item the iterator yields.
            unsafe { self.push_unchecked(item) }
        }
    }
}

impl<T, A: AllocStrategy<T> + Default> FromIterator<T> for Vector<T, A> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Vector::default();
        vec.extend(iter);
        vec
    }
}
