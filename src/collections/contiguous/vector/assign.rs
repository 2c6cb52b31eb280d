use std::iter::TrustedLen;
use std::mem;

use super::Vector;
use crate::algorithm::{copy, fill};
use crate::alloc::AllocStrategy;
use crate::error::CapacityOverflow;
use crate::util::result::ResultExtension;

impl<T, A: AllocStrategy<T>> Vector<T, A> {
    /// Replaces the contents of the Vector with `count` clones of `value`.
    ///
    /// Existing elements are assigned over and the memory is reused if it is large enough. If it
    /// isn't, the old elements are dropped and exactly `count` slots are allocated.
    ///
    /// # Panics
    /// Panics if `count` exceeds [`max_len`](Vector::max_len).
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::vector;
    /// let mut vec = vector![1, 2, 3];
    /// vec.assign_n(2, 9);
    /// assert_eq!(&*vec, &[9, 9]);
    /// assert_eq!(vec.cap(), 3);
    /// vec.assign_n(5, 0);
    /// assert_eq!(&*vec, &[0; 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn assign_n(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        self.make_room_for(count);

        let kept = count.min(self.len);
        self.truncate(count);
        fill(&mut self[..kept], value.clone());
        self.extend_with(count - kept, || value.clone());
    }

    /// Replaces the contents of the Vector with clones of the elements of `values`, reusing the
    /// memory if it is large enough.
    ///
    /// # Panics
    /// Panics if the length of `values` exceeds [`max_len`](Vector::max_len).
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::vector;
    /// let mut vec = vector![String::from("old")];
    /// vec.assign_from_slice(&[String::from("a"), String::from("b")]);
    /// assert_eq!(vec, vector![String::from("a"), String::from("b")]);
    /// ```
    pub fn assign_from_slice(&mut self, values: &[T])
    where
        T: Clone,
    {
        self.make_room_for(values.len());

        let kept = values.len().min(self.len);
        self.truncate(values.len());
        copy(&values[..kept], self);
        self.extend_from_slice(&values[kept..]);
    }

    /// Replaces the contents of the Vector with the elements produced by `iter`.
    ///
    /// Iterators of trusted length get the same treatment as [`assign_from_slice`]. Other
    /// iterators are assigned over the existing elements one by one, then either the leftover
    /// elements are dropped or the remaining items are pushed.
    ///
    /// [`assign_from_slice`]: Vector::assign_from_slice
    ///
    /// # Panics
    /// Panics if the iterator produces more than [`max_len`](Vector::max_len) elements.
    pub fn assign_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.spec_assign_iter(iter.into_iter())
    }

    /// Moves the contents of `other` into this Vector, dropping the old contents.
    ///
    /// If `A::PROPAGATE_ON_MOVE` is set, this Vector takes over `other` entirely, strategy and
    /// all. Otherwise it keeps its own strategy: when the strategies compare equal, the memory is
    /// taken over anyway, and when they don't, the elements are relocated one by one into memory
    /// from this Vector's strategy.
    ///
    /// # Panics
    /// Panics if the elements have to be relocated and the allocation fails.
    pub fn assign_from(&mut self, mut other: Vector<T, A>) {
        if A::PROPAGATE_ON_MOVE {
            *self = other;
        } else if self.buf.alloc == other.buf.alloc {
            self.clear();
            mem::swap(&mut self.buf.ptr, &mut other.buf.ptr);
            mem::swap(&mut self.buf.cap, &mut other.buf.cap);
            mem::swap(&mut self.len, &mut other.len);
        } else {
            self.clear();
            self.reserve_exact(other.len);
            self.extend(other);
        }
    }

    /// Creates a Vector with memory from `alloc`, relocating the elements of `other` into it.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::{vector, alloc::Global};
    /// # use sequence_lib::collections::contiguous::Vector;
    /// let vec = Vector::from_vector_in(vector![1, 2], Global);
    /// assert_eq!(&*vec, &[1, 2]);
    /// ```
    pub fn from_vector_in<B: AllocStrategy<T>>(other: Vector<T, B>, alloc: A) -> Vector<T, A> {
        let mut vec = Vector::with_cap_in(other.len, alloc);
        vec.extend(other);
        vec
    }

    /// Takes the contents out of this Vector, leaving it empty with a clone of its strategy.
    pub fn take(&mut self) -> Vector<T, A>
    where
        A: Clone,
    {
        let empty = Vector::new_in(self.buf.alloc.clone());
        mem::replace(self, empty)
    }

    /// Drops every element and the memory if `count` elements won't fit, then allocates exactly
    /// `count` slots.
    fn make_room_for(&mut self, count: usize) {
        if count > self.cap() {
            self.clear();
            self.shrink_to_fit();
            self.reserve_exact(count);
        }
    }
}

trait SpecAssignIter<T, I> {
    fn spec_assign_iter(&mut self, iter: I);
}

impl<T, A: AllocStrategy<T>, I: Iterator<Item = T>> SpecAssignIter<T, I> for Vector<T, A> {
    default fn spec_assign_iter(&mut self, mut iter: I) {
        let mut assigned = 0;
        while assigned < self.len {
            match iter.next() {
                Some(item) => self[assigned] = item,
                None => break,
            }
            assigned += 1;
        }

        self.truncate(assigned);
        self.extend(iter);
    }
}

impl<T, A: AllocStrategy<T>, I: TrustedLen<Item = T>> SpecAssignIter<T, I> for Vector<T, A> {
    fn spec_assign_iter(&mut self, mut iter: I) {
        let count = match iter.size_hint() {
            (_, Some(upper)) => upper,
            (_, None) => Err(CapacityOverflow).throw(),
        };
        self.make_room_for(count);

        self.truncate(count);
        for slot in self.iter_mut() {
            // SAFETY: The iterator yields exactly count items and there are at most count slots.
            *slot = unsafe { iter.next().unwrap_unchecked() };
        }
        for item in iter {
            // SAFETY: make_room_for ensured a capacity of at least count.
            unsafe { self.push_unchecked(item) }
        }
    }
}
