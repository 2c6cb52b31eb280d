use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter::TrustedLen;
use std::marker::PhantomData;
use std::mem::{self, ManuallyDrop};
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;
use std::slice;
use std::string::FromUtf8Error;

use super::grow_to;
use crate::algorithm;
use crate::alloc::{AllocStrategy, Global};
use crate::collections::contiguous::buffer::RawBuf;
use crate::error::{CapacityOverflow, IndexOutOfBounds, TryReserveError};
use crate::iter::OutputCursor;
use crate::util::result::{ReserveResultExtension, ResultExtension};

/// A variable size contiguous collection, which owns a single allocation from its
/// [`AllocStrategy`] `A`.
///
/// The first [`len`](Vector::len) slots of the allocation hold live elements and the remaining
/// slots, up to [`cap`](Vector::cap), are uninitialized. Elements are only ever constructed into
/// uninitialized slots and destroyed out of live ones, so these two regions describe the state
/// of every slot at all times.
///
/// When an insertion doesn't fit, the Vector grows according to [`grow_to`], doubling its
/// capacity so that pushing is amortized `O(1)`.
///
/// Positions are plain indices. Any mutation that reallocates or shifts elements moves them to
/// new addresses, which the borrow checker already prevents references from observing.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
/// - `m`: The number of items being inserted or removed.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `push_unchecked` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `insert_n` | `O(n-i+m)` |
/// | `insert_iter` | `O(n-i+m)`** |
/// | `erase` | `O(n-i)` |
/// | `erase_range` | `O(n-i)` |
/// | `swap_remove` | `O(1)` |
/// | `reserve` | `O(n)`, `O(1)`*** |
/// | `resize` | `O(m)`, `O(n+m)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `clear` | `O(n)` |
/// | `swap` | `O(1)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** For iterators without a trusted length, the elements are appended and then rotated into
/// place, which is `O(n-i+m)` as well but moves every element twice.
///
/// \*** If the Vector has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct Vector<T, A: AllocStrategy<T> = Global> {
    pub(crate) buf: RawBuf<T, A>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector::new_in(Global)
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if the capacity exceeds [`max_len`](Vector::max_len).
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector::with_cap_in(cap, Global)
    }

    /// Creates a Vector from an iterator of known length, allocating exactly once.
    ///
    /// # Panics
    /// Panics if the iterator is longer than [`max_len`](Vector::max_len).
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::contiguous::Vector;
    /// let vec = Vector::from_iter_sized(1_u8..=3);
    /// assert_eq!(&*vec, &[1, 2, 3]);
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn from_iter_sized<I>(iter: I) -> Vector<T>
    where
        I: Iterator<Item = T> + TrustedLen,
    {
        Vector::from_iter_sized_in(iter, Global)
    }

    /// Decomposes the Vector into its pointer, length and capacity, leaking it.
    pub fn into_parts(self) -> (NonNull<T>, usize, usize) {
        let (ptr, len, cap, _) = self.into_parts_with_alloc();
        (ptr, len, cap)
    }

    /// Recreates a Vector from the parts returned by [`into_parts`](Vector::into_parts).
    ///
    /// # Safety
    /// The pointer must have been allocated by [`Global`] for `cap` elements of `T`, of which the
    /// first `len` are live.
    pub const unsafe fn from_parts(ptr: NonNull<T>, len: usize, cap: usize) -> Vector<T> {
        // SAFETY: Forwarded from the caller.
        unsafe { Vector::from_parts_in(ptr, len, cap, Global) }
    }
}

impl<T, A: AllocStrategy<T>> Vector<T, A> {
    /// Creates a new, empty Vector which will allocate from `alloc`.
    pub const fn new_in(alloc: A) -> Vector<T, A> {
        Vector {
            buf: RawBuf::new_in(alloc),
            len: 0,
        }
    }

    /// Creates a new Vector with exactly `cap` slots from `alloc`.
    ///
    /// # Panics
    /// Panics if the capacity exceeds [`max_len`](Vector::max_len).
    pub fn with_cap_in(cap: usize, alloc: A) -> Vector<T, A> {
        Vector::try_with_cap_in(cap, alloc).or_handle()
    }

    /// Creates a new Vector with exactly `cap` slots from `alloc`.
    ///
    /// # Errors
    /// Returns a [`TryReserveError`] if `cap` exceeds [`max_len`](Vector::max_len) or the strategy
    /// fails to allocate.
    pub fn try_with_cap_in(cap: usize, alloc: A) -> Result<Vector<T, A>, TryReserveError> {
        Ok(Vector {
            buf: RawBuf::try_with_cap_in(cap, alloc)?,
            len: 0,
        })
    }

    /// Creates a Vector from an iterator of known length, allocating exactly once from `alloc`.
    ///
    /// # Panics
    /// Panics if the iterator is longer than [`max_len`](Vector::max_len).
    pub fn from_iter_sized_in<I>(iter: I, alloc: A) -> Vector<T, A>
    where
        I: Iterator<Item = T> + TrustedLen,
    {
        let len = match iter.size_hint() {
            (_, Some(upper)) => upper,
            (_, None) => Err(CapacityOverflow).throw(),
        };
        let mut vec = Vector::with_cap_in(len, alloc);

        for item in iter {
            // SAFETY: vec has been created with the right capacity.
            unsafe { vec.push_unchecked(item) }
        }

        vec
    }

    /// Creates a Vector of `count` clones of `value`.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::contiguous::Vector;
    /// let vec: Vector<i32> = Vector::repeat(7, 3);
    /// assert_eq!(&*vec, &[7, 7, 7]);
    /// ```
    pub fn repeat(value: T, count: usize) -> Vector<T, A>
    where
        T: Clone,
        A: Default,
    {
        let mut vec = Vector::with_cap_in(count, A::default());
        vec.extend_with(count, || value.clone());
        vec
    }

    /// Creates a Vector of `count` default values.
    pub fn repeat_default(count: usize) -> Vector<T, A>
    where
        T: Default,
        A: Default,
    {
        let mut vec = Vector::with_cap_in(count, A::default());
        vec.extend_with(count, T::default);
        vec
    }

    /// Decomposes the Vector into its pointer, length, capacity and strategy, leaking it.
    pub fn into_parts_with_alloc(self) -> (NonNull<T>, usize, usize, A) {
        let mut me = ManuallyDrop::new(self);
        let (ptr, cap) = me.buf.take_memory();
        // SAFETY: me is never dropped or used again, so the strategy is moved out exactly once.
        let alloc = unsafe { std::ptr::read(&me.buf.alloc) };
        (ptr, me.len, cap, alloc)
    }

    /// Recreates a Vector from its parts.
    ///
    /// # Safety
    /// The pointer must have been allocated by `alloc` (or a strategy equal to it) for `cap`
    /// elements of `T`, of which the first `len` are live.
    pub const unsafe fn from_parts_in(
        ptr: NonNull<T>,
        len: usize,
        cap: usize,
        alloc: A,
    ) -> Vector<T, A> {
        Vector {
            buf: RawBuf {
                ptr,
                cap,
                alloc,
                _phantom: PhantomData,
            },
            len,
        }
    }

    /// Returns the length of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::contiguous::Vector;
    /// let vec = Vector::from_iter_sized(1_u8..=3);
    /// assert_eq!(vec.len(), 3);
    /// ```
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// assert!(vec.is_empty());
    /// vec.push(1);
    /// assert!(!vec.is_empty())
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector: the number of elements it can hold before it
    /// has to reallocate.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub const fn cap(&self) -> usize {
        self.buf.cap
    }

    /// Returns the largest number of elements this Vector's strategy can hold in one allocation.
    pub fn max_len(&self) -> usize {
        self.buf.alloc.max_len()
    }

    /// Returns a reference to the Vector's allocation strategy.
    pub const fn allocator(&self) -> &A {
        &self.buf.alloc
    }

    /// Returns a raw pointer to the Vector's first slot. The pointer is dangling if the capacity
    /// is 0.
    pub const fn as_ptr(&self) -> *const T {
        self.buf.ptr.as_ptr()
    }

    /// Returns a raw mutable pointer to the Vector's first slot.
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr.as_ptr()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index` isn't less than the length.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::vector;
    /// let vec = vector![1, 2, 3];
    /// assert_eq!(vec.at(1), Ok(&2));
    /// assert!(vec.at(3).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.get(index).ok_or(IndexOutOfBounds {
            index,
            len: self.len,
        })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index` isn't less than the length.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len;
        self.get_mut(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if the Vector already holds [`max_len`](Vector::max_len) elements.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        self.try_push(value).or_handle()
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Errors
    /// If growing fails, the value is dropped, the Vector is left untouched and the error is
    /// returned.
    pub fn try_push(&mut self, value: T) -> Result<(), TryReserveError> {
        if self.len == self.cap() {
            self.try_grow_for(1)?;
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
        Ok(())
    }

    /// Push the value returned by `f` onto the end of the Vector, constructing it only once there
    /// is room for it.
    ///
    /// # Panics
    /// Panics if the Vector already holds [`max_len`](Vector::max_len) elements.
    pub fn push_with<F: FnOnce() -> T>(&mut self, f: F) {
        if self.len == self.cap() {
            self.try_grow_for(1).or_handle();
        }
        let value = f();
        // SAFETY: The capacity was adjusted above and f can't have changed it.
        unsafe { self.push_unchecked(value) }
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough capacity
    /// to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Vector has enough capacity to add the provided
    /// value, using methods like [`reserve`](Vector::reserve) or [`with_cap`](Vector::with_cap)
    /// to do so. Using this method on a Vector without enough capacity is undefined behavior.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::contiguous::Vector;
    /// let mut vec = Vector::with_cap(3);
    /// for i in 1_u8..=3 {
    ///     // SAFETY: We know that vec has enough capacity to store all three elements.
    ///     unsafe { vec.push_unchecked(i); }
    /// }
    /// assert_eq!(&*vec, &[1, 2, 3]);
    /// ```
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that the slot at len is within the capacity.
        // Slots from len onward are uninitialized.
        unsafe { self.buf.alloc.construct(self.buf.ptr.add(self.len), value) }
        self.len += 1;
    }

    /// Pushes a clone of the element at `src` onto the end of the Vector. The clone is made
    /// before the Vector grows, so the source can't be moved out from under it.
    ///
    /// # Panics
    /// Panics if `src` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::vector;
    /// let mut vec = vector![String::from("a"), String::from("b")];
    /// vec.push_from_within(0);
    /// assert_eq!(vec, vector![String::from("a"), String::from("b"), String::from("a")]);
    /// ```
    pub fn push_from_within(&mut self, src: usize) -> usize
    where
        T: Clone,
    {
        let value = self.at(src).throw().clone();
        self.push(value);
        self.len - 1
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::contiguous::Vector;
    /// let mut vec = Vector::from_iter_sized(0..5);
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop(), Some(i));
    /// }
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub const fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before reading, so that the slot is no longer considered live.
            self.len -= 1;

            // SAFETY: The slot at the newly decremented len held a live element, which is now
            // moved out.
            Some(unsafe { self.buf.ptr.add(self.len).read() })
        }
    }

    /// Ensures that the Vector has capacity to hold an additional `extra` elements, growing by
    /// the same plan as [`push`](Vector::push) when it doesn't.
    ///
    /// # Panics
    /// Panics if the required capacity exceeds [`max_len`](Vector::max_len).
    pub fn reserve(&mut self, extra: usize) {
        self.try_reserve(extra).or_handle()
    }

    /// Fallible version of [`reserve`](Vector::reserve).
    ///
    /// # Errors
    /// Returns a [`TryReserveError`] if the capacity overflows or the allocation fails. The
    /// Vector is left untouched in that case.
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), TryReserveError> {
        self.try_grow_for(extra)
    }

    /// Ensures that the Vector has capacity to hold an additional `extra` elements. If it doesn't,
    /// the capacity becomes exactly `len + extra`. The capacity never shrinks.
    ///
    /// # Panics
    /// Panics if the required capacity exceeds [`max_len`](Vector::max_len).
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::vector;
    /// let mut vec = vector![1, 2];
    /// vec.reserve_exact(3);
    /// assert_eq!(vec.cap(), 5);
    /// vec.reserve_exact(1);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn reserve_exact(&mut self, extra: usize) {
        self.try_reserve_exact(extra).or_handle()
    }

    /// Fallible version of [`reserve_exact`](Vector::reserve_exact).
    ///
    /// # Errors
    /// Returns a [`TryReserveError`] if the capacity overflows or the allocation fails. The
    /// Vector is left untouched in that case.
    pub fn try_reserve_exact(&mut self, extra: usize) -> Result<(), TryReserveError> {
        let required = self.len.checked_add(extra).ok_or(CapacityOverflow)?;
        if required <= self.cap() {
            return Ok(());
        }

        // SAFETY: The first len slots are live and required > len.
        unsafe { self.buf.try_realloc(self.len, required) }
    }

    /// Shrinks the Vector so that its capacity is equal to its length.
    pub fn shrink_to_fit(&mut self) {
        // SAFETY: The first len slots are live.
        unsafe { self.buf.try_realloc(self.len, self.len) }.or_handle()
    }

    /// Resizes the Vector to `new_len` elements, dropping elements off the end or appending
    /// clones of `value` as needed.
    ///
    /// # Panics
    /// Panics if `new_len` exceeds [`max_len`](Vector::max_len).
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::vector;
    /// let mut vec = vector![1, 2, 3];
    /// vec.resize(5, 0);
    /// assert_eq!(&*vec, &[1, 2, 3, 0, 0]);
    /// vec.resize(2, 0);
    /// assert_eq!(&*vec, &[1, 2]);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        self.resize_with(new_len, || value.clone())
    }

    /// Resizes the Vector to `new_len` elements, appending default values if it grows.
    ///
    /// # Panics
    /// Panics if `new_len` exceeds [`max_len`](Vector::max_len).
    pub fn resize_default(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default)
    }

    /// Resizes the Vector to `new_len` elements, appending values returned by `f` if it grows.
    ///
    /// # Panics
    /// Panics if `new_len` exceeds [`max_len`](Vector::max_len).
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, f: F) {
        if new_len <= self.len {
            self.truncate(new_len);
        } else {
            self.try_grow_for(new_len - self.len).or_handle();
            self.extend_with(new_len - self.len, f);
        }
    }

    /// Drops every element after the first `len`. Does nothing if the Vector is already shorter.
    pub fn truncate(&mut self, len: usize) {
        self.destruct_at_end(len);
    }

    /// Drops every element, keeping the capacity.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::vector;
    /// let mut vec = vector![1, 2, 3];
    /// vec.clear();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn clear(&mut self) {
        self.destruct_at_end(0);
    }

    /// Appends clones of every element in `other`.
    ///
    /// # Panics
    /// Panics if the new length exceeds [`max_len`](Vector::max_len).
    pub fn extend_from_slice(&mut self, other: &[T])
    where
        T: Clone,
    {
        self.try_grow_for(other.len()).or_handle();
        for item in other {
            // SAFETY: There is room for other after len. len is updated by every push, so a
            // panicking clone leaves the Vector consistent.
            unsafe { self.push_unchecked(item.clone()) }
        }
    }

    /// Exchanges the contents of two Vectors without moving any elements. The strategies are
    /// swapped too if `A::PROPAGATE_ON_SWAP` is set.
    ///
    /// # Panics
    /// Panics if the strategies aren't swapped and don't compare equal, because each Vector would
    /// end up holding memory that its strategy can't free.
    pub fn swap(&mut self, other: &mut Vector<T, A>) {
        if A::PROPAGATE_ON_SWAP {
            mem::swap(self, other);
            return;
        }

        assert!(
            self.buf.alloc == other.buf.alloc,
            "Can't swap the contents of Vectors with unequal allocation strategies!"
        );
        mem::swap(&mut self.buf.ptr, &mut other.buf.ptr);
        mem::swap(&mut self.buf.cap, &mut other.buf.cap);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Ensures there is room for `extra` more elements, following the growth plan.
    pub(crate) fn try_grow_for(&mut self, extra: usize) -> Result<(), TryReserveError> {
        let required = self.len.checked_add(extra).ok_or(CapacityOverflow)?;
        if required <= self.cap() {
            return Ok(());
        }

        let new_cap = self.planned_cap(required)?;
        // SAFETY: The first len slots are live and new_cap >= required > len.
        unsafe { self.buf.try_realloc(self.len, new_cap) }
    }

    /// The capacity to grow to in order to hold `required` elements.
    pub(crate) fn planned_cap(&self, required: usize) -> Result<usize, CapacityOverflow> {
        let max = self.max_len();
        if required > max {
            return Err(CapacityOverflow);
        }
        Ok(grow_to(self.cap(), required, max))
    }

    /// Appends `count` values returned by `f`. The capacity must already be sufficient.
    pub(crate) fn extend_with<F: FnMut() -> T>(&mut self, count: usize, mut f: F) {
        debug_assert!(self.cap() - self.len >= count);
        for _ in 0..count {
            // SAFETY: The caller has reserved room for count elements. len is updated by every
            // push, so a panic in f leaves the Vector consistent.
            unsafe { self.push_unchecked(f()) }
        }
    }

    /// Destroys elements from the back until only `new_len` remain.
    pub(crate) fn destruct_at_end(&mut self, new_len: usize) {
        while self.len > new_len {
            // Shrink first, so that a panicking destructor doesn't leave a dead slot live.
            self.len -= 1;
            // SAFETY: The slot at len was live until len was decremented.
            unsafe { self.buf.alloc.destroy(self.buf.ptr.add(self.len)) }
        }
    }
}

impl<T, A: AllocStrategy<T> + Default> Default for Vector<T, A> {
    fn default() -> Self {
        Vector::new_in(A::default())
    }
}

impl<T, A: AllocStrategy<T>> Drop for Vector<T, A> {
    fn drop(&mut self) {
        self.destruct_at_end(0);
        // Implicitly drop self.buf, which releases the memory without touching the now
        // uninitialized slots.
    }
}

impl<T, A: AllocStrategy<T>> Deref for Vector<T, A> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all live. The pointer is
        // nonnull and properly aligned, even when dangling.
        unsafe { slice::from_raw_parts(self.buf.ptr.as_ptr(), self.len) }
    }
}

impl<T, A: AllocStrategy<T>> DerefMut for Vector<T, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with the mutable borrow of self guaranteeing exclusive access.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr.as_ptr(), self.len) }
    }
}

impl<T, A: AllocStrategy<T>> AsRef<[T]> for Vector<T, A> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T, A: AllocStrategy<T>> AsMut<[T]> for Vector<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T, A: AllocStrategy<T>> Borrow<[T]> for Vector<T, A> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T, A: AllocStrategy<T>> BorrowMut<[T]> for Vector<T, A> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: Vectors, when used safely rely on unique pointers and are therefore safe for Send when T
// and the strategy are Send.
unsafe impl<T: Send, A: AllocStrategy<T> + Send> Send for Vector<T, A> {}
// SAFETY: Vector's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that Vector can safely implement Sync when T and the strategy are Sync.
unsafe impl<T: Sync, A: AllocStrategy<T> + Sync> Sync for Vector<T, A> {}

impl<T: Clone, A: AllocStrategy<T> + Clone> Clone for Vector<T, A> {
    /// Clones the Vector into an allocation of exactly its length, from a clone of its strategy.
    fn clone(&self) -> Self {
        let mut vec = Vector::with_cap_in(self.len, self.buf.alloc.clone());
        vec.extend_from_slice(self);
        vec
    }

    /// Overwrites self with clones of the elements of `source`, reusing the existing memory where
    /// possible. If `A::PROPAGATE_ON_CLONE` is set, self also takes a clone of the source's
    /// strategy, releasing its memory first if the strategies differ.
    fn clone_from(&mut self, source: &Self) {
        if A::PROPAGATE_ON_CLONE && self.buf.alloc != source.buf.alloc {
            self.clear();
            self.shrink_to_fit();
            self.buf.alloc = source.buf.alloc.clone();
        }
        self.assign_from_slice(source);
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        let (ptr, len, cap) = value.into_parts();
        // SAFETY: Global allocates with the same layout as Vec does.
        unsafe { Vec::from_parts(ptr, len, cap) }
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        let (ptr, len, cap) = value.into_parts();
        // SAFETY: Vec allocates with the same layout as Global does.
        unsafe { Vector::from_parts(ptr, len, cap) }
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(value: [T; N]) -> Self {
        Vector::from_iter_sized(value.into_iter())
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(value: &[T]) -> Self {
        let mut vec = Vector::with_cap(value.len());
        vec.extend_from_slice(value);
        vec
    }
}

impl From<String> for Vector<u8> {
    fn from(value: String) -> Self {
        Vec::from(value).into()
    }
}

impl TryFrom<Vector<u8>> for String {
    type Error = FromUtf8Error;

    fn try_from(value: Vector<u8>) -> Result<Self, Self::Error> {
        String::from_utf8(Vec::from(value))
    }
}

impl<T, U, A, B> PartialEq<Vector<U, B>> for Vector<T, A>
where
    T: PartialEq<U>,
    A: AllocStrategy<T>,
    B: AllocStrategy<U>,
{
    fn eq(&self, other: &Vector<U, B>) -> bool {
        algorithm::equal(self.iter(), other.iter())
    }
}

impl<T: Eq, A: AllocStrategy<T>> Eq for Vector<T, A> {}

impl<T: PartialOrd, A: AllocStrategy<T>> PartialOrd for Vector<T, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if algorithm::lexicographical_compare(self.iter(), other.iter()) {
            Some(Ordering::Less)
        } else if algorithm::lexicographical_compare(other.iter(), self.iter()) {
            Some(Ordering::Greater)
        } else if self == other {
            Some(Ordering::Equal)
        } else {
            None
        }
    }
}

impl<T: Ord, A: AllocStrategy<T>> Ord for Vector<T, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        algorithm::lexicographical_cmp_by(self.iter(), other.iter(), |a, b| a.cmp(b))
    }
}

impl<T: Hash, A: AllocStrategy<T>> Hash for Vector<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug, A: AllocStrategy<T>> Debug for Vector<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field_with("contents", |f| f.debug_list().entries(self.iter()).finish())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug, A: AllocStrategy<T>> Display for Vector<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Appends to the Vector.
impl<T, A: AllocStrategy<T>> OutputCursor<T> for Vector<T, A> {
    fn put(&mut self, value: T) {
        self.push(value);
    }
}
