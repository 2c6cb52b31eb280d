//! Construction into uninitialized memory.
//!
//! Each function here writes into slots that hold no live elements yet. If constructing one of
//! the elements panics, every element constructed by that call is dropped again before the panic
//! continues, so a failed call leaves the destination exactly as uninitialized as it found it.

use std::mem::MaybeUninit;
use std::ptr;
use std::slice;

/// The elements constructed so far by an uninitialized algorithm. Dropping this without
/// forgetting it destroys them.
struct PartialInit<T> {
    start: *mut T,
    done: usize,
}

impl<T> PartialInit<T> {
    const fn new(start: *mut T) -> PartialInit<T> {
        PartialInit { start, done: 0 }
    }

    /// Writes the next element.
    ///
    /// # Safety
    /// The next slot must be valid for writes.
    unsafe fn push(&mut self, value: T) {
        // SAFETY: Guaranteed by the caller.
        unsafe { self.start.add(self.done).write(value) }
        self.done += 1;
    }

    /// Keeps the constructed elements, returning the pointer one past the last.
    fn finish(self) -> *mut T {
        // SAFETY: Every element up to done has been written.
        let end = unsafe { self.start.add(self.done) };
        std::mem::forget(self);
        end
    }
}

impl<T> Drop for PartialInit<T> {
    fn drop(&mut self) {
        // SAFETY: The first done slots hold live elements constructed by this guard.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.start, self.done)) }
    }
}

/// Clones every element of `src` into the uninitialized slots starting at `dest`, returning the
/// pointer one past the last slot written.
///
/// This goes through std's `write_clone_of_slice`, which copies [`Copy`] types in bulk and drops
/// the clones made so far if one of them panics.
///
/// # Safety
/// `dest` must be valid for writes of `src.len()` elements and must not overlap `src`. The slots
/// are overwritten without dropping anything they held.
pub unsafe fn uninitialized_copy<T: Clone>(src: &[T], dest: *mut T) -> *mut T {
    // SAFETY: Guaranteed by the caller. MaybeUninit<T> has the same layout as T.
    let slots = unsafe { slice::from_raw_parts_mut(dest.cast::<MaybeUninit<T>>(), src.len()) };
    slots.write_clone_of_slice(src);
    // SAFETY: The slots span src.len() elements from dest.
    unsafe { dest.add(src.len()) }
}

/// Constructs `n` clones of `value` in the uninitialized slots starting at `dest`, returning the
/// pointer one past the last slot written.
///
/// # Safety
/// `dest` must be valid for writes of `n` elements.
pub unsafe fn uninitialized_fill_n<T: Clone>(dest: *mut T, n: usize, value: &T) -> *mut T {
    let mut guard = PartialInit::new(dest);
    for _ in 0..n {
        // SAFETY: Guaranteed by the caller.
        unsafe { guard.push(value.clone()) }
    }
    guard.finish()
}

/// Constructs `n` elements produced by `f` in the uninitialized slots starting at `dest`,
/// returning the pointer one past the last slot written.
///
/// # Safety
/// `dest` must be valid for writes of `n` elements.
pub unsafe fn uninitialized_fill_with<T, F>(dest: *mut T, n: usize, mut f: F) -> *mut T
where
    F: FnMut() -> T,
{
    let mut guard = PartialInit::new(dest);
    for _ in 0..n {
        // SAFETY: Guaranteed by the caller.
        unsafe { guard.push(f()) }
    }
    guard.finish()
}
