use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use crate::algorithm::move_range;
use crate::alloc::AllocStrategy;
use crate::error::{CapacityOverflow, TryReserveError};
use crate::iter::RawCursor;

/// An owned allocation of `cap` slots for `T`, obtained from the strategy `A`.
///
/// RawBuf knows nothing about which of its slots are live. Dropping it releases the memory
/// without dropping any elements, so its owner has to destroy them first.
pub(crate) struct RawBuf<T, A: AllocStrategy<T>> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) alloc: A,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T, A: AllocStrategy<T>> RawBuf<T, A> {
    /// Creates a RawBuf without any memory. No allocation is made until the capacity changes.
    pub(crate) const fn new_in(alloc: A) -> RawBuf<T, A> {
        RawBuf {
            ptr: NonNull::dangling(),
            cap: 0,
            alloc,
            _phantom: PhantomData,
        }
    }

    /// Creates a RawBuf with exactly `cap` uninitialized slots.
    pub(crate) fn try_with_cap_in(cap: usize, alloc: A) -> Result<RawBuf<T, A>, TryReserveError> {
        let mut buf = RawBuf::new_in(alloc);
        let fresh = buf.try_allocate(cap)?;
        let (ptr, cap) = fresh.into_parts();
        buf.ptr = ptr;
        buf.cap = cap;
        Ok(buf)
    }

    /// Obtains a new allocation of `cap` slots from this buffer's strategy, which is released
    /// again if it is dropped before being [`install`](RawBuf::install)ed.
    pub(crate) fn try_allocate(&self, cap: usize) -> Result<Allocation<'_, T, A>, TryReserveError> {
        if cap > self.alloc.max_len() {
            return Err(CapacityOverflow.into());
        }

        let ptr = if cap == 0 {
            NonNull::dangling()
        } else {
            self.alloc.allocate(cap).inspect_err(|error| {
                log::debug!(
                    "allocation of {cap} slots for {} failed: {error}",
                    std::any::type_name::<T>()
                );
            })?
        };

        Ok(Allocation {
            ptr,
            cap,
            alloc: &self.alloc,
        })
    }

    /// Replaces the current memory with a new allocation, releasing the old one.
    ///
    /// # Safety
    /// `ptr` and `cap` must come from [`Allocation::into_parts`] on an allocation made by this
    /// buffer's strategy. The old memory must not hold any live elements.
    pub(crate) unsafe fn install(&mut self, ptr: NonNull<T>, cap: usize) {
        log::trace!(
            "reallocated buffer of {} from {} to {} slots",
            std::any::type_name::<T>(),
            self.cap,
            cap
        );

        // SAFETY: The old memory has been vacated, as guaranteed by the caller.
        unsafe { self.release() };
        self.ptr = ptr;
        self.cap = cap;
    }

    /// Reallocates the buffer to exactly `new_cap` slots, relocating the first `live` elements
    /// into the new memory. If the allocation fails, the buffer is left untouched.
    ///
    /// # Safety
    /// The first `live` slots must be live and no other slot may be. `new_cap` must be at least
    /// `live`.
    pub(crate) unsafe fn try_realloc(
        &mut self,
        live: usize,
        new_cap: usize,
    ) -> Result<(), TryReserveError> {
        if new_cap == self.cap {
            return Ok(());
        }

        let fresh = self.try_allocate(new_cap)?;
        // SAFETY: The old buffer holds live elements in its first live slots and the new buffer
        // has room for them. The two allocations are distinct.
        unsafe {
            move_range(
                RawCursor::new(self.ptr.as_ptr(), 0),
                RawCursor::new(self.ptr.as_ptr(), live),
                RawCursor::new(fresh.ptr.as_ptr(), 0),
            );
        }

        let (ptr, cap) = fresh.into_parts();
        // SAFETY: Every live element has been relocated out of the old memory.
        unsafe { self.install(ptr, cap) };
        Ok(())
    }

    /// Releases the memory without touching the pointer or capacity.
    ///
    /// # Safety
    /// The buffer must not be used again until its pointer and capacity are replaced.
    unsafe fn release(&mut self) {
        if self.cap != 0 {
            // SAFETY: ptr was allocated by this strategy with cap slots.
            unsafe { self.alloc.deallocate(self.ptr, self.cap) }
        }
    }

    /// Takes the memory out of this buffer, leaving it empty.
    pub(crate) const fn take_memory(&mut self) -> (NonNull<T>, usize) {
        let parts = (self.ptr, self.cap);
        self.ptr = NonNull::dangling();
        self.cap = 0;
        parts
    }
}

impl<T, A: AllocStrategy<T>> Drop for RawBuf<T, A> {
    fn drop(&mut self) {
        // SAFETY: The buffer is never used again.
        unsafe { self.release() }
    }
}

/// Memory obtained from a strategy that hasn't been handed to a [`RawBuf`] yet. It is released
/// when dropped, so that a panic while filling it doesn't leak it.
pub(crate) struct Allocation<'a, T, A: AllocStrategy<T>> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) cap: usize,
    alloc: &'a A,
}

impl<'a, T, A: AllocStrategy<T>> Allocation<'a, T, A> {
    /// Stops tracking the memory, returning it.
    pub(crate) fn into_parts(self) -> (NonNull<T>, usize) {
        let parts = (self.ptr, self.cap);
        mem::forget(self);
        parts
    }
}

impl<'a, T, A: AllocStrategy<T>> Drop for Allocation<'a, T, A> {
    fn drop(&mut self) {
        if self.cap != 0 {
            // SAFETY: The memory was allocated by this strategy with cap slots and was never
            // handed to a RawBuf.
            unsafe { self.alloc.deallocate(self.ptr, self.cap) }
        }
    }
}

/// Elements constructed through a strategy into consecutive vacant slots. Dropping this without
/// calling [`finish`](Construct::finish) destroys them again through the same strategy.
pub(crate) struct Construct<'a, T, A: AllocStrategy<T>> {
    start: *mut T,
    done: usize,
    alloc: &'a A,
}

impl<'a, T, A: AllocStrategy<T>> Construct<'a, T, A> {
    pub(crate) const fn new(start: *mut T, alloc: &'a A) -> Construct<'a, T, A> {
        Construct {
            start,
            done: 0,
            alloc,
        }
    }

    /// Constructs `value` in the next slot.
    ///
    /// # Safety
    /// The next slot must be valid for writes and vacant.
    pub(crate) unsafe fn push(&mut self, value: T) {
        // SAFETY: Guaranteed by the caller. Slots are never null, even when dangling.
        unsafe {
            let slot = NonNull::new_unchecked(self.start.add(self.done));
            self.alloc.construct(slot, value);
        }
        self.done += 1;
    }

    /// Keeps the constructed elements, returning how many there are.
    pub(crate) fn finish(self) -> usize {
        let done = self.done;
        mem::forget(self);
        done
    }
}

impl<'a, T, A: AllocStrategy<T>> Drop for Construct<'a, T, A> {
    fn drop(&mut self) {
        for i in 0..self.done {
            // SAFETY: The first done slots hold elements constructed by this guard.
            unsafe { self.alloc.destroy(NonNull::new_unchecked(self.start.add(i))) }
        }
    }
}
