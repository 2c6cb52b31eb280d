use std::alloc::Layout;
use std::cmp;
use std::ptr::NonNull;

use crate::error::{CapacityOverflow, TryReserveError};

/// The largest number of bytes any allocation is allowed to span.
pub const MAX_SIZE: usize = isize::MAX as usize;

/// A source of raw, uninitialized storage for elements of type `T`, along with the hooks used to
/// construct and destroy elements in that storage.
///
/// A strategy is defined in terms of the element type it allocates, so a collection holding `T`
/// asks its strategy for `n` slots of `T`, rather than `n * size_of::<T>()` bytes.
///
/// Every element a collection creates in the storage goes through
/// [`construct`](AllocStrategy::construct), and every element it drops there goes through
/// [`destroy`](AllocStrategy::destroy). Relocating elements within or between allocations is a
/// bitwise move that uses neither hook, and so is handing an element out by value (as `pop` and
/// `remove` do), since its life continues outside the storage.
///
/// The three `PROPAGATE_ON_*` constants decide whether the strategy travels with the contents of
/// a collection when the collection is cloned into, moved into or swapped with another.
///
/// # Safety
/// A pointer returned by [`allocate`](AllocStrategy::allocate) must be properly aligned for `T`
/// and valid for reads and writes of `n` elements until it is passed to
/// [`deallocate`](AllocStrategy::deallocate) with the same `n`. Strategies that compare equal
/// must be able to deallocate each other's memory.
pub unsafe trait AllocStrategy<T>: PartialEq {
    /// Whether a collection being overwritten with a clone of another also takes a clone of the
    /// other's strategy.
    const PROPAGATE_ON_CLONE: bool = false;
    /// Whether a collection being overwritten by moving another into it also takes the other's
    /// strategy.
    const PROPAGATE_ON_MOVE: bool = true;
    /// Whether swapping two collections also swaps their strategies.
    const PROPAGATE_ON_SWAP: bool = false;

    /// Allocates storage for `n` elements of `T`, without initializing any of them.
    ///
    /// # Errors
    /// Returns [`TryReserveError::CapacityOverflow`] if the size of `n` elements can't be
    /// represented, or [`TryReserveError::AllocFailure`] if the memory isn't available.
    fn allocate(&self, n: usize) -> Result<NonNull<T>, TryReserveError>;

    /// Releases storage previously returned by [`allocate`](AllocStrategy::allocate).
    ///
    /// # Safety
    /// `ptr` must have been returned by a call to `allocate(n)` on this strategy (or one equal to
    /// it), and must not have been deallocated already. Any elements still in the storage are
    /// not dropped.
    unsafe fn deallocate(&self, ptr: NonNull<T>, n: usize);

    /// The largest number of elements a single allocation from this strategy can hold.
    fn max_len(&self) -> usize {
        MAX_SIZE / cmp::max(size_of::<T>(), 1)
    }

    /// Constructs `value` in the uninitialized slot at `slot`.
    ///
    /// # Safety
    /// `slot` must be valid for writes and must not hold a live element.
    unsafe fn construct(&self, slot: NonNull<T>, value: T) {
        // SAFETY: The caller guarantees that the slot is valid for writes.
        unsafe { slot.write(value) }
    }

    /// Destroys the live element at `slot`, leaving it uninitialized.
    ///
    /// # Safety
    /// `slot` must hold a live element, which can't be used again after this call.
    unsafe fn destroy(&self, slot: NonNull<T>) {
        // SAFETY: The caller guarantees that the slot holds a live element.
        unsafe { slot.drop_in_place() }
    }
}

/// Creates the layout for `n` contiguous elements of `T`.
///
/// # Errors
/// Returns [`CapacityOverflow`] if the size of the layout would exceed [`MAX_SIZE`].
pub fn layout_for<T>(n: usize) -> Result<Layout, CapacityOverflow> {
    Layout::array::<T>(n).map_err(|_| CapacityOverflow)
}
