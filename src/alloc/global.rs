use std::alloc;
use std::ptr::NonNull;

use super::{AllocStrategy, layout_for};
use crate::error::{AllocFailure, TryReserveError};

/// The default allocation strategy, which forwards to the global allocator registered with
/// `std`.
///
/// Global is stateless, so every instance compares equal to every other and memory allocated by
/// one can be freed by any other.
///
/// Zero-sized requests never reach the global allocator. They are answered with a dangling
/// pointer, which is also how [`Vec`] handles them, so buffers can be passed between the two.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Global;

// SAFETY: Allocations are made and released with the same layout through the global allocator,
// which is shared by all instances.
unsafe impl<T> AllocStrategy<T> for Global {
    fn allocate(&self, n: usize) -> Result<NonNull<T>, TryReserveError> {
        let layout = layout_for::<T>(n)?;

        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }

        // SAFETY: The layout has a non-zero size.
        let raw = unsafe { alloc::alloc(layout) };

        NonNull::new(raw.cast()).ok_or_else(|| AllocFailure { layout }.into())
    }

    unsafe fn deallocate(&self, ptr: NonNull<T>, n: usize) {
        // The layout was valid when the memory was allocated.
        let Ok(layout) = layout_for::<T>(n) else {
            return;
        };

        if layout.size() != 0 {
            // SAFETY: The caller guarantees that ptr was allocated by Global with this layout.
            unsafe { alloc::dealloc(ptr.as_ptr().cast(), layout) }
        }
    }
}
