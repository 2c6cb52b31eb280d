use std::cell::{Cell, RefCell};
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;
use std::rc::Rc;

use crate::alloc::{AllocStrategy, Global, layout_for};
use crate::error::{AllocFailure, TryReserveError};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZeroSizedType;

#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CountedDrop {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}

/// A value whose clone panics once a shared budget of successful clones runs out.
#[derive(Debug, PartialEq)]
pub struct PanicOnClone {
    pub value: usize,
    pub budget: Rc<Cell<usize>>,
}

impl PanicOnClone {
    pub fn new(value: usize, budget: &Rc<Cell<usize>>) -> PanicOnClone {
        PanicOnClone {
            value,
            budget: Rc::clone(budget),
        }
    }
}

impl Clone for PanicOnClone {
    fn clone(&self) -> Self {
        let remaining = self.budget.get();
        if remaining == 0 {
            panic!("clone budget exhausted");
        }
        self.budget.set(remaining - 1);
        PanicOnClone::new(self.value, &self.budget)
    }
}

#[derive(Debug, Default)]
pub struct AllocStats {
    pub allocations: Cell<usize>,
    pub deallocations: Cell<usize>,
    pub live: Cell<usize>,
    pub fail_after: Cell<Option<usize>>,
}

/// An allocation strategy that counts what goes through it and can be told to start failing.
/// Two Tracking strategies are equal only if they share the same stats.
#[derive(Debug, Clone, Default)]
pub struct Tracking {
    pub stats: Rc<AllocStats>,
}

impl Tracking {
    pub fn new() -> Tracking {
        Tracking::default()
    }

    pub fn failing_after(allocations: usize) -> Tracking {
        let tracking = Tracking::new();
        tracking.stats.fail_after.set(Some(allocations));
        tracking
    }

    pub fn allocations(&self) -> usize {
        self.stats.allocations.get()
    }

    pub fn deallocations(&self) -> usize {
        self.stats.deallocations.get()
    }

    pub fn live(&self) -> usize {
        self.stats.live.get()
    }
}

impl PartialEq for Tracking {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.stats, &other.stats)
    }
}

// SAFETY: All memory comes from and returns to Global.
unsafe impl<T> AllocStrategy<T> for Tracking {
    fn allocate(&self, n: usize) -> Result<NonNull<T>, TryReserveError> {
        let layout = layout_for::<T>(n)?;
        match self.stats.fail_after.get() {
            Some(0) => return Err(AllocFailure { layout }.into()),
            Some(remaining) => self.stats.fail_after.set(Some(remaining - 1)),
            None => (),
        }

        let ptr = AllocStrategy::<T>::allocate(&Global, n)?;
        self.stats.allocations.set(self.allocations() + 1);
        self.stats.live.set(self.live() + 1);
        Ok(ptr)
    }

    unsafe fn deallocate(&self, ptr: NonNull<T>, n: usize) {
        self.stats.deallocations.set(self.deallocations() + 1);
        self.stats.live.set(self.live() - 1);
        // SAFETY: The memory was allocated by Global in allocate.
        unsafe { AllocStrategy::<T>::deallocate(&Global, ptr, n) }
    }
}

/// Tracking, but propagated on clone and swap and never on move.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Propagating(pub Tracking);

// SAFETY: Forwards to Tracking.
unsafe impl<T> AllocStrategy<T> for Propagating {
    const PROPAGATE_ON_CLONE: bool = true;
    const PROPAGATE_ON_MOVE: bool = false;
    const PROPAGATE_ON_SWAP: bool = true;

    fn allocate(&self, n: usize) -> Result<NonNull<T>, TryReserveError> {
        AllocStrategy::<T>::allocate(&self.0, n)
    }

    unsafe fn deallocate(&self, ptr: NonNull<T>, n: usize) {
        // SAFETY: Forwarded from the caller.
        unsafe { AllocStrategy::<T>::deallocate(&self.0, ptr, n) }
    }
}

/// Tracking, limited to a small number of elements per allocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Limited(pub Tracking);

pub const LIMITED_MAX: usize = 16;

// SAFETY: Forwards to Tracking.
unsafe impl<T> AllocStrategy<T> for Limited {
    fn allocate(&self, n: usize) -> Result<NonNull<T>, TryReserveError> {
        AllocStrategy::<T>::allocate(&self.0, n)
    }

    unsafe fn deallocate(&self, ptr: NonNull<T>, n: usize) {
        // SAFETY: Forwarded from the caller.
        unsafe { AllocStrategy::<T>::deallocate(&self.0, ptr, n) }
    }

    fn max_len(&self) -> usize {
        LIMITED_MAX
    }
}

#[derive(Debug, Default)]
pub struct HookStats {
    pub constructs: Cell<usize>,
    pub destroys: Cell<usize>,
}

/// Global, but counting every element constructed and destroyed through the strategy.
#[derive(Debug, Clone, Default)]
pub struct Hooked {
    pub stats: Rc<HookStats>,
}

impl Hooked {
    pub fn constructs(&self) -> usize {
        self.stats.constructs.get()
    }

    pub fn destroys(&self) -> usize {
        self.stats.destroys.get()
    }

    pub fn live(&self) -> usize {
        self.constructs() - self.destroys()
    }
}

impl PartialEq for Hooked {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.stats, &other.stats)
    }
}

// SAFETY: All memory comes from and returns to Global.
unsafe impl<T> AllocStrategy<T> for Hooked {
    fn allocate(&self, n: usize) -> Result<NonNull<T>, TryReserveError> {
        AllocStrategy::<T>::allocate(&Global, n)
    }

    unsafe fn deallocate(&self, ptr: NonNull<T>, n: usize) {
        // SAFETY: Forwarded from the caller.
        unsafe { AllocStrategy::<T>::deallocate(&Global, ptr, n) }
    }

    unsafe fn construct(&self, slot: NonNull<T>, value: T) {
        self.stats.constructs.set(self.constructs() + 1);
        // SAFETY: Forwarded from the caller.
        unsafe { slot.write(value) }
    }

    unsafe fn destroy(&self, slot: NonNull<T>) {
        self.stats.destroys.set(self.destroys() + 1);
        // SAFETY: Forwarded from the caller.
        unsafe { slot.drop_in_place() }
    }
}
