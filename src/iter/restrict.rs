use super::{BidirectionalCursor, Category, Cursor};

/// Hides every capability of the wrapped cursor beyond stepping forward, so that algorithms
/// fall back to their forward strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForwardOnly<C>(pub C);

// SAFETY: Forwards to the wrapped cursor.
unsafe impl<C: Cursor> Cursor for ForwardOnly<C> {
    type Item = C::Item;

    const CATEGORY: Category = Category::Forward;

    fn step(&mut self) {
        self.0.step()
    }

    fn slot(&self) -> *mut C::Item {
        self.0.slot()
    }
}

/// Hides random access on the wrapped cursor, so that algorithms fall back to their
/// bidirectional strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidirectionalOnly<C>(pub C);

// SAFETY: Forwards to the wrapped cursor.
unsafe impl<C: BidirectionalCursor> Cursor for BidirectionalOnly<C> {
    type Item = C::Item;

    const CATEGORY: Category = Category::Bidirectional;

    fn step(&mut self) {
        self.0.step()
    }

    fn slot(&self) -> *mut C::Item {
        self.0.slot()
    }
}

// SAFETY: Forwards to the wrapped cursor.
unsafe impl<C: BidirectionalCursor> BidirectionalCursor for BidirectionalOnly<C> {
    fn step_back(&mut self) {
        self.0.step_back()
    }
}
