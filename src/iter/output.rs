use std::slice;

use crate::error::OutputExhausted;
use crate::util::result::ResultExtension;

/// A destination that elements can be written to one after another, like the tail of a
/// growable collection or the remaining slots of a mutable slice.
///
/// Writing to an output cursor consumes the value. The write position always moves forward.
pub trait OutputCursor<T> {
    /// Writes `value` at the current position and moves past it.
    ///
    /// # Panics
    /// Implementations with a fixed amount of room panic with [`OutputExhausted`] when they run
    /// out.
    fn put(&mut self, value: T);
}

/// Overwrites the remaining elements of the slice in order.
impl<'a, T> OutputCursor<T> for slice::IterMut<'a, T> {
    fn put(&mut self, value: T) {
        *self.next().ok_or(OutputExhausted).throw() = value;
    }
}

impl<T> OutputCursor<T> for Vec<T> {
    fn put(&mut self, value: T) {
        self.push(value);
    }
}

impl<T, O: OutputCursor<T> + ?Sized> OutputCursor<T> for &mut O {
    fn put(&mut self, value: T) {
        (**self).put(value);
    }
}
