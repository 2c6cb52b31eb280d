//! A module containing [`Vector`] and associated types.
//!
//! Currently, the only other included type is [`IntoIter`] for owned iteration over a Vector.
//! [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter) from [`std::slice`] are used
//! for borrowed iteration.
//!
//! [`Vector`] is also re-exported under the parent module.

mod assign;
mod growth;
mod insert;
mod iter;
mod vector;

#[cfg(test)]
mod tests;

pub use growth::grow_to;
pub use iter::IntoIter;
pub use vector::Vector;

/// Creates a [`Vector`] containing the arguments, in the same way as [`vec!`].
///
/// # Examples
/// ```
/// # use sequence_lib::vector;
/// let vec = vector![1, 2, 3];
/// assert_eq!(&*vec, &[1, 2, 3]);
///
/// let zeroes = vector![0_u8; 4];
/// assert_eq!(&*zeroes, &[0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::collections::contiguous::Vector::new()
    };
    ($value:expr; $count:expr) => {
        $crate::collections::contiguous::Vector::<_>::repeat($value, $count)
    };
    ($($item:expr),+ $(,)?) => {
        $crate::collections::contiguous::Vector::from([$($item),+])
    };
}
