//! Generic range algorithms, in the style of a standard template library.
//!
//! Most algorithms come in two layers:
//! - A safe function over slices (or any [`IntoIterator`] for single pass algorithms), which is
//!   what most code wants.
//! - An `unsafe` function over [`Cursor`](crate::iter::Cursor)s, suffixed with `_range` where it
//!   would otherwise clash, which is what collections use to work on partially initialized
//!   storage.
//!
//! Each algorithm has an element-wise version that works for every cursor and element type.
//! Faster versions are selected at compile time, based on the cursor's
//! [`Category`](crate::iter::Category) or the element type. Bulk memory copies for [`Copy`] types
//! come from the slice methods in std that are already specialized for them. A faster version
//! always produces the same result as the element-wise one, including on overlapping ranges.
//!
//! Results are written through [`OutputCursor`](crate::iter::OutputCursor)s where the algorithm
//! produces a new sequence.

mod copy;
mod merge;
mod partition;
mod permutation;
mod rotate;
mod search;
pub mod uninit;


pub use copy::{
    copy, copy_backward_within, copy_if, copy_iter, copy_n, copy_within, fill, fill_n,
    move_backward, move_range, swap_ranges,
};
pub use merge::{
    includes, includes_by, merge, merge_by, set_difference, set_difference_by, set_intersection,
    set_intersection_by, set_symmetric_difference, set_symmetric_difference_by, set_union,
    set_union_by,
};
pub use partition::{
    is_partitioned, partition, partition_copy, partition_point, partition_range, stable_partition,
    stable_partition_range,
};
pub use permutation::{
    is_permutation, is_permutation_by, next_permutation, next_permutation_by, prev_permutation,
    prev_permutation_by,
};
pub use rotate::{reverse, reverse_copy, reverse_range, rotate, rotate_copy, rotate_range};
pub use search::{
    binary_search, binary_search_by, equal, equal_range, equal_range_by, is_sorted,
    is_sorted_until, is_sorted_until_by, lexicographical_cmp_by, lexicographical_compare,
    lexicographical_compare_by, lower_bound, lower_bound_by, mismatch, upper_bound,
    upper_bound_by,
};
pub use uninit::{uninitialized_copy, uninitialized_fill_n, uninitialized_fill_with};
