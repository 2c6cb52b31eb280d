/// Plans the capacity to grow to when a Vector with capacity `cap` needs room for `required`
/// elements and can hold at most `max`.
///
/// The capacity doubles, unless doubling would reach `max`, in which case `max` is used, or
/// unless `required` is larger still, in which case exactly `required` is used. Doubling is what
/// keeps repeated pushes at amortized `O(1)`: reaching `n` elements from empty takes `O(log n)`
/// reallocations, which move `O(n)` elements in total.
///
/// The result can be smaller than `required` only if `required` exceeds `max`, which the caller
/// has to treat as a capacity overflow.
///
/// # Examples
/// ```
/// # use sequence_lib::collections::contiguous::vector::grow_to;
/// assert_eq!(grow_to(4, 5, 100), 8);
/// assert_eq!(grow_to(4, 20, 100), 20);
/// assert_eq!(grow_to(0, 1, 100), 1);
/// assert_eq!(grow_to(60, 61, 100), 100);
/// ```
pub const fn grow_to(cap: usize, required: usize, max: usize) -> usize {
    // Same as 2 * cap >= max, without overflowing.
    if cap >= max.saturating_sub(cap) {
        max
    } else if cap * 2 > required {
        cap * 2
    } else {
        required
    }
}
