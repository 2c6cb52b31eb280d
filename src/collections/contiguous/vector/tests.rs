#![cfg(test)]

use std::cell::Cell;
use std::iter;
use std::rc::Rc;

use super::*;
use crate::algorithm::copy;
use crate::util::alloc::{
    CountedDrop, Hooked, LIMITED_MAX, Limited, PanicOnClone, Propagating, Tracking, ZeroSizedType,
};
use crate::util::panic::assert_panics;
use crate::vector;

fn strings(values: &[&str]) -> Vector<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn panicky(len: usize, budget: &Rc<Cell<usize>>) -> Vector<PanicOnClone> {
    (0..len).map(|i| PanicOnClone::new(i, budget)).collect()
}

fn values(vec: &[PanicOnClone]) -> Vec<usize> {
    vec.iter().map(|p| p.value).collect()
}

#[test]
fn test_push_from_empty() {
    let mut vec = Vector::new();
    for i in 1..=5 {
        vec.push(i);
    }

    assert_eq!(vec.len(), 5);
    assert_eq!(&*vec, &[1, 2, 3, 4, 5]);
    assert!(vec.cap() >= 5, "Capacity should cover every pushed element.");
}

#[test]
#[allow(clippy::reversed_empty_ranges)]
fn test_erase_range() {
    let mut vec = vector![1, 2, 3, 4, 5];
    assert_eq!(vec.erase_range(1..3), 1, "Should return the position after the erased range.");
    assert_eq!(&*vec, &[1, 4, 5]);

    assert_eq!(vec.erase_range(3..3), 3, "An empty range at the end should be allowed.");
    assert_eq!(vec.erase_range(1..3), 1);
    assert_eq!(&*vec, &[1]);

    assert_panics!({
        vec.erase_range(0..2);
    });
    assert_panics!({
        vec.erase_range(1..0);
    });
}

#[test]
fn test_insert_n_at_front() {
    let mut vec = vector![1, 2, 3];
    assert_eq!(vec.insert_n(0, 2, 9), 0);
    assert_eq!(&*vec, &[9, 9, 1, 2, 3]);

    assert_eq!(vec.insert_n(5, 0, 7), 5, "Inserting nothing should still return the position.");
    assert_eq!(vec.len(), 5);

    assert_panics!({
        vec.insert_n(6, 1, 0);
    });
}

#[test]
fn test_push_when_full() {
    let mut vec = Vector::with_cap(4);
    vec.extend([10, 20, 30, 40]);
    assert_eq!(vec.cap(), 4);

    vec.push(50);
    assert!(vec.cap() >= 5);
    assert_eq!(vec.cap(), 8, "A full Vector should double its capacity.");
    assert_eq!(&*vec, &[10, 20, 30, 40, 50]);
}

#[test]
fn test_growth_amortization() {
    let tracking = Tracking::new();
    let mut vec = Vector::new_in(tracking.clone());

    for i in 0..1000 {
        vec.push(i);
        assert!(vec.len() <= vec.cap());
    }

    // Capacities 1, 2, 4, ..., 1024.
    assert_eq!(
        tracking.allocations(),
        11,
        "Pushing should reallocate a logarithmic number of times."
    );
    assert_eq!(vec.cap(), 1024);
    assert!(vec.iter().copied().eq(0..1000), "Reallocating should preserve every element.");

    drop(vec);
    assert_eq!(tracking.live(), 0, "Dropping the Vector should release its memory.");
}

#[test]
fn test_matches_vec_model() {
    let mut vec = Vector::new();
    let mut model = Vec::new();
    let mut seed = 17_usize;

    for step in 0..500 {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let at = if model.is_empty() { 0 } else { (seed >> 33) % (model.len() + 1) };

        match step % 7 {
            0 | 1 => {
                vec.push(step);
                model.push(step);
            }
            2 => {
                vec.insert(at, step);
                model.insert(at, step);
            }
            3 if at < model.len() => {
                vec.erase(at);
                model.remove(at);
            }
            4 => {
                vec.insert_n(at, 3, step);
                for _ in 0..3 {
                    model.insert(at, step);
                }
            }
            5 => {
                let end = (at + 2).min(model.len());
                vec.erase_range(at..end);
                model.drain(at..end).for_each(drop);
            }
            _ => {
                assert_eq!(vec.pop(), model.pop());
            }
        }

        assert!(vec.len() <= vec.cap(), "Length should never exceed capacity.");
        assert_eq!(&*vec, &*model, "Contents should match the model after step {step}.");
    }
}

#[test]
fn test_insert_preserves_order() {
    for pos in 0..=5 {
        let mut vec = vector![0, 1, 2, 3, 4];
        assert_eq!(vec.insert(pos, 99), pos);

        let mut expected = vec![0, 1, 2, 3, 4];
        expected.insert(pos, 99);
        assert_eq!(
            &*vec,
            &*expected,
            "Inserting at {pos} should keep the other elements in order."
        );
    }

    let mut vec = strings(&["a", "c"]);
    vec.insert_with(1, || "b".to_string());
    vec.insert_iter(3, ["d", "e"].map(String::from));
    vec.insert_iter(0, iter::once("_").map(String::from).filter(|_| true));
    assert_eq!(vec, strings(&["_", "a", "b", "c", "d", "e"]));

    vec.insert_from_slice(1, &strings(&["x", "y"]));
    assert_eq!(vec, strings(&["_", "x", "y", "a", "b", "c", "d", "e"]));
}

#[test]
fn test_remove() {
    let mut vec = strings(&["a", "b", "c", "d"]);
    assert_eq!(vec.remove(1), "b");
    assert_eq!(vec.swap_remove(0), "a");
    assert_eq!(vec, strings(&["d", "c"]));
    assert_eq!(vec.erase(1), 1);
    assert_eq!(vec, strings(&["d"]));

    assert_panics!({
        vec.remove(1);
    });
    assert_panics!({
        vec.swap_remove(1);
    });
}

#[test]
fn test_self_aliasing_push() {
    let mut vec = strings(&["first", "second"]);
    assert_eq!(vec.cap(), vec.len(), "The push should have to reallocate.");

    assert_eq!(vec.push_from_within(0), 2);
    assert_eq!(vec, strings(&["first", "second", "first"]));

    vec.extend_from_within(1..);
    assert_eq!(vec, strings(&["first", "second", "first", "second", "first"]));

    assert_panics!({
        vec.push_from_within(5);
    });
}

#[test]
fn test_self_aliasing_insert() {
    // Reallocating.
    let mut vec = strings(&["a", "b", "c"]);
    assert_eq!(vec.cap(), vec.len());
    vec.insert_from_within(0, 2);
    assert_eq!(vec, strings(&["c", "a", "b", "c"]), "The inserted value should be the old back.");

    // In place.
    let mut vec = strings(&["a", "b", "c"]);
    vec.reserve_exact(1);
    let ptr = vec.as_ptr();
    vec.insert_from_within(0, 2);
    assert_eq!(vec.as_ptr(), ptr, "The insertion should have fit in place.");
    assert_eq!(vec, strings(&["c", "a", "b", "c"]), "The shift shouldn't corrupt the source.");

    // A source range on both sides of the insertion point.
    let mut vec = strings(&["a", "b", "c", "d"]);
    vec.insert_range_from_within(2, 1..3);
    assert_eq!(vec, strings(&["a", "b", "b", "c", "c", "d"]));

    let mut vec = strings(&["a", "b", "c", "d"]);
    vec.reserve_exact(2);
    vec.insert_range_from_within(2, 1..3);
    assert_eq!(vec, strings(&["a", "b", "b", "c", "c", "d"]));

    assert_panics!({
        vec.insert_range_from_within(0, 5..7);
    });
}

#[test]
fn test_copy_round_trip() {
    let source = [3_u32, 1, 4, 1, 5, 9, 2, 6];
    let vec = Vector::from(&source[..]);
    let mut out = [0_u32; 8];
    assert_eq!(copy(&vec, &mut out), 8);
    assert_eq!(out, source, "The bulk copy path should round trip.");

    let source = ["x", "y", "z"].map(String::from);
    let vec = Vector::from(&source[..]);
    let mut out = vec![String::new(); 3];
    copy(&vec, &mut out);
    assert_eq!(out, source, "The element-wise copy path should round trip.");
}

#[test]
fn test_realloc_panic_leaves_old_buffer() {
    let budget = Rc::new(Cell::new(usize::MAX));
    let mut vec = panicky(3, &budget);
    assert_eq!(vec.cap(), 3);
    let ptr = vec.as_ptr();

    budget.set(1);
    assert_panics!({
        vec.insert_n(1, 3, PanicOnClone::new(9, &budget));
    });

    assert_eq!(vec.as_ptr(), ptr, "A failed reallocation should keep the old buffer.");
    assert_eq!(vec.cap(), 3);
    assert_eq!(values(&vec), [0, 1, 2], "A failed reallocation should leave the contents alone.");

    drop(vec);
    assert_eq!(Rc::strong_count(&budget), 1, "Every clone should have been dropped.");
}

#[test]
fn test_in_place_panic_restores_contents() {
    let budget = Rc::new(Cell::new(usize::MAX));
    let mut vec = panicky(4, &budget);
    vec.reserve_exact(4);

    budget.set(2);
    assert_panics!({
        vec.insert_n(1, 4, PanicOnClone::new(9, &budget));
    });
    assert_eq!(values(&vec), [0, 1, 2, 3], "The tail should be moved back into place.");

    budget.set(1);
    assert_panics!({
        vec.insert_range_from_within(4, 0..3);
    });
    assert_eq!(values(&vec), [0, 1, 2, 3]);

    budget.set(0);
    assert_panics!({
        vec.push_from_within(0);
    });
    assert_eq!(vec.len(), 4);

    drop(vec);
    assert_eq!(Rc::strong_count(&budget), 1, "Every clone should have been dropped.");
}

#[test]
fn test_panicking_clone_without_leaks() {
    let tracking = Tracking::new();
    let budget = Rc::new(Cell::new(2));
    let shared: Vec<PanicOnClone> = (0..4).map(|i| PanicOnClone::new(i, &budget)).collect();

    assert_panics!({
        let mut vec = Vector::new_in(tracking.clone());
        vec.extend_from_slice(&shared);
    });

    assert_eq!(tracking.live(), 0, "The partially filled allocation should be released.");
    drop(shared);
    assert_eq!(Rc::strong_count(&budget), 1);
}

#[test]
fn test_panicking_iterator_leaves_contents() {
    let hooked = Hooked::default();
    let mut vec = Vector::new_in(hooked.clone());
    vec.extend([1, 2, 3]);

    assert_panics!({
        let items = (10..20).filter(|&i| {
            if i == 13 {
                panic!("iterator failed");
            }
            true
        });
        vec.insert_iter(1, items);
    });
    assert_eq!(&*vec, &[1, 2, 3], "Items yielded before the panic should be dropped again.");
    assert_eq!(hooked.live(), 3);
}

#[test]
fn test_construct_destroy_hooks() {
    let hooked = Hooked::default();
    let mut vec = Vector::new_in(hooked.clone());

    vec.push(1);
    vec.insert(0, 2);
    vec.insert_n(0, 2, 3);
    vec.extend_from_slice(&[4, 5, 6, 7, 8]);
    assert_eq!(hooked.constructs(), 9, "Every insertion should construct through the strategy.");
    assert_eq!(hooked.destroys(), 0);

    vec.erase(0);
    vec.erase_range(0..1);
    assert_eq!(hooked.destroys(), 2, "Erasing one element should destroy it like a range.");

    vec.insert_from_slice(1, &[9, 9]);
    vec.insert_iter(0, 0..2);
    vec.insert_iter(0, (0..2).filter(|_| true));
    vec.insert_range_from_within(0, 0..2);
    vec.extend_from_within(..1);
    vec.resize(vec.len() + 2, 0);
    let copy = vec.clone();
    assert_eq!(hooked.live(), vec.len() + copy.len());

    drop(copy);
    vec.truncate(3);
    assert_eq!(hooked.live(), 3);
    drop(vec);
    assert_eq!(hooked.live(), 0, "Every constructed element should have been destroyed.");

    // A panicking clone destroys what it built through the strategy as well.
    let hooked = Hooked::default();
    let budget = Rc::new(Cell::new(usize::MAX));
    let mut vec = Vector::new_in(hooked.clone());
    vec.extend((0..3).map(|i| PanicOnClone::new(i, &budget)));

    budget.set(1);
    assert_panics!({
        vec.insert_n(1, 3, PanicOnClone::new(9, &budget));
    });
    vec.reserve_exact(3);
    budget.set(1);
    assert_panics!({
        vec.insert_n(1, 3, PanicOnClone::new(9, &budget));
    });
    assert_eq!(values(&vec), [0, 1, 2]);
    assert_eq!(hooked.live(), 3);
}

#[test]
fn test_alloc_failure() {
    let tracking = Tracking::failing_after(1);
    let mut vec = Vector::new_in(tracking.clone());

    assert_eq!(vec.try_push(1), Ok(()));
    let error = vec.try_push(2).unwrap_err();
    assert!(error.is_alloc_failure(), "The second allocation should fail.");
    assert_eq!(&*vec, &[1], "A failed push should leave the Vector untouched.");

    assert!(vec.try_reserve_exact(10).is_err());
    assert!(vec.try_insert(0, 0).is_err());
    assert_eq!(vec.cap(), 1);

    let error = Vector::<u8, _>::try_with_cap_in(4, Tracking::failing_after(0)).unwrap_err();
    assert!(error.is_alloc_failure());

    drop(vec);
    assert_eq!(tracking.live(), 0);
}

#[test]
fn test_capacity_overflow() {
    let mut vec = Vector::new_in(Limited::default());
    for i in 0..LIMITED_MAX {
        vec.push(i);
    }
    assert_eq!(vec.cap(), LIMITED_MAX, "Growth should clamp to the largest length.");
    assert_eq!(vec.max_len(), LIMITED_MAX);

    let error = vec.try_push(0).unwrap_err();
    assert!(error.is_capacity_overflow());
    assert!(vec.try_reserve(1).is_err());
    assert_panics!({
        vec.push(0);
    });
    assert_eq!(vec.len(), LIMITED_MAX);

    assert!(Vector::<u8, _>::try_with_cap_in(LIMITED_MAX + 1, Limited::default()).is_err());
    assert_panics!({
        Vector::<u8>::with_cap(usize::MAX);
    });
    assert_panics!({
        Vector::<u8>::new().reserve_exact(usize::MAX);
    });
}

#[test]
fn test_reserve_and_shrink() {
    let tracking = Tracking::new();
    let mut vec = Vector::new_in(tracking.clone());
    vec.extend([1, 2, 3]);

    vec.reserve_exact(10);
    assert_eq!(vec.cap(), 13);
    vec.reserve_exact(2);
    assert_eq!(vec.cap(), 13, "Reserving should never shrink.");

    vec.reserve(11);
    assert_eq!(vec.cap(), 26, "Amortized reserving should follow the growth plan.");

    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 3);
    assert_eq!(&*vec, &[1, 2, 3]);

    vec.clear();
    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 0);
    assert_eq!(tracking.live(), 0, "Shrinking to nothing should release the memory.");
}

#[test]
fn test_resize_and_truncate() {
    let counter = CountedDrop::new(0);
    let mut vec: Vector<CountedDrop> = iter::repeat_with(|| counter.clone()).take(6).collect();

    vec.truncate(4);
    assert_eq!(counter.take(), 2, "Truncating should drop the tail.");
    vec.truncate(10);
    assert_eq!(vec.len(), 4, "Truncating to a longer length should do nothing.");

    let mut vec = vector![1, 2];
    vec.resize(4, 7);
    assert_eq!(&*vec, &[1, 2, 7, 7]);
    vec.resize_default(5);
    assert_eq!(&*vec, &[1, 2, 7, 7, 0]);
    let mut next = 10;
    vec.resize_with(7, || {
        next += 1;
        next
    });
    assert_eq!(&*vec, &[1, 2, 7, 7, 0, 11, 12]);
    vec.resize(1, 0);
    assert_eq!(&*vec, &[1]);
}

#[test]
fn test_assign() {
    let tracking = Tracking::new();
    let mut vec = Vector::new_in(tracking.clone());
    vec.extend(["a", "b", "c", "d"].map(String::from));

    vec.assign_from_slice(&["x".to_string(), "y".to_string()]);
    assert_eq!(vec, strings(&["x", "y"]));
    assert_eq!(vec.cap(), 4, "Assigning fewer elements should reuse the memory.");

    vec.assign_n(3, "z".to_string());
    assert_eq!(vec, strings(&["z", "z", "z"]));

    vec.assign_iter(["1", "2", "3", "4", "5"].map(String::from));
    assert_eq!(vec, strings(&["1", "2", "3", "4", "5"]));
    assert_eq!(vec.cap(), 5, "Assigning a known number of elements should allocate exactly.");

    vec.assign_iter(["p", "q"].into_iter().map(String::from).filter(|_| true));
    assert_eq!(vec, strings(&["p", "q"]));
    vec.assign_iter((0..7).map(|i| i.to_string()).filter(|_| true));
    assert_eq!(vec.len(), 7);
    assert_eq!(vec[6], "6");
}

#[test]
fn test_move_assignment() {
    let tracking = Tracking::new();
    let mut a = Vector::new_in(tracking.clone());
    a.extend([1, 2, 3]);
    let mut b = Vector::new_in(Tracking::new());
    b.extend([4, 5]);

    a.assign_from(b);
    assert_eq!(&*a, &[4, 5]);
    assert_ne!(a.allocator(), &tracking, "Moving should take the source's strategy by default.");
    assert_eq!(tracking.live(), 0, "The old memory should be released.");

    let own = Propagating(Tracking::new());
    let mut a = Vector::new_in(own.clone());
    a.push(1);
    let other = Propagating(Tracking::new());
    let mut b = Vector::new_in(other.clone());
    b.extend([6, 7, 8]);

    a.assign_from(b);
    assert_eq!(&*a, &[6, 7, 8]);
    assert_eq!(a.allocator(), &own, "A strategy that doesn't propagate on move should be kept.");
    assert_eq!(other.0.live(), 0, "The source's memory should be released.");

    let c = Vector::from_vector_in(a, Tracking::new());
    assert_eq!(&*c, &[6, 7, 8]);
    assert_eq!(own.0.live(), 0);
}

#[test]
fn test_swap() {
    let mut a = vector![1, 2, 3];
    let mut b = vector![4];
    a.swap(&mut b);
    assert_eq!(&*a, &[4]);
    assert_eq!(&*b, &[1, 2, 3]);

    let (ta, tb) = (Propagating(Tracking::new()), Propagating(Tracking::new()));
    let mut a = Vector::new_in(ta.clone());
    a.push(1);
    let mut b = Vector::new_in(tb.clone());
    a.swap(&mut b);
    assert_eq!(a.allocator(), &tb, "Strategies that propagate on swap should be swapped.");
    assert_eq!(&*b, &[1]);

    let mut a = Vector::new_in(Tracking::new());
    let mut b = Vector::new_in(Tracking::new());
    a.push(1);
    assert_panics!({
        a.swap(&mut b);
    });

    let shared = Tracking::new();
    let mut a = Vector::new_in(shared.clone());
    let mut b = Vector::new_in(shared.clone());
    a.push(1);
    a.swap(&mut b);
    assert_eq!((a.len(), b.len()), (0, 1));
}

#[test]
fn test_clone() {
    let vec = strings(&["a", "b"]);
    let cloned = vec.clone();
    assert_eq!(vec, cloned);
    assert_eq!(cloned.cap(), 2);

    let source_strategy = Propagating(Tracking::new());
    let mut source = Vector::new_in(source_strategy.clone());
    source.extend([1, 2, 3]);
    let mut dest = Vector::new_in(Propagating(Tracking::new()));
    dest.push(0);
    dest.clone_from(&source);
    assert_eq!(&*dest, &[1, 2, 3]);
    assert_eq!(
        dest.allocator(),
        &source_strategy,
        "Strategies that propagate on clone should be copied."
    );

    let own = Tracking::new();
    let mut dest = Vector::new_in(own.clone());
    dest.clone_from(&Vector::from_vector_in(source, Tracking::new()));
    assert_eq!(&*dest, &[1, 2, 3]);
    assert_eq!(dest.allocator(), &own);
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::<ZeroSizedType>::repeat_default(5);
    assert_eq!(vec[4], ZeroSizedType);

    for _ in 0..100 {
        vec.push(ZeroSizedType);
    }
    vec.insert_n(3, 10, ZeroSizedType);
    vec.erase_range(0..50);
    assert_eq!(vec.len(), 65);
    assert_eq!(vec.iter().count(), 65, "Should iterate over the right number of ZST instances.");
    assert_eq!(vec.into_iter().rev().count(), 65);
}

#[test]
fn test_at() {
    let mut vec = vector![1, 2, 3];
    assert_eq!(vec.at(2), Ok(&3));
    assert_eq!(
        vec.at(3).unwrap_err(),
        crate::error::IndexOutOfBounds { index: 3, len: 3 },
        "Out of bounds access should report the index and length."
    );

    *vec.at_mut(0).unwrap() = 10;
    assert_eq!(vec[0], 10);
    assert!(vec.at_mut(5).is_err());
}

#[test]
fn test_vec_conversion() {
    let mut original = Vec::with_capacity(10);
    original.extend(["a", "b"].map(String::from));

    let vec = Vector::from(original);
    assert_eq!(vec.cap(), 10, "Converting from a Vec should keep its allocation.");
    assert_eq!(vec, strings(&["a", "b"]));

    let back = Vec::from(vec);
    assert_eq!(back, ["a", "b"]);
    assert_eq!(back.capacity(), 10);

    let text = Vector::from(String::from("hello"));
    assert_eq!(String::try_from(text), Ok(String::from("hello")));
    assert!(String::try_from(vector![0xff_u8]).is_err());
}

#[test]
fn test_into_iter() {
    let mut iter = vector![0, 1, 2, 3, 4].into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.as_slice(), &[1, 2, 3]);
    assert_eq!(iter.collect::<Vec<_>>(), [1, 2, 3]);

    let counter = CountedDrop::new(0);
    let vec: Vector<CountedDrop> = iter::repeat_with(|| counter.clone()).take(10).collect();
    let mut iter = vec.into_iter();
    drop(iter.next());
    drop(iter.next_back());
    assert_eq!(counter.take(), 2);

    drop(iter);
    assert_eq!(counter.take(), 8, "Dropping an owned iterator should drop the rest.");
}

#[test]
fn test_equality_and_order() {
    let vec = Vector::from_iter_sized(0_usize..5);
    assert_eq!(vec, vector![0, 1, 2, 3, 4]);
    assert_ne!(vec, vector![0, 1, 2, 5, 4]);

    let tracked: Vector<usize, Tracking> = Vector::from_vector_in(vec.clone(), Tracking::new());
    assert_eq!(vec, tracked, "Equality shouldn't depend on the strategy.");

    assert!(vector![1, 2] < vector![1, 2, 0]);
    assert!(vector![1, 3] > vector![1, 2, 9]);
    assert_eq!(vector![1, 2].cmp(&vector![1, 2]), std::cmp::Ordering::Equal);
    assert_eq!(vector![1.0, f64::NAN].partial_cmp(&vector![1.0, f64::NAN]), None);

    assert_eq!(format!("{}", vector![1, 2]), "[1, 2]");
    assert_eq!(format!("{:?}", Vector::<u8>::new()), "Vector { contents: [], len: 0, cap: 0 }");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let vec: Vector<CountedDrop> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(vec);

    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");
}
