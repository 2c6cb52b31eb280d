//! This crate is my attempt at writing the array-backed sequence of a standard template library,
//! along with the part of its algorithm library that the sequence leans on.
//!
//! # Purpose
//! This crate is a learning project, with no expectation for it to be used in production. The
//! sequence ([`Vector`](collections::contiguous::Vector)) owns one raw allocation, tracks which
//! slots are live and which are uninitialized, and uses the generic range algorithms in
//! [`algorithm`] to shift, rotate and construct elements inside that allocation.
//!
//! # Method
//! The algorithms are written against cursors ([`iter::Cursor`]) with an explicit capability
//! [`Category`](iter::Category). Each algorithm has a generic element-wise version and, where it
//! makes sense, a faster version that is picked at compile time based on what the cursor (or the
//! element type) can do. The fast version is never allowed to change the result.
//!
//! Memory comes from a pluggable [`AllocStrategy`](alloc::AllocStrategy), with
//! [`Global`](alloc::Global) as the default.
//!
//! # Error Handling
//! Like `std`, the common methods panic when something goes irrecoverably wrong (capacity
//! overflow or running out of memory), because nobody wants to handle an error every time they
//! push into a Vector. The allocating methods also have `try_` twins (`try_push`, `try_reserve`,
//! and friends) that return a [`TryReserveError`](error::TryReserveError) instead.
//!
//! Errors are strongly typed, using enums for static dispatch rather than dynamic, with structs
//! that implement [`Error`](std::error::Error).
//!
//! # Dependencies
//! This crate uses `std` for the global allocator and depends on `derive_more` for the error
//! boilerplate and `log` for tracing reallocations.
#![feature(strict_overflow_ops)]
#![feature(box_vec_non_null)]
#![feature(extend_one)]
#![feature(extend_one_unchecked)]
#![feature(trusted_len)]
#![feature(debug_closure_helpers)]
#![feature(min_specialization)]
#![feature(rustc_attrs)]
#![feature(slice_range)]
#![feature(maybe_uninit_write_slice)]
#![allow(internal_features)]

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod alloc;
#[cfg(feature = "algorithm")]
pub mod algorithm;
#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "algorithm")]
pub mod iter;

pub(crate) mod util;

#[doc(inline)]
pub use util::error;
