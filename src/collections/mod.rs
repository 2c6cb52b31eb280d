//! Sequence containers.
//!
//! # Purpose
//! I wrote these types to learn how a container manages raw memory: which slots hold live
//! values, which don't, and how values move between them without being dropped twice.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves me from writing some of the more repetitive functionality.

#[cfg(feature = "contiguous")]
pub mod contiguous;
