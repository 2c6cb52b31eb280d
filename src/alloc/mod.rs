//! Pluggable allocation strategies for the collections in this crate.
//!
//! Collections never talk to the global allocator directly. Instead they hold an
//! [`AllocStrategy`], ask it for uninitialized storage and construct elements in that storage
//! through it. [`Global`] is the default and is what every constructor without an `_in` suffix
//! uses.

mod global;
mod strategy;

pub use global::Global;
pub use strategy::{AllocStrategy, MAX_SIZE, layout_for};
