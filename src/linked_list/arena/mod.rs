//! # Arena Linked List
//!
//! The owned list laid out flat: nodes are records in one growable slot
//! vector and link to their successor by index. Popped slots are threaded
//! onto a free list and handed out again by the next push.
//!
//! Teardown chases indices in a loop, so there is no drop recursion to avoid
//! in the first place; elements are still released front to back.

mod node;
pub mod iter;
pub mod list;

pub use iter::Iter;
pub use list::ArenaList;
