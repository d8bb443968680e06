//! # Shared Linked List
//!
//! A persistent list: [`SharedList::prepend`] returns a new list whose tail
//! is the old list, and both stay usable. Nodes are reference counted, so a
//! tail lives for as long as any list still reaches it.
//!
//! ```text
//! a:        head -> 1 -> 0 -> None
//! b: head -> 2 ---^
//! ```
//!
//! Dropping a list releases its nodes front to back until it reaches one that
//! is still owned by another list, and stops there.

mod node;
pub mod list;

pub use list::{Iter, SharedList};
