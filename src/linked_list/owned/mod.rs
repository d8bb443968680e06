//! # Owned Linked List
//!
//! A singly linked list in which every node exclusively owns its successor
//! through a `Box`, and the list owns the first node.
//!
//! ```text
//! head -> node(30) -> node(20) -> node(10) -> None
//! ```
//!
//! ## Teardown
//!
//! The compiler-generated drop glue for such a chain drops `head`, whose
//! `next` field drops the second node, and so on: recursion as deep as the
//! list is long. [`list::OwnedList`] instead detaches the head's successor,
//! overwrites the head with it (freeing exactly one node), and repeats until
//! the head is empty.

mod node;
pub mod iter;
pub mod list;

pub use iter::{IntoIter, Iter, IterMut};
pub use list::OwnedList;

#[cfg(test)]
mod tests;
