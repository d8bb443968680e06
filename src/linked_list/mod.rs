//! Push-front singly linked lists.
//!
//! Every list here releases its nodes front to back with an explicit loop.
//! Letting each node's destructor drop its successor would recurse once per
//! node, and a long enough list overflows the stack.
//!
//! # Examples
//!
//! ```
//! use chain_collections::linked_list::{owned::OwnedList, traits::List};
//!
//! let mut list = OwnedList::new();
//! list.push(10);
//! list.push(20);
//! list.push(30);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![30, 20, 10]);
//!
//! // A million nodes tear down in constant stack depth.
//! let wall: OwnedList<u32> = (0..1_000_000).collect();
//! assert_eq!(wall.peek(), Some(&999_999));
//! drop(wall);
//! ```
pub mod arena;
pub mod owned;
pub mod shared;
pub mod traits;

#[cfg(test)]
mod test_util;
