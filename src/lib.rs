//! Singly linked lists with ownership-driven, non-recursive teardown.
//!
//! Three representations of the same push-front list live under
//! [`linked_list`]:
//!
//! - [`linked_list::owned::OwnedList`]: every node exclusively owns its successor.
//! - [`linked_list::arena::ArenaList`]: nodes are records in a slot vector, linked by index.
//! - [`linked_list::shared::SharedList`]: persistent list whose tails may be shared.
#![no_std]

extern crate alloc;

pub mod error;
pub mod linked_list;

pub use error::{Error, Result};
