use alloc::sync::Arc;
use core::fmt;
use core::iter::FusedIterator;

use log::trace;

use super::node::SharedNode;
use crate::linked_list::traits::{Link, NodeWithData};

/// A persistent singly linked list whose tails may be shared between lists.
pub struct SharedList<T> {
    head: Option<Arc<SharedNode<T>>>,
}

impl<T> SharedList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        SharedList { head: None }
    }

    /// Returns a new list with `item` in front of this one.
    ///
    /// `self` is left untouched; both lists share every node of `self`.
    pub fn prepend(&self, item: T) -> Self {
        SharedList {
            head: Some(Arc::new(SharedNode::new(item, self.head.clone()))),
        }
    }

    /// Pushes `item` to the front of this list.
    pub fn push(&mut self, item: T) {
        self.head = Some(Arc::new(SharedNode::new(item, self.head.take())));
    }

    /// Returns the list without its first element, sharing the remaining nodes.
    pub fn tail(&self) -> Self {
        SharedList {
            head: self.head.as_ref().and_then(|head| head.next().cloned()),
        }
    }

    /// Borrow the element at the front of the list.
    pub fn head(&self) -> Option<&T> {
        self.head.as_deref().map(NodeWithData::data)
    }

    /// Counts the elements by walking the list.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Get an iterator over the list, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.head.as_deref(),
        }
    }
}

impl<T> Drop for SharedList<T> {
    fn drop(&mut self) {
        let mut released = 0usize;
        let mut chain = Unlinked {
            head: self.head.take(),
        };
        while let Some(node) = chain.next_unshared() {
            drop(node);
            released += 1;
        }
        if released > 0 {
            trace!("released {released} shared list nodes");
        }
    }
}

/// The part of a dropped list that has not been released yet.
///
/// Dropping it releases the remaining nodes one at a time, so a payload
/// panicking mid-teardown does not hand the chain to the recursive drop glue.
struct Unlinked<T> {
    head: Option<Arc<SharedNode<T>>>,
}

impl<T> Unlinked<T> {
    /// Detaches the first node if this chain was its last owner.
    ///
    /// `into_inner` only yields the node to the last owner; anything past a
    /// node another list still holds is left to that list.
    fn next_unshared(&mut self) -> Option<SharedNode<T>> {
        let mut node = Arc::into_inner(self.head.take()?)?;
        self.head = node.take_next();
        Some(node)
    }
}

impl<T> Drop for Unlinked<T> {
    fn drop(&mut self) {
        while let Some(node) = self.next_unshared() {
            drop(node);
        }
    }
}

impl<T> Clone for SharedList<T> {
    fn clone(&self) -> Self {
        SharedList {
            head: self.head.clone(),
        }
    }
}

impl<T> Default for SharedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for SharedList<T> {
    /// Pushes every item in iteration order, so the list yields them reversed.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for item in iter {
            list.push(item);
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a SharedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// An iterator over the elements of a [`SharedList`].
pub struct Iter<'a, T> {
    current: Option<&'a SharedNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|current| {
            self.current = current.next().map(|n| &**n);
            current.data()
        })
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
        }
    }
}
