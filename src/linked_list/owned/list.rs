use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use log::trace;

use super::iter::{IntoIter, Iter, IterMut};
use super::node::OwnedNode;
use crate::linked_list::traits::{Link, List, NodeWithData};

/// A singly linked list with exclusive per-node ownership.
pub struct OwnedList<T> {
    head: Option<Box<OwnedNode<T>>>,
    len: usize,
}

impl<T> OwnedList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        OwnedList { head: None, len: 0 }
    }

    /// Mutably borrow the element at the front of the list.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(NodeWithData::data_mut)
    }

    /// Get an iterator over the list, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.as_deref(), self.len)
    }

    /// Get an iterator over the list that yields mutable references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head.as_deref_mut(), self.len)
    }

    /// Detaches the first node from the list and from its successor.
    ///
    /// Dropping the returned node frees exactly that node.
    fn unlink_head(&mut self) -> Option<Box<OwnedNode<T>>> {
        self.head.take().map(|mut head| {
            self.head = head.take_next();
            self.len -= 1;
            head
        })
    }
}

impl<T> List for OwnedList<T> {
    type Item = T;

    fn push(&mut self, item: T) {
        self.head = Some(Box::new(OwnedNode::new(item, self.head.take())));
        self.len += 1;
    }

    fn pop(&mut self) -> Option<T> {
        self.unlink_head().map(|head| (*head).into_data())
    }

    fn peek(&self) -> Option<&T> {
        self.head.as_deref().map(NodeWithData::data)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        let released = self.len;
        {
            let mut guard = ClearGuard(self);
            while let Some(node) = guard.0.unlink_head() {
                drop(node);
            }
        }
        if released > 0 {
            trace!("released {released} owned list nodes");
        }
    }
}

/// Keeps releasing nodes one at a time if a payload's `Drop` panics mid-teardown.
struct ClearGuard<'a, T>(&'a mut OwnedList<T>);

impl<T> Drop for ClearGuard<'_, T> {
    fn drop(&mut self) {
        while let Some(node) = self.0.unlink_head() {
            drop(node);
        }
    }
}

impl<T> Drop for OwnedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for OwnedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for OwnedList<T> {
    fn clone(&self) -> Self {
        let items: Vec<&T> = self.iter().collect();
        items.into_iter().rev().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for OwnedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for OwnedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for OwnedList<T> {}

impl<T> Extend<T> for OwnedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for OwnedList<T> {
    /// Pushes every item in iteration order, so the list yields them reversed.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> IntoIterator for OwnedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a OwnedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut OwnedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
