use alloc::vec::Vec;
use core::fmt;
use core::mem;

use log::{debug, trace};

use super::iter::Iter;
use super::node::{ArenaNode, Slot};
use crate::error::Result;
use crate::linked_list::traits::{Link, List, NodeWithData};

/// A singly linked list stored as node records in a slot vector.
pub struct ArenaList<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    /// First vacant slot, if any.
    free: Option<usize>,
    len: usize,
}

impl<T> ArenaList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        ArenaList {
            slots: Vec::new(),
            head: None,
            free: None,
            len: 0,
        }
    }

    /// Creates an empty list with room for `capacity` nodes before it reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        ArenaList {
            slots: Vec::with_capacity(capacity),
            head: None,
            free: None,
            len: 0,
        }
    }

    /// Number of nodes the list can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Pushes `item` to the front, reporting allocation failure instead of aborting.
    ///
    /// On failure the list is unchanged and `item` is dropped.
    pub fn try_push(&mut self, item: T) -> Result<()> {
        if self.free.is_none() {
            self.slots.try_reserve(1)?;
        }
        self.push(item);
        Ok(())
    }

    /// Mutably borrow the element at the front of the list.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        let head = self.head?;
        Some(self.node_mut(head).data_mut())
    }

    /// Get an iterator over the list, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self, self.head, self.len)
    }

    pub(super) fn node(&self, index: usize) -> &ArenaNode<T> {
        match &self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("linked index {index} points at a vacant slot"),
        }
    }

    fn node_mut(&mut self, index: usize) -> &mut ArenaNode<T> {
        match &mut self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("linked index {index} points at a vacant slot"),
        }
    }

    /// Stores `node` in a vacant slot, growing the arena when none is left.
    fn insert(&mut self, node: ArenaNode<T>) -> usize {
        match self.free {
            Some(index) => {
                let slot = mem::replace(&mut self.slots[index], Slot::Occupied(node));
                match slot {
                    Slot::Vacant { next_free } => self.free = next_free,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                }
                index
            }
            None => {
                if self.slots.len() == self.slots.capacity() {
                    debug!("growing list arena past {} slots", self.slots.capacity());
                }
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    /// Vacates the slot at `index` and returns the node it held.
    fn release(&mut self, index: usize) -> ArenaNode<T> {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        match mem::replace(&mut self.slots[index], vacant) {
            Slot::Occupied(node) => {
                self.free = Some(index);
                node
            }
            Slot::Vacant { .. } => unreachable!("linked index {index} points at a vacant slot"),
        }
    }
}

impl<T> List for ArenaList<T> {
    type Item = T;

    fn push(&mut self, item: T) {
        let index = self.insert(ArenaNode::new(item, self.head));
        self.head = Some(index);
        self.len += 1;
    }

    fn pop(&mut self) -> Option<T> {
        let head = self.head?;
        let mut node = self.release(head);
        self.head = node.take_next();
        self.len -= 1;
        Some(node.into_data())
    }

    fn peek(&self) -> Option<&T> {
        self.head.map(|head| self.node(head).data())
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        let released = self.len;
        while let Some(head) = self.head {
            let mut node = self.release(head);
            self.head = node.take_next();
            self.len -= 1;
        }
        // Every slot is vacant now; drop the free list along with them.
        self.slots.clear();
        self.free = None;
        if released > 0 {
            trace!("released {released} arena list nodes");
        }
    }
}

impl<T> Drop for ArenaList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for ArenaList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArenaList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for ArenaList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.slots.reserve(lower.saturating_sub(self.slots.len() - self.len));
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for ArenaList<T> {
    /// Pushes every item in iteration order, so the list yields them reversed.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a ArenaList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
