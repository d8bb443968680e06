use core::iter::FusedIterator;

use super::list::ArenaList;
use crate::linked_list::traits::{Link, NodeWithData};

/// An iterator over the elements of an [`ArenaList`], following next indices.
pub struct Iter<'a, T> {
    list: &'a ArenaList<T>,
    current: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(list: &'a ArenaList<T>, head: Option<usize>, len: usize) -> Self {
        Self {
            list,
            current: head,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.current?);
        self.current = node.next().copied();
        self.remaining -= 1;
        Some(node.data())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            current: self.current,
            remaining: self.remaining,
        }
    }
}
