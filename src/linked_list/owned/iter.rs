use core::iter::FusedIterator;

use super::list::OwnedList;
use super::node::OwnedNode;
use crate::linked_list::traits::{Link, List, NodeWithData};

/// An iterator over the elements of an [`OwnedList`].
pub struct Iter<'a, T> {
    current: Option<&'a OwnedNode<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(head: Option<&'a OwnedNode<T>>, len: usize) -> Self {
        Self {
            current: head,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|current| {
            self.current = current.next().map(|n| &**n);
            self.remaining -= 1;
            current.data()
        })
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
            current: self.current,
            remaining: self.remaining,
        }
    }
}

/// An iterator over mutable references to the elements of an [`OwnedList`].
pub struct IterMut<'a, T> {
    current: Option<&'a mut OwnedNode<T>>,
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(head: Option<&'a mut OwnedNode<T>>, len: usize) -> Self {
        Self {
            current: head,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.take().map(|current| {
            let (data, next) = current.split_mut();
            self.current = next;
            self.remaining -= 1;
            data
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator that pops elements off the front of an [`OwnedList`].
pub struct IntoIter<T> {
    list: OwnedList<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(list: OwnedList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
