use alloc::boxed::Box;

use chain_collections_derive::Node;

/// A node in an [`OwnedList`](super::OwnedList).
#[derive(Node)]
#[node(crate_path = "crate")]
pub struct OwnedNode<T> {
    next: Option<Box<OwnedNode<T>>>,
    data: T,
}

impl<T> OwnedNode<T> {
    /// Creates a node that takes ownership of `next`.
    #[inline]
    pub fn new(data: T, next: Option<Box<Self>>) -> Self {
        Self { next, data }
    }

    /// Borrows the payload and the successor mutably at the same time.
    #[inline]
    pub fn split_mut(&mut self) -> (&mut T, Option<&mut Self>) {
        (&mut self.data, self.next.as_deref_mut())
    }
}
