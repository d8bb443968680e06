use alloc::sync::Arc;

use chain_collections_derive::Node;

/// A node in a [`SharedList`](super::SharedList).
#[derive(Node)]
#[node(crate_path = "crate")]
pub struct SharedNode<T> {
    next: Option<Arc<SharedNode<T>>>,
    data: T,
}

impl<T> SharedNode<T> {
    #[inline]
    pub fn new(data: T, next: Option<Arc<Self>>) -> Self {
        Self { next, data }
    }
}
