use chain_collections_derive::Node;

/// A record in an [`ArenaList`](super::ArenaList).
#[derive(Debug, Node)]
#[node(crate_path = "crate")]
pub struct ArenaNode<T> {
    next: Option<usize>,
    data: T,
}

impl<T> ArenaNode<T> {
    #[inline]
    pub fn new(data: T, next: Option<usize>) -> Self {
        Self { next, data }
    }
}

/// A slot of the arena: either a live node or a link in the free list.
#[derive(Debug)]
pub enum Slot<T> {
    Occupied(ArenaNode<T>),
    Vacant { next_free: Option<usize> },
}
