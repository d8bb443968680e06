/// A trait for a node's link to its successor.
pub trait Link {
    /// The handle through which a node owns (or shares) its successor.
    type Handle;

    /// Get the handle to the next node
    fn next(&self) -> Option<&Self::Handle>;

    /// Replace the handle to the next node, returning the previous one
    fn set_next(&mut self, next: Option<Self::Handle>) -> Option<Self::Handle>;

    /// Detach the successor from this node
    ///
    /// After this call the node no longer owns anything past itself, so
    /// releasing it releases exactly one node.
    #[inline]
    fn take_next(&mut self) -> Option<Self::Handle> {
        self.set_next(None)
    }
}

/// A trait for a node that contains data.
pub trait NodeWithData: Link {
    /// The type of data stored in the node.
    type Data;

    /// Get the data associated with the node
    fn data(&self) -> &Self::Data;

    /// Get a mutable reference to the data associated with the node
    fn data_mut(&mut self) -> &mut Self::Data;

    /// Consume the node and return its data
    fn into_data(self) -> Self::Data;
}

/// A trait for a push-front linked list that owns its elements.
pub trait List {
    /// The type of element stored in the list.
    type Item;

    /// Push a new element to the front of the list
    fn push(&mut self, item: Self::Item);

    /// Pop the element at the front of the list
    fn pop(&mut self) -> Option<Self::Item>;

    /// Borrow the element at the front of the list
    fn peek(&self) -> Option<&Self::Item>;

    /// Get the number of elements in the list
    fn len(&self) -> usize;

    /// Check if the list is empty
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Release every element, front first, leaving the list empty
    fn clear(&mut self);
}
