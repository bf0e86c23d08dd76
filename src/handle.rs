/// Non-owning reference to a node in a [`CircularList`](crate::CircularList).
///
/// Handles stay valid until the node they name is removed. Node ids are never
/// reused and every list carries its own id, so a handle that outlived its node
/// or came from another list is rejected rather than aliasing an unrelated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    pub(crate) list: usize,
    pub(crate) node: usize,
}

impl Handle {
    /// The node id within its list, stable for the node's lifetime.
    ///
    /// Useful as a key when tracking ring positions in a side table.
    pub fn as_raw(&self) -> usize {
        self.node
    }
}
