#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) id: usize,
    pub(crate) prev: usize,
    pub(crate) next: usize,
    pub(crate) value: T,
}

impl<T> Node<T> {
    /// A node that closes the ring on itself.
    pub(crate) fn solo(id: usize, value: T) -> Self {
        Self {
            id,
            prev: id,
            next: id,
            value,
        }
    }

    pub(crate) fn is_solo(&self) -> bool {
        self.next == self.id && self.prev == self.id
    }
}
