use crate::{
    bounded::Bounded,
    config::QueueConfig,
    errors::{CapacityError, QueueKind},
};

/// FIFO queue backed by a [`CircularList`](crate::CircularList).
///
/// Enqueue appends at the tail, dequeue removes the head.
#[derive(Debug)]
pub struct Queue<T> {
    inner: Bounded<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// An unbounded queue.
    pub fn new() -> Self {
        Self::with_config(QueueConfig::unbounded())
    }

    /// A queue holding at most `max_size` elements.
    pub fn bounded(max_size: usize) -> Self {
        Self::with_config(QueueConfig::bounded(max_size))
    }

    pub fn with_config(config: QueueConfig) -> Self {
        Self {
            inner: Bounded::new(QueueKind::Queue, config),
        }
    }

    /// Add an element at the rear. Fails with [`CapacityError::QueueFull`] when full.
    pub fn enqueue(&mut self, item: T) -> Result<(), CapacityError<T>> {
        self.inner.push_back(item)
    }

    /// Remove the front element, or `None` if empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.inner.list.delete_head()
    }

    /// The front element without removing it.
    pub fn get_front(&self) -> Option<&T> {
        self.inner.list.peek_head()
    }

    /// The rear element without removing it.
    pub fn get_rear(&self) -> Option<&T> {
        self.inner.list.peek_tail()
    }

    /// Alias for [`get_front`](Self::get_front).
    pub fn peek(&self) -> Option<&T> {
        self.get_front()
    }

    /// Is the container empty?
    pub fn is_empty(&self) -> bool {
        self.inner.list.is_empty()
    }

    /// `true` once a bounded container holds `max_size` elements.
    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    /// Number of elements held.
    pub fn size(&self) -> usize {
        self.inner.list.len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn max_size(&self) -> Option<usize> {
        self.inner.max_size()
    }

    pub fn clear(&mut self) {
        self.inner.list.clear();
    }
}
