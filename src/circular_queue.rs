use crate::{
    bounded::Bounded,
    config::QueueConfig,
    errors::{CapacityError, QueueKind},
};

/// Fixed-capacity FIFO queue.
///
/// Unlike [`Queue`](crate::Queue) the capacity is mandatory; a slot freed by
/// [`dequeue`](Self::dequeue) can be reused immediately.
#[derive(Debug)]
pub struct CircularQueue<T> {
    inner: Bounded<T>,
}

impl<T> CircularQueue<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Bounded::new(QueueKind::CircularQueue, QueueConfig::bounded(capacity)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.inner.max_size().unwrap_or_default()
    }

    /// Always `Some(capacity)`; matches the other front ends.
    pub fn max_size(&self) -> Option<usize> {
        self.inner.max_size()
    }

    /// Fails with [`CapacityError::CircularQueueFull`] when full.
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

    pub fn clear(&mut self) {
        self.inner.list.clear();
    }
}
