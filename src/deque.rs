use crate::{
    bounded::Bounded,
    config::QueueConfig,
    errors::{CapacityError, QueueKind},
};

/// Double-ended queue backed by a [`CircularList`](crate::CircularList).
#[derive(Debug)]
pub struct Deque<T> {
    inner: Bounded<T>,
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deque<T> {
    pub fn new() -> Self {
        Self::with_config(QueueConfig::unbounded())
    }

    pub fn bounded(max_size: usize) -> Self {
        Self::with_config(QueueConfig::bounded(max_size))
    }

    pub fn with_config(config: QueueConfig) -> Self {
        Self {
            inner: Bounded::new(QueueKind::Deque, config),
        }
    }

    /// Add an element at the front. Fails with [`CapacityError::DequeFull`] when full.
    pub fn enqueue_front(&mut self, item: T) -> Result<(), CapacityError<T>> {
        self.inner.push_front(item)
    }

    /// Add an element at the rear. Fails with [`CapacityError::DequeFull`] when full.
    pub fn enqueue_rear(&mut self, item: T) -> Result<(), CapacityError<T>> {
        self.inner.push_back(item)
    }

    /// Remove the front element, or `None` if empty.
    pub fn dequeue_front(&mut self) -> Option<T> {
        self.inner.list.delete_head()
    }

    /// Remove the rear element, or `None` if empty.
    pub fn dequeue_rear(&mut self) -> Option<T> {
        self.inner.list.delete_tail()
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
