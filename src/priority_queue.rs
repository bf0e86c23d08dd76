use crate::{
    bounded::Bounded,
    config::QueueConfig,
    errors::{CapacityError, QueueKind},
    priority::{insert_by_priority, PriorityItem},
};

/// Priority queue backed by a priority-ordered [`CircularList`](crate::CircularList).
///
/// Higher priorities dequeue first; equal priorities dequeue in arrival order.
/// The capacity check runs before any placement, so a full queue rejects even
/// an item that would outrank everything in it.
#[derive(Debug)]
pub struct PriorityQueue<T> {
    inner: Bounded<PriorityItem<T>>,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self::with_config(QueueConfig::unbounded())
    }

    pub fn bounded(max_size: usize) -> Self {
        Self::with_config(QueueConfig::bounded(max_size))
    }

    pub fn with_config(config: QueueConfig) -> Self {
        Self {
            inner: Bounded::new(QueueKind::PriorityQueue, config),
        }
    }

    /// Fails with [`CapacityError::PriorityQueueFull`] carrying `value` when full.
    pub fn enqueue(&mut self, value: T, priority: i64) -> Result<(), CapacityError<T>> {
        let value = self.inner.admit(value)?;
        insert_by_priority(&mut self.inner.list, value, priority);
        Ok(())
    }

    /// Remove the highest-priority value.
    pub fn dequeue(&mut self) -> Option<T> {
        self.inner.list.delete_head().map(|item| item.value)
    }

    /// The highest-priority value.
    pub fn get_front(&self) -> Option<&T> {
        self.inner.list.peek_head().map(|item| &item.value)
    }

    /// The lowest-priority value.
    pub fn get_rear(&self) -> Option<&T> {
        self.inner.list.peek_tail().map(|item| &item.value)
    }

    pub fn peek(&self) -> Option<&T> {
        self.get_front()
    }

    /// Priority of the value [`peek`](Self::peek) would return.
    pub fn peek_priority(&self) -> Option<i64> {
        self.inner.list.peek_head().map(|item| item.priority)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.list.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

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
