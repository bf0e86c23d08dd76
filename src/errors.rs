use thiserror::Error;

/// Errors that can occur when addressing list nodes by handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("invalid handle")]
    InvalidHandle,
}

/// The front end a capacity error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueKind {
    Queue,
    CircularQueue,
    Deque,
    PriorityQueue,
}

/// A bounded container refused an insert because it was already full.
///
/// The rejected item is handed back so the caller can retry after making room.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapacityError<T> {
    #[error("Queue is full")]
    QueueFull(T),
    #[error("Circular queue is full")]
    CircularQueueFull(T),
    #[error("Deque is full")]
    DequeFull(T),
    #[error("Priority queue is full")]
    PriorityQueueFull(T),
}

impl<T> CapacityError<T> {
    pub(crate) fn new(kind: QueueKind, item: T) -> Self {
        match kind {
            QueueKind::Queue => Self::QueueFull(item),
            QueueKind::CircularQueue => Self::CircularQueueFull(item),
            QueueKind::Deque => Self::DequeFull(item),
            QueueKind::PriorityQueue => Self::PriorityQueueFull(item),
        }
    }

    pub fn kind(&self) -> QueueKind {
        match self {
            Self::QueueFull(_) => QueueKind::Queue,
            Self::CircularQueueFull(_) => QueueKind::CircularQueue,
            Self::DequeFull(_) => QueueKind::Deque,
            Self::PriorityQueueFull(_) => QueueKind::PriorityQueue,
        }
    }

    /// Extracts the item that was refused.
    pub fn into_item(self) -> T {
        match self {
            Self::QueueFull(item)
            | Self::CircularQueueFull(item)
            | Self::DequeFull(item)
            | Self::PriorityQueueFull(item) => item,
        }
    }
}
