use crate::{
    circular_list::CircularList,
    config::QueueConfig,
    errors::{CapacityError, QueueKind},
};

/// A list plus an optional capacity, shared by every front end.
///
/// Every insert goes through [`Bounded::admit`] first, so a full container is
/// never touched.
#[derive(Debug)]
pub(crate) struct Bounded<T> {
    pub(crate) list: CircularList<T>,
    max_size: Option<usize>,
    kind: QueueKind,
}

impl<T> Bounded<T> {
    pub(crate) fn new(kind: QueueKind, config: QueueConfig) -> Self {
        Self {
            list: CircularList::new(),
            max_size: config.max_size(),
            kind,
        }
    }

    pub(crate) fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    pub(crate) fn is_full(&self) -> bool {
        self.max_size.is_some_and(|m| self.list.len() >= m)
    }

    /// Passes `item` through if there is room, otherwise hands it back inside the error.
    pub(crate) fn admit<U>(&self, item: U) -> Result<U, CapacityError<U>> {
        if self.is_full() {
            tracing::debug!(
                kind = ?self.kind,
                max_size = ?self.max_size,
                size = self.list.len(),
                "insert rejected: container is full"
            );
            return Err(CapacityError::new(self.kind, item));
        }
        Ok(item)
    }

    pub(crate) fn push_front(&mut self, item: T) -> Result<(), CapacityError<T>> {
        let item = self.admit(item)?;
        self.list.prepend(item);
        Ok(())
    }

    pub(crate) fn push_back(&mut self, item: T) -> Result<(), CapacityError<T>> {
        let item = self.admit(item)?;
        self.list.append(item);
        Ok(())
    }
}
