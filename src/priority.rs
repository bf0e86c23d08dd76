//! Priority-ordered insertion on top of [`CircularList`].
//!
//! A list fed only through [`insert_by_priority`] stays sorted by non-increasing
//! priority from head to tail, with equal priorities kept in arrival order. The
//! highest-priority item is therefore always the head.

use crate::{circular_list::CircularList, handle::Handle};
use serde::{Deserialize, Serialize};

/// A value tagged with its priority. Higher priorities dequeue first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriorityItem<T> {
    pub value: T,
    pub priority: i64,
}

impl<T> PriorityItem<T> {
    pub fn new(value: T, priority: i64) -> Self {
        Self { value, priority }
    }
}

/// Insert `value` so the list stays sorted by priority, returning the new node.
///
/// The scan walks forward from the head and stops at the first node whose
/// priority is strictly lower; reaching the head again means the new item
/// belongs at the tail.
pub fn insert_by_priority<T>(
    list: &mut CircularList<PriorityItem<T>>,
    value: T,
    priority: i64,
) -> Handle {
    let item = PriorityItem::new(value, priority);
    match first_lower(list, priority) {
        None => {
            tracing::trace!(priority, len = list.len(), "priority placement: append");
            list.append(item)
        }
        Some(stop) if Some(stop) == list.head_handle() => {
            tracing::trace!(priority, len = list.len(), "priority placement: prepend");
            list.prepend(item)
        }
        Some(stop) => {
            tracing::trace!(priority, len = list.len(), "priority placement: splice");
            list.insert_before(stop, item).expect("scan only yields live handles")
        }
    }
}

// First node with priority strictly below `priority`, or `None` after a full lap
// (or on an empty list, where append and prepend coincide).
fn first_lower<T>(list: &CircularList<PriorityItem<T>>, priority: i64) -> Option<Handle> {
    let head = list.head_handle()?;
    let mut cur = head;
    loop {
        if list.get(cur)?.priority < priority {
            return Some(cur);
        }
        cur = list.next_handle(cur)?;
        if cur == head {
            return None;
        }
    }
}
