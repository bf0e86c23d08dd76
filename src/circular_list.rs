use crate::{errors::ListError, handle::Handle, node::Node};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_LIST_ID: AtomicUsize = AtomicUsize::new(0);

/// A circular doubly linked list whose nodes live in an id-keyed arena.
///
/// `next`/`prev` are node ids, never owning pointers, so the ring holds no
/// reference cycle: dropping the list drops the arena and every value in it.
pub struct CircularList<T> {
    list_id: usize,
    nodes: HashMap<usize, Node<T>>,
    next_id: usize,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CircularList<T> {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self {
            list_id: NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed),
            nodes: HashMap::new(),
            next_id: 0,
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// Alias for [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.len
    }

    /// Is the list empty?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a value at the front; it becomes the new head.
    pub fn prepend(&mut self, value: T) -> Handle {
        let id = self.link_at_seam(value);
        self.head = Some(id);
        self.handle(id)
    }

    /// Insert a value at the back; it becomes the new tail.
    pub fn append(&mut self, value: T) -> Handle {
        let id = self.link_at_seam(value);
        self.tail = Some(id);
        self.handle(id)
    }

    /// Insert a value **before** `anchor` in head-to-tail order.
    ///
    /// If `anchor` is the head the new node becomes the head. Errors with
    /// [`ListError::InvalidHandle`] if `anchor` is stale or belongs to another list,
    /// leaving the list untouched.
    pub fn insert_before(&mut self, anchor: Handle, value: T) -> Result<Handle, ListError> {
        let right = self.require_live(anchor)?;
        if Some(right) == self.head {
            return Ok(self.prepend(value));
        }
        let left = self.nodes[&right].prev;
        let id = self.splice_between(left, right, value);
        Ok(self.handle(id))
    }

    /// Remove the head and return its value, or `None` if the list is empty.
    pub fn delete_head(&mut self) -> Option<T> {
        let id = self.head?;
        Some(self.unlink(id))
    }

    /// Remove the tail and return its value, or `None` if the list is empty.
    pub fn delete_tail(&mut self) -> Option<T> {
        let id = self.tail?;
        Some(self.unlink(id))
    }

    /// The head value, or `None` if the list is empty.
    pub fn peek_head(&self) -> Option<&T> {
        self.head.map(|id| &self.nodes[&id].value)
    }

    /// The tail value, or `None` if the list is empty.
    pub fn peek_tail(&self) -> Option<&T> {
        self.tail.map(|id| &self.nodes[&id].value)
    }

    /// Drop every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Handle of the head node, the starting point for a forward walk.
    pub fn head_handle(&self) -> Option<Handle> {
        self.head.map(|id| self.handle(id))
    }

    /// Handle of the tail node.
    pub fn tail_handle(&self) -> Option<Handle> {
        self.tail.map(|id| self.handle(id))
    }

    /// The node after `h`. Wraps from tail to head.
    pub fn next_handle(&self, h: Handle) -> Option<Handle> {
        self.lookup(h).map(|n| self.handle(n.next))
    }

    /// The node before `h`. Wraps from head to tail.
    pub fn prev_handle(&self, h: Handle) -> Option<Handle> {
        self.lookup(h).map(|n| self.handle(n.prev))
    }

    /// Get a reference by handle (if live).
    pub fn get(&self, h: Handle) -> Option<&T> {
        self.lookup(h).map(|n| &n.value)
    }

    /// Get a mutable reference by handle (if live).
    pub fn get_mut(&mut self, h: Handle) -> Option<&mut T> {
        if h.list != self.list_id {
            return None;
        }
        self.nodes.get_mut(&h.node).map(|n| &mut n.value)
    }

    fn require_live(&self, h: Handle) -> Result<usize, ListError> {
        match self.lookup(h) {
            Some(n) => Ok(n.id),
            None => Err(ListError::InvalidHandle),
        }
    }

    fn handle(&self, id: usize) -> Handle {
        Handle {
            list: self.list_id,
            node: id,
        }
    }

    fn lookup(&self, h: Handle) -> Option<&Node<T>> {
        if h.list != self.list_id {
            return None;
        }
        self.nodes.get(&h.node)
    }

    fn alloc_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // Links a new node between tail and head. The caller decides which end it becomes.
    fn link_at_seam(&mut self, value: T) -> usize {
        match (self.tail, self.head) {
            (Some(tail), Some(head)) => self.splice_between(tail, head, value),
            _ => {
                let id = self.alloc_id();
                self.nodes.insert(id, Node::solo(id, value));
                self.head = Some(id);
                self.tail = Some(id);
                self.len = 1;
                id
            }
        }
    }

    fn splice_between(&mut self, left: usize, right: usize, value: T) -> usize {
        let id = self.alloc_id();
        {
            let l = self.node_mut(left);
            debug_assert_eq!(l.next, right);
            l.next = id;
        }
        self.node_mut(right).prev = id;
        self.nodes.insert(
            id,
            Node {
                id,
                prev: left,
                next: right,
                value,
            },
        );
        self.len += 1;
        id
    }

    fn unlink(&mut self, id: usize) -> T {
        let node = self.nodes.remove(&id).expect("ring link points at a live node");
        self.len -= 1;

        if node.is_solo() {
            debug_assert_eq!(self.len, 0);
            self.head = None;
            self.tail = None;
            return node.value;
        }

        self.node_mut(node.prev).next = node.next;
        self.node_mut(node.next).prev = node.prev;
        if self.head == Some(id) {
            self.head = Some(node.next);
        }
        if self.tail == Some(id) {
            self.tail = Some(node.prev);
        }
        node.value
    }

    fn node_mut(&mut self, id: usize) -> &mut Node<T> {
        self.nodes
            .get_mut(&id)
            .expect("ring link points at a live node")
    }

    /// Walks the ring both ways and panics if any structural invariant is broken.
    #[cfg(test)]
    pub(crate) fn assert_ring(&self) {
        assert_eq!(self.nodes.len(), self.len, "arena size drifted from len");
        let (Some(head), Some(tail)) = (self.head, self.tail) else {
            assert!(self.head.is_none() && self.tail.is_none(), "half-empty list");
            assert_eq!(self.len, 0);
            return;
        };
        assert_eq!(self.nodes[&head].prev, tail, "head.prev must be tail");
        assert_eq!(self.nodes[&tail].next, head, "tail.next must be head");
        if self.len == 1 {
            assert_eq!(head, tail);
            assert!(self.nodes[&head].is_solo());
        }

        let mut cur = head;
        for _ in 0..self.len {
            let next = self.nodes[&cur].next;
            assert_eq!(self.nodes[&next].prev, cur, "next/prev disagree");
            cur = next;
        }
        assert_eq!(cur, head, "forward lap must return to head");

        let mut cur = tail;
        for _ in 0..self.len {
            cur = self.nodes[&cur].prev;
        }
        assert_eq!(cur, tail, "backward lap must return to tail");
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut cur = self.head;
        for _ in 0..self.len {
            let Some(id) = cur else { break };
            let node = &self.nodes[&id];
            list.entry(&node.value);
            cur = Some(node.next);
        }
        list.finish()
    }
}

#[cfg(test)]
pub(crate) fn collect<T: Clone>(list: &CircularList<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(list.len());
    let Some(head) = list.head_handle() else {
        return out;
    };
    let mut cur = head;
    loop {
        out.push(list.get(cur).cloned().unwrap());
        cur = list.next_handle(cur).unwrap();
        if cur == head {
            return out;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list() {
        let mut list: CircularList<i32> = CircularList::new();
        assert!(list.is_empty());
        assert_eq!(list.size(), 0);
        assert_eq!(list.peek_head(), None);
        assert_eq!(list.peek_tail(), None);
        assert_eq!(list.delete_head(), None);
        assert_eq!(list.delete_tail(), None);
        list.assert_ring();
    }

    #[test]
    fn single_node_links_to_itself() {
        let mut list = CircularList::new();
        let h = list.append(7);
        assert_eq!(list.head_handle(), Some(h));
        assert_eq!(list.tail_handle(), Some(h));
        assert_eq!(list.next_handle(h), Some(h));
        assert_eq!(list.prev_handle(h), Some(h));
        list.assert_ring();

        assert_eq!(list.delete_tail(), Some(7));
        assert!(list.is_empty());
        list.assert_ring();
    }

    #[test]
    fn prepend_and_append() {
        let mut list = CircularList::new();
        list.append(2);
        list.prepend(1);
        list.append(3);
        list.prepend(0);

        assert_eq!(collect(&list), vec![0, 1, 2, 3]);
        assert_eq!(list.peek_head(), Some(&0));
        assert_eq!(list.peek_tail(), Some(&3));
        assert_eq!(list.len(), 4);
        list.assert_ring();
    }

    #[test]
    fn delete_from_both_ends() {
        let mut list = CircularList::new();
        for i in 1..=4 {
            list.append(i);
        }
        assert_eq!(list.delete_head(), Some(1));
        list.assert_ring();
        assert_eq!(list.delete_tail(), Some(4));
        list.assert_ring();
        assert_eq!(collect(&list), vec![2, 3]);
        assert_eq!(list.delete_head(), Some(2));
        assert_eq!(list.delete_head(), Some(3));
        assert_eq!(list.delete_head(), None);
        list.assert_ring();
    }

    #[test]
    fn ring_survives_mixed_operations() {
        let mut list = CircularList::new();
        list.append(1);
        list.append(2);
        list.prepend(0);
        list.delete_head();
        list.delete_tail();
        list.append(3);

        assert_eq!(list.size(), 2);
        assert_eq!(list.peek_head(), Some(&1));
        assert_eq!(list.peek_tail(), Some(&3));
        let head = list.head_handle().unwrap();
        let tail = list.tail_handle().unwrap();
        assert_eq!(list.prev_handle(head), Some(tail));
        assert_eq!(list.next_handle(tail), Some(head));
        list.assert_ring();
    }

    #[test]
    fn insert_before_middle_and_head() {
        let mut list = CircularList::new();
        list.append("A");
        let c = list.append("C");
        let b = list.insert_before(c, "B").unwrap();
        assert_eq!(collect(&list), vec!["A", "B", "C"]);
        assert_eq!(list.next_handle(b), Some(c));
        list.assert_ring();

        let head = list.head_handle().unwrap();
        let z = list.insert_before(head, "Z").unwrap();
        assert_eq!(list.head_handle(), Some(z));
        assert_eq!(collect(&list), vec!["Z", "A", "B", "C"]);
        list.assert_ring();
    }

    #[test]
    fn insert_before_tail_keeps_tail() {
        let mut list = CircularList::new();
        list.append(1);
        let tail = list.append(3);
        list.insert_before(tail, 2).unwrap();
        assert_eq!(list.tail_handle(), Some(tail));
        assert_eq!(collect(&list), vec![1, 2, 3]);
        list.assert_ring();
    }

    #[test]
    fn stale_handle_is_rejected() {
        let mut list = CircularList::new();
        let a = list.append(1);
        list.append(2);
        assert_eq!(list.delete_head(), Some(1));

        assert_eq!(list.insert_before(a, 9), Err(ListError::InvalidHandle));
        assert_eq!(list.get(a), None);
        assert_eq!(list.next_handle(a), None);
        assert_eq!(collect(&list), vec![2]);
        list.assert_ring();
    }

    #[test]
    fn foreign_handle_is_rejected() {
        let mut a = CircularList::new();
        let foreign = a.append(1);
        let mut b = CircularList::new();
        b.append(10);
        b.append(20);

        assert_eq!(b.insert_before(foreign, 5), Err(ListError::InvalidHandle));
        assert_eq!(b.get(foreign), None);
        assert_eq!(b.get_mut(foreign), None);
        assert_eq!(b.next_handle(foreign), None);
        assert_eq!(b.prev_handle(foreign), None);
        assert_eq!(collect(&b), vec![10, 20]);
        b.assert_ring();

        assert_eq!(a.get(foreign), Some(&1));
        assert_eq!(foreign.as_raw(), b.head_handle().unwrap().as_raw());
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut list = CircularList::new();
        let h = list.append(String::from("a"));
        list.get_mut(h).unwrap().push('b');
        assert_eq!(list.peek_head().map(String::as_str), Some("ab"));
    }

    #[test]
    fn clear_resets() {
        let mut list = CircularList::new();
        list.append(1);
        list.append(2);
        list.clear();
        assert!(list.is_empty());
        list.assert_ring();
        list.append(3);
        assert_eq!(collect(&list), vec![3]);
        list.assert_ring();
    }

    #[test]
    fn debug_prints_in_order() {
        let mut list = CircularList::new();
        list.append(2);
        list.prepend(1);
        assert_eq!(format!("{list:?}"), "[1, 2]");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Prepend(u8),
            Append(u8),
            DeleteHead,
            DeleteTail,
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                any::<u8>().prop_map(Op::Prepend),
                any::<u8>().prop_map(Op::Append),
                Just(Op::DeleteHead),
                Just(Op::DeleteTail),
            ]
        }

        proptest! {
            /// Ring closure and count accuracy hold after every operation,
            /// and the list agrees with a `VecDeque` model.
            #[test]
            fn matches_vec_deque(ops in prop::collection::vec(op(), 0..200)) {
                let mut list = CircularList::new();
                let mut model = std::collections::VecDeque::new();
                for op in ops {
                    match op {
                        Op::Prepend(v) => { list.prepend(v); model.push_front(v); }
                        Op::Append(v) => { list.append(v); model.push_back(v); }
                        Op::DeleteHead => prop_assert_eq!(list.delete_head(), model.pop_front()),
                        Op::DeleteTail => prop_assert_eq!(list.delete_tail(), model.pop_back()),
                    }
                    list.assert_ring();
                    prop_assert_eq!(list.len(), model.len());
                    prop_assert_eq!(list.peek_head(), model.front());
                    prop_assert_eq!(list.peek_tail(), model.back());
                }
                prop_assert_eq!(collect(&list), model.into_iter().collect::<Vec<_>>());
            }
        }
    }
}
