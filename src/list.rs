//! Recency list stored in an index arena.
//!
//! Nodes live in a `Vec` of slots and link to each other by [`Handle`]
//! rather than by pointer. A handle stays valid, and keeps addressing the
//! same node, across every insertion, removal and relocation of *other*
//! nodes. It is invalidated only when its own node is removed, at which
//! point the slot goes on a free-list for reuse.
//!
//! ```text
//!   slots: Vec<Option<Node<T>>>          free: [3]
//!   ┌───┬──────────────────────────────┐
//!   │ 0 │ Node { a, prev: -, next: 2 } │ ◄── head (least recent)
//!   │ 1 │ Node { c, prev: 2, next: - } │ ◄── tail (most recent)
//!   │ 2 │ Node { b, prev: 0, next: 1 } │
//!   │ 3 │ None                         │
//!   └───┴──────────────────────────────┘
//! ```

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

/// Stable reference to a node in a [`List`].
///
/// A handle is a plain arena index. It is cheap to copy and store in the
/// key index, and it never borrows the list.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(usize);

impl Handle {
    /// Returns the arena slot this handle addresses.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({})", self.index())
    }
}

/// A node in the list. Not exposed to users of `List`.
#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<Handle>,
    next: Option<Handle>,
}

/// Doubly linked list whose nodes are addressed by [`Handle`].
///
/// The head is the least recently used node and the tail the most recently
/// used one. `push_back`, `remove`, `move_to_back` and `front` are O(1).
///
/// Passing a handle whose node has already been removed is a logic error.
/// The cache never does this; the list checks it only in debug builds.
///
/// # Examples
///
/// ```ignore
/// use arena_lru::list::List;
///
/// let mut list = List::default();
/// let a = list.push_back("a");
/// let b = list.push_back("b");
///
/// list.move_to_back(a);
/// assert_eq!(list.front(), Some(b));
/// ```
pub struct List<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<Handle>,
    tail: Option<Handle>,
    len: usize,
}

impl<T> List<T> {
    /// Creates an empty list with room for `capacity` nodes before the
    /// arena has to grow.
    pub fn with_capacity(capacity: usize) -> Self {
        List {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of nodes in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list contains no nodes.
    #[inline]
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the handle of the least recently used node, or `None` if the
    /// list is empty.
    #[inline]
    pub fn front(&self) -> Option<Handle> {
        self.head
    }

    /// Returns the handle of the most recently used node, or `None` if the
    /// list is empty.
    #[inline]
    pub fn back(&self) -> Option<Handle> {
        self.tail
    }

    /// Returns true if `handle` addresses a live node.
    pub fn contains(&self, handle: Handle) -> bool {
        matches!(self.slots.get(handle.0), Some(Some(_)))
    }

    /// Returns the value stored at `handle`. Does not change the order.
    #[inline]
    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.node(handle).map(|node| &node.value)
    }

    /// Returns a mutable reference to the value stored at `handle`.
    /// Does not change the order.
    #[inline]
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.node_mut(handle).map(|node| &mut node.value)
    }

    /// Appends `value` as the most recently used node and returns its
    /// handle.
    ///
    /// Vacant slots are reused before the arena grows.
    pub fn push_back(&mut self, value: T) -> Handle {
        let node = Node {
            value,
            prev: None,
            next: None,
        };
        let handle = match self.free.pop() {
            Some(idx) => {
                debug_assert!(self.slots[idx].is_none(), "free slot is occupied");
                self.slots[idx] = Some(node);
                Handle(idx)
            }
            None => {
                self.slots.push(Some(node));
                Handle(self.slots.len() - 1)
            }
        };
        self.attach_back(handle);
        self.len += 1;
        handle
    }

    /// Removes the node at `handle` and returns its value.
    ///
    /// Only `handle` is invalidated; every other handle keeps addressing
    /// the same node.
    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        debug_assert!(self.contains(handle), "remove of stale {:?}", handle);
        self.detach(handle);
        let node = self.slots.get_mut(handle.0)?.take()?;
        self.free.push(handle.0);
        self.len -= 1;
        Some(node.value)
    }

    /// Removes the least recently used node and returns its value.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        self.remove(head)
    }

    /// Relocates the node at `handle` to the tail, making it the most
    /// recently used node. The value is untouched.
    pub fn move_to_back(&mut self, handle: Handle) {
        debug_assert!(self.contains(handle), "move of stale {:?}", handle);
        if self.tail == Some(handle) {
            return;
        }
        self.detach(handle);
        self.attach_back(handle);
    }

    /// Removes every node. All outstanding handles become invalid.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Returns an iterator over `(handle, value)` pairs from the least to
    /// the most recently used node.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
            remaining: self.len,
        }
    }

    fn node(&self, handle: Handle) -> Option<&Node<T>> {
        self.slots.get(handle.0).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, handle: Handle) -> Option<&mut Node<T>> {
        self.slots.get_mut(handle.0).and_then(Option::as_mut)
    }

    /// Unlinks `handle` from its neighbours, leaving the slot occupied.
    fn detach(&mut self, handle: Handle) {
        let (prev, next) = match self.node(handle) {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(p) => {
                if let Some(node) = self.node_mut(p) {
                    node.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(n) => {
                if let Some(node) = self.node_mut(n) {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        if let Some(node) = self.node_mut(handle) {
            node.prev = None;
            node.next = None;
        }
    }

    /// Links an unlinked, occupied slot in after the current tail.
    fn attach_back(&mut self, handle: Handle) {
        let old_tail = self.tail;
        if let Some(node) = self.node_mut(handle) {
            node.prev = old_tail;
            node.next = None;
        }
        match old_tail {
            Some(t) => {
                if let Some(node) = self.node_mut(t) {
                    node.next = Some(handle);
                }
            }
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);
    }

    /// Walks the list in both directions and panics on any broken link,
    /// length mismatch or leaked slot.
    #[cfg(test)]
    pub fn debug_validate_invariants(&self) {
        let mut count = 0;
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(handle) = cursor {
            let node = self.node(handle).expect("linked handle is vacant");
            assert_eq!(node.prev, prev, "prev link mismatch at {:?}", handle);
            count += 1;
            assert!(count <= self.len, "cycle detected");
            prev = Some(handle);
            cursor = node.next;
        }
        assert_eq!(prev, self.tail, "tail does not end the forward walk");
        assert_eq!(count, self.len, "forward walk length mismatch");
        assert_eq!(
            self.slots.len(),
            self.len + self.free.len(),
            "slot accounting mismatch"
        );
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(|(_, v)| v)).finish()
    }
}

/// Iterator over a [`List`] from least to most recently used.
pub struct Iter<'a, T> {
    list: &'a List<T>,
    current: Option<Handle>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (Handle, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.current?;
        let node = self.list.node(handle)?;
        self.current = node.next;
        self.remaining -= 1;
        Some((handle, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("current", &self.current)
            .field("remaining", &self.remaining)
            .finish()
    }
}
