//! Recency List Module
//!
//! Doubly-linked list of cache entries stored in an arena. Nodes are
//! addressed by stable [`Handle`]s so the index can point at a node without
//! aliasing it, and every link operation is O(1).

use crate::cache::CacheEntry;

// == Handle ==
/// Stable position of a node inside the recency list's arena.
///
/// A handle stays valid until its node is removed; the slot may then be
/// reused for a later insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(usize);

// == Node ==
#[derive(Debug)]
struct Node<K, V> {
    entry: CacheEntry<K, V>,
    prev: Option<Handle>,
    next: Option<Handle>,
}

// == Recency List ==
/// Tracks access order for eviction.
///
/// - Front = Most recently used
/// - Back = Least recently used
#[derive(Debug)]
pub struct RecencyList<K, V> {
    /// Node arena; `None` marks a vacant slot
    slots: Vec<Option<Node<K, V>>>,
    /// Vacant slots available for reuse
    free: Vec<usize>,
    head: Option<Handle>,
    tail: Option<Handle>,
    len: usize,
}

impl<K, V> Default for RecencyList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> RecencyList<K, V> {
    // == Constructor ==
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts an entry as the most recently used and returns its handle.
    pub fn push_front(&mut self, entry: CacheEntry<K, V>) -> Handle {
        let node = Node {
            entry,
            prev: None,
            next: self.head,
        };

        let handle = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                Handle(idx)
            }
            None => {
                self.slots.push(Some(node));
                Handle(self.slots.len() - 1)
            }
        };

        self.link_front(handle);
        self.len += 1;
        handle
    }

    // == Move To Front ==
    /// Marks a node as most recently used.
    ///
    /// Vacant handles are ignored.
    pub fn move_to_front(&mut self, handle: Handle) {
        if self.head == Some(handle) || self.node(handle).is_none() {
            return;
        }
        self.unlink(handle);
        self.link_front(handle);
    }

    // == Remove ==
    /// Unlinks a node and returns its entry, freeing the slot.
    pub fn remove(&mut self, handle: Handle) -> Option<CacheEntry<K, V>> {
        self.node(handle)?;
        self.unlink(handle);
        let node = self.slots[handle.0].take()?;
        self.free.push(handle.0);
        self.len -= 1;
        Some(node.entry)
    }

    // == Front / Back ==
    /// Handle of the most recently used node.
    pub fn front(&self) -> Option<Handle> {
        self.head
    }

    /// Handle of the least recently used node.
    pub fn back(&self) -> Option<Handle> {
        self.tail
    }

    // == Entry Access ==
    /// Returns the entry stored at `handle`.
    pub fn get(&self, handle: Handle) -> Option<&CacheEntry<K, V>> {
        self.node(handle).map(|node| &node.entry)
    }

    /// Returns the entry stored at `handle` for in-place mutation.
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut CacheEntry<K, V>> {
        self.slots
            .get_mut(handle.0)
            .and_then(Option::as_mut)
            .map(|node| &mut node.entry)
    }

    /// Handle of the node after `handle` (towards the back).
    pub fn next(&self, handle: Handle) -> Option<Handle> {
        self.node(handle).and_then(|node| node.next)
    }

    // == Length ==
    /// Returns the number of linked nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[cfg(test)]
    pub(crate) fn slots_reserved(&self) -> usize {
        self.slots.capacity()
    }

    fn node(&self, handle: Handle) -> Option<&Node<K, V>> {
        self.slots.get(handle.0).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, handle: Handle) -> Option<&mut Node<K, V>> {
        self.slots.get_mut(handle.0).and_then(Option::as_mut)
    }

    /// Links a detached node in at the head.
    fn link_front(&mut self, handle: Handle) {
        let old_head = self.head;
        if let Some(node) = self.node_mut(handle) {
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(head) => {
                if let Some(node) = self.node_mut(head) {
                    node.prev = Some(handle);
                }
            }
            None => self.tail = Some(handle),
        }
        self.head = Some(handle);
    }

    /// Detaches a node from its neighbours, leaving its slot occupied.
    fn unlink(&mut self, handle: Handle) {
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
}
