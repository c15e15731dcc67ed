//! `SlotList` — a doubly linked list backed by a slot arena.
//!
//! Nodes live in a `Vec` of slots instead of individual heap allocations,
//! so links are indices rather than pointers. Removed slots go onto an
//! intrusive free list and are reused by later insertions.
//!
//! Every insertion returns a [`NodeHandle`] that stays valid until that exact
//! node is removed. Handles carry a generation counter: when a slot is freed
//! its generation bumps, so a handle held across a removal goes stale and
//! resolves to `None` instead of aliasing whatever reuses the slot.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `push_back` | O(1) amortized | Reuses a free slot when available |
//! | `remove(handle)` | O(1) | Detach; other handles stay valid |
//! | `front` / `back` / `next` | O(1) | Handle-based traversal |
//! | `get` / `get_mut` | O(1) | Stale handles yield `None` |
//! | `len` | O(1) | Tracked incrementally |

use core::fmt;

/// A stable address of one node in a [`SlotList`].
///
/// Contains a slot index and a generation counter. The generation makes a
/// handle single-use across the node's lifetime: once the node is removed,
/// the handle no longer resolves, even if the slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    index: u32,
    generation: u32,
}

impl NodeHandle {
    #[inline(always)]
    fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Returns the raw slot index, for diagnostics only.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.index as usize
    }
}

/// A slot in the arena: either a live node or a link in the free list.
enum SlotState<T> {
    Occupied {
        prev: Option<u32>,
        next: Option<u32>,
        value: T,
    },
    Free {
        next_free: Option<u32>,
    },
}

struct Slot<T> {
    /// Bumped every time the slot is freed.
    generation: u32,
    state: SlotState<T>,
}

/// A doubly linked list with arena storage and generational node handles.
pub struct SlotList<T> {
    slots: Vec<Slot<T>>,
    head: Option<u32>,
    tail: Option<u32>,
    free_head: Option<u32>,
    len: usize,
}

impl<T> SlotList<T> {
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free_head: None,
            len: 0,
        }
    }

    /// Creates a list with slot capacity for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            free_head: None,
            len: 0,
        }
    }

    /// Returns the number of nodes in the list.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocates a slot for `value`, reusing the free list when possible.
    fn alloc(&mut self, value: T) -> u32 {
        if let Some(free_idx) = self.free_head {
            let slot = &mut self.slots[free_idx as usize];
            let next_free = match slot.state {
                SlotState::Free { next_free } => next_free,
                SlotState::Occupied { .. } => panic!("corrupted free list: head slot is occupied"),
            };
            slot.state = SlotState::Occupied {
                prev: None,
                next: None,
                value,
            };
            self.free_head = next_free;
            free_idx
        } else {
            let idx = self.slots.len();
            assert!(idx <= u32::MAX as usize, "slot arena exceeds u32 index space");
            self.slots.push(Slot {
                generation: 0,
                state: SlotState::Occupied {
                    prev: None,
                    next: None,
                    value,
                },
            });
            idx as u32
        }
    }

    /// Frees a slot, bumping its generation and dropping the node's value.
    ///
    /// Links pointing at this slot must be updated by the caller first.
    fn release(&mut self, idx: u32) -> T {
        let slot = &mut self.slots[idx as usize];
        slot.generation = slot.generation.wrapping_add(1);
        let state = core::mem::replace(
            &mut slot.state,
            SlotState::Free {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(idx);
        match state {
            SlotState::Occupied { value, .. } => value,
            SlotState::Free { .. } => panic!("corrupted list: released a free slot"),
        }
    }

    /// Resolves a handle to its slot index, or `None` if the handle is stale.
    #[inline]
    fn resolve(&self, handle: NodeHandle) -> Option<u32> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        match slot.state {
            SlotState::Occupied { .. } => Some(handle.index),
            SlotState::Free { .. } => None,
        }
    }

    /// Builds the current handle for an occupied slot index.
    #[inline(always)]
    fn handle_at(&self, idx: u32) -> NodeHandle {
        NodeHandle::new(idx, self.slots[idx as usize].generation)
    }

    /// Appends `value` to the back of the list, returning its handle.
    pub fn push_back(&mut self, value: T) -> NodeHandle {
        let new_idx = self.alloc(value);
        let old_tail = self.tail;

        if let Some(tail_idx) = old_tail {
            if let SlotState::Occupied { next, .. } = &mut self.slots[tail_idx as usize].state {
                *next = Some(new_idx);
            }
        } else {
            self.head = Some(new_idx);
        }

        if let SlotState::Occupied { prev, .. } = &mut self.slots[new_idx as usize].state {
            *prev = old_tail;
        }

        self.tail = Some(new_idx);
        self.len += 1;
        self.handle_at(new_idx)
    }

    /// Returns the handle of the first node, if any.
    #[inline]
    pub fn front(&self) -> Option<NodeHandle> {
        self.head.map(|idx| self.handle_at(idx))
    }

    /// Returns the handle of the last node, if any.
    #[inline]
    pub fn back(&self) -> Option<NodeHandle> {
        self.tail.map(|idx| self.handle_at(idx))
    }

    /// Returns the handle of the node after `handle`.
    ///
    /// `None` when `handle` is stale or names the last node.
    pub fn next(&self, handle: NodeHandle) -> Option<NodeHandle> {
        let idx = self.resolve(handle)?;
        match self.slots[idx as usize].state {
            SlotState::Occupied { next, .. } => next.map(|n| self.handle_at(n)),
            SlotState::Free { .. } => None,
        }
    }

    /// Returns `true` if `handle` still names a live node in this list.
    #[inline]
    pub fn contains(&self, handle: NodeHandle) -> bool {
        self.resolve(handle).is_some()
    }

    /// Returns a reference to the value at `handle`, or `None` if stale.
    pub fn get(&self, handle: NodeHandle) -> Option<&T> {
        let idx = self.resolve(handle)?;
        match &self.slots[idx as usize].state {
            SlotState::Occupied { value, .. } => Some(value),
            SlotState::Free { .. } => None,
        }
    }

    /// Returns a mutable reference to the value at `handle`, or `None` if stale.
    pub fn get_mut(&mut self, handle: NodeHandle) -> Option<&mut T> {
        let idx = self.resolve(handle)?;
        match &mut self.slots[idx as usize].state {
            SlotState::Occupied { value, .. } => Some(value),
            SlotState::Free { .. } => None,
        }
    }

    /// Removes the node at `handle` in O(1), returning its value.
    ///
    /// Other handles stay valid; the removed handle goes stale.
    pub fn remove(&mut self, handle: NodeHandle) -> Option<T> {
        let idx = self.resolve(handle)?;

        let (prev, next) = match self.slots[idx as usize].state {
            SlotState::Occupied { prev, next, .. } => (prev, next),
            SlotState::Free { .. } => return None,
        };

        match prev {
            Some(p) => {
                if let SlotState::Occupied { next: n, .. } = &mut self.slots[p as usize].state {
                    *n = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(n) => {
                if let SlotState::Occupied { prev: p, .. } = &mut self.slots[n as usize].state {
                    *p = prev;
                }
            }
            None => self.tail = prev,
        }

        self.len -= 1;
        Some(self.release(idx))
    }

    /// Removes and returns the first value in the list.
    pub fn pop_front(&mut self) -> Option<T> {
        let front = self.front()?;
        self.remove(front)
    }

    /// Removes every node from the list.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Iterates front-to-back over the values.
    pub fn iter(&self) -> SlotListIter<'_, T> {
        SlotListIter {
            list: self,
            current: self.head,
        }
    }
}

impl<T> Default for SlotList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SlotList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Forward iterator over a [`SlotList`].
pub struct SlotListIter<'a, T> {
    list: &'a SlotList<T>,
    current: Option<u32>,
}

impl<'a, T> Iterator for SlotListIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        match &self.list.slots[idx as usize].state {
            SlotState::Occupied { next, value, .. } => {
                self.current = *next;
                Some(value)
            }
            SlotState::Free { .. } => panic!("corrupted list: link points to a free slot"),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.list.len))
    }
}

impl<'a, T> IntoIterator for &'a SlotList<T> {
    type Item = &'a T;
    type IntoIter = SlotListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
