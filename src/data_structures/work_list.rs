use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Indexed binary min-heap used as the search work list.
///
/// Entries are ordered by priority, then by the order in which they were
/// pushed, so equal priorities pop first-in first-out. Every key appears at
/// most once and its heap slot is tracked, which gives O(log n)
/// [`decrease_key`](PriorityWorkList::decrease_key) instead of a re-sort.
#[derive(Debug, Clone)]
pub struct PriorityWorkList<K, P>
where
    K: Copy + Eq + Hash + Debug,
    P: Ord + Copy + Debug,
{
    /// Heap-ordered entries
    heap: Vec<Entry<K, P>>,

    /// Key -> slot in `heap`
    slots: HashMap<K, usize>,

    /// Sequence number handed to the next pushed key
    next_sequence: u64,
}

#[derive(Debug, Clone, Copy)]
struct Entry<K, P> {
    key: K,
    priority: P,
    sequence: u64,
}

impl<K, P: Ord> Entry<K, P> {
    #[inline]
    fn precedes(&self, other: &Self) -> bool {
        (&self.priority, self.sequence) < (&other.priority, other.sequence)
    }
}

impl<K, P> PriorityWorkList<K, P>
where
    K: Copy + Eq + Hash + Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty work list
    pub fn new() -> Self {
        PriorityWorkList {
            heap: Vec::new(),
            slots: HashMap::new(),
            next_sequence: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PriorityWorkList {
            heap: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.slots.contains_key(key)
    }

    /// Current priority of a queued key
    pub fn priority(&self, key: &K) -> Option<P> {
        self.slots.get(key).map(|&slot| self.heap[slot].priority)
    }

    /// Inserts `key` in order. Returns false and leaves the list untouched if
    /// the key is already queued.
    pub fn push(&mut self, key: K, priority: P) -> bool {
        if self.slots.contains_key(&key) {
            return false;
        }
        let slot = self.heap.len();
        self.heap.push(Entry {
            key,
            priority,
            sequence: self.next_sequence,
        });
        self.next_sequence += 1;
        self.slots.insert(key, slot);
        self.sift_up(slot);
        true
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(K, P)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop()?;
        self.slots.remove(&entry.key);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((entry.key, entry.priority))
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(K, P)> {
        self.heap.first().map(|entry| (entry.key, entry.priority))
    }

    /// Lowers the priority of a queued key and moves it to its new place.
    ///
    /// Returns false if the key is not queued or `priority` is not lower than
    /// the current one. The entry keeps its original insertion sequence for
    /// tie-breaking.
    pub fn decrease_key(&mut self, key: &K, priority: P) -> bool {
        let slot = match self.slots.get(key) {
            Some(&slot) => slot,
            None => return false,
        };
        if priority >= self.heap[slot].priority {
            return false;
        }
        self.heap[slot].priority = priority;
        self.sift_up(slot);
        true
    }

    /// Clears the work list
    pub fn clear(&mut self) {
        self.heap.clear();
        self.slots.clear();
        self.next_sequence = 0;
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.heap[slot].precedes(&self.heap[parent]) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;

            if left < len && self.heap[left].precedes(&self.heap[smallest]) {
                smallest = left;
            }
            if right < len && self.heap[right].precedes(&self.heap[smallest]) {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.slots.insert(self.heap[a].key, a);
        self.slots.insert(self.heap[b].key, b);
    }
}

impl<K, P> Default for PriorityWorkList<K, P>
where
    K: Copy + Eq + Hash + Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
