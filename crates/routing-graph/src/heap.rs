//! Indexed binary min-heap with O(log n) decrease-key.
//!
//! Used exclusively on the stack of a single A* invocation — it is never
//! shared across threads. Ids are `NodeId`s in `[0, node_count)`; a
//! position map (`pos[id] -> heap_index`, `usize::MAX` meaning "not
//! present") makes `decrease_key`/`contains` O(1) lookups instead of O(n)
//! scans.

use routing_core::NodeId;

const NOT_PRESENT: usize = usize::MAX;

struct Entry {
    id: NodeId,
    key: f64,
}

/// Binary min-heap keyed by `f64`, indexed by `NodeId` for decrease-key.
pub struct IndexedMinHeap {
    heap: Vec<Entry>,
    /// `pos[id.index()]` = index into `heap`, or `NOT_PRESENT`.
    pos: Vec<usize>,
}

impl IndexedMinHeap {
    /// Create a heap pre-sized for `node_count` possible ids.
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            heap: Vec::with_capacity(node_count),
            pos: vec![NOT_PRESENT; node_count],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.pos[id.index()] != NOT_PRESENT
    }

    /// Insert `id` with the given key. `id` must not already be present.
    pub fn insert(&mut self, id: NodeId, key: f64) {
        debug_assert!(!self.contains(id), "id already present in heap");
        let i = self.heap.len();
        self.heap.push(Entry { id, key });
        self.pos[id.index()] = i;
        self.sift_up(i);
    }

    /// Decrease the key of `id` to `new_key`. A no-op if `new_key` is not
    /// strictly smaller than the current key — A* never needs to increase a
    /// key, so this silently ignores that case rather than erroring.
    pub fn decrease_key(&mut self, id: NodeId, new_key: f64) {
        let i = self.pos[id.index()];
        debug_assert!(i != NOT_PRESENT, "decrease_key on absent id");
        if new_key >= self.heap[i].key {
            return;
        }
        self.heap[i].key = new_key;
        self.sift_up(i);
    }

    /// Remove and return the (id, key) with the smallest key.
    pub fn extract_min(&mut self) -> Option<(NodeId, f64)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let Entry { id, key } = self.heap.pop().unwrap();
        self.pos[id.index()] = NOT_PRESENT;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((id, key))
    }

    // ── internal heap mechanics ────────────────────────────────────────────

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.pos[self.heap[a].id.index()] = a;
        self.pos[self.heap[b].id.index()] = b;
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[i].key < self.heap[parent].key {
                self.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;
            if left < n && self.heap[left].key < self.heap[smallest].key {
                smallest = left;
            }
            if right < n && self.heap[right].key < self.heap[smallest].key {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }
}
