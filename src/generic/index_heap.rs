/*!
A max heap on some subset of a fixed collection of indexed values.

Each index is associated with a value for the life of the structure, and an index may be *active* (on the heap) or *inactive*.
A companion vector tracks the position on the heap of each active index, so the value of an active index can be revised and the heap repaired in logarithmic time.

For example, [IndexHeap] is used to store the activity of [atoms](crate::structures::atom), as atoms are indicies and it is a useful heuristic to choose an atom without a value with the most activity when a decision is to be made.

```rust
# use otter_maxsat::generic::index_heap::IndexHeap;
let mut heap = IndexHeap::default();

heap.add(600, 10);
heap.add(0, 70);

heap.activate(600);
heap.activate(0);

assert_eq!(heap.count(), 601);
assert_eq!(heap.value_at(5), &i32::default());

assert_eq!(heap.pop_max(), Some(0));
assert_eq!(heap.pop_max(), Some(600));
assert!(heap.pop_max().is_none());
```
*/

/// The index heap struct.
#[derive(Debug)]
pub struct IndexHeap<V: PartialOrd + Default> {
    /// The value of each index.
    values: Vec<V>,

    /// The position on the heap of each index, if the index is active.
    positions: Vec<Option<usize>>,

    /// The active indicies, arranged as a binary max heap on their values.
    heap: Vec<usize>,
}

impl<V: PartialOrd + Default> Default for IndexHeap<V> {
    fn default() -> Self {
        IndexHeap {
            values: Vec::default(),
            positions: Vec::default(),
            heap: Vec::default(),
        }
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    /// Associates `index` with `value`, growing the structure if required.
    /// Any index made by growing the structure is given the default value.
    ///
    /// Returns true if `index` was fresh, false otherwise.
    /// To place `index` on the heap [activate](IndexHeap::activate) should be called after this method.
    pub fn add(&mut self, index: usize, value: V) -> bool {
        let fresh = index >= self.values.len();
        if fresh {
            self.values.resize_with(index + 1, V::default);
            self.positions.resize(index + 1, None);
        }
        self.revalue(index, value);
        fresh
    }

    /// Places `index` on the heap, if `index` is not already on the heap.
    ///
    /// Returns true if `index` was placed on the heap, and false otherwise.
    pub fn activate(&mut self, index: usize) -> bool {
        match self.positions.get(index) {
            Some(None) => {
                let position = self.heap.len();
                self.heap.push(index);
                self.positions[index] = Some(position);
                self.sift_up(position);
                true
            }
            _ => false,
        }
    }

    /// Removes `index` from the heap, if present.
    ///
    /// Returns true if `index` was removed, and false otherwise.
    pub fn remove(&mut self, index: usize) -> bool {
        let Some(Some(position)) = self.positions.get(index).copied() else {
            return false;
        };

        let last = self.heap.len() - 1;
        self.swap(position, last);
        self.heap.pop();
        self.positions[index] = None;

        if position < self.heap.len() {
            self.sift_down(position);
            self.sift_up(position);
        }
        true
    }

    /// Repairs the heap around `index`, if active, after a revision to the value of `index`.
    pub fn heapify_if_active(&mut self, index: usize) {
        if let Some(Some(position)) = self.positions.get(index).copied() {
            self.sift_up(position);
            self.sift_down(position);
        }
    }

    /// Repairs the entire heap.
    pub fn heapify(&mut self) {
        for position in (0..self.heap.len() / 2).rev() {
            self.sift_down(position);
        }
    }

    /// The index with the greatest value on the heap, if any.
    pub fn peek_max(&self) -> Option<usize> {
        self.heap.first().copied()
    }

    /// Removes and returns the index with the greatest value on the heap, if any.
    pub fn pop_max(&mut self) -> Option<usize> {
        let max = self.peek_max()?;
        self.remove(max);
        Some(max)
    }

    /// The value of `index`.
    ///
    /// # Panics
    /// If `index` has not been added to the structure.
    pub fn value_at(&self, index: usize) -> &V {
        &self.values[index]
    }

    /// Sets the value of `index` to `value`.
    /// Note, the heap is not repaired.
    pub fn revalue(&mut self, index: usize, value: V) {
        self.values[index] = value;
    }

    /// Applies `f` to the value of `index` and repairs the heap.
    pub fn apply_to_index(&mut self, index: usize, f: impl Fn(&V) -> V) {
        self.values[index] = f(&self.values[index]);
        self.heapify_if_active(index);
    }

    /// Applies `f` to every value.
    /// Note, the heap is not repaired, as any order preserving `f` keeps the heap intact.
    pub fn apply_to_all(&mut self, f: impl Fn(&V) -> V) {
        for value in self.values.iter_mut() {
            *value = f(value)
        }
    }

    /// A count of indicies in the structure, whether active or not.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// True if no index is active, false otherwise.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    fn value_at_position(&self, position: usize) -> &V {
        &self.values[self.heap[position]]
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a]] = Some(a);
        self.positions[self.heap[b]] = Some(b);
    }

    fn sift_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / 2;
            if self.value_at_position(parent) >= self.value_at_position(position) {
                break;
            }
            self.swap(parent, position);
            position = parent;
        }
    }

    fn sift_down(&mut self, mut position: usize) {
        loop {
            let left = 2 * position + 1;
            let right = left + 1;
            let mut largest = position;

            if left < self.heap.len() && self.value_at_position(left) > self.value_at_position(largest)
            {
                largest = left;
            }
            if right < self.heap.len()
                && self.value_at_position(right) > self.value_at_position(largest)
            {
                largest = right;
            }

            if largest == position {
                break;
            }
            self.swap(position, largest);
            position = largest;
        }
    }
}
