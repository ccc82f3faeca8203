/*!
A max-heap over some subset of a fixed range of indicies.

Each index is paired with a value which persists whether or not the index is *active* (on the heap).
This fits the needs of a branching heuristic: every atom has an activity, while only the atoms which may be chosen are on the heap.
An atom popped off the heap keeps its activity, and may be activated again after a backjump.

```rust
# use otter_asp::generic::index_heap::IndexHeap;
let mut heap = IndexHeap::default();

heap.add(600, 10);
heap.add(3, 70);

heap.activate(600);
heap.activate(3);

assert_eq!(heap.count(), 601);
assert_eq!(heap.value_at(5), &i32::default());

assert_eq!(heap.pop_max(), Some(3));
assert_eq!(heap.pop_max(), Some(600));
assert!(heap.pop_max().is_none());
```
*/

/// The index heap struct.
pub struct IndexHeap<V: PartialOrd + Default> {
    /// The value of each index.
    values: Vec<V>,

    /// Where an index is on the heap, if active.
    position: Vec<Option<usize>>,

    /// The active indicies, as a binary heap.
    heap: Vec<usize>,
}

impl<V: PartialOrd + Default> Default for IndexHeap<V> {
    fn default() -> Self {
        IndexHeap {
            values: Vec::default(),
            position: Vec::default(),
            heap: Vec::default(),
        }
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    /// Pairs `index` with `value`, growing the structure if required.
    ///
    /// Returns true if `index` was fresh, and false otherwise.
    /// A fresh index is inactive until [activated](IndexHeap::activate), while an active index is repositioned.
    pub fn add(&mut self, index: usize, value: V) -> bool {
        let fresh = self.values.len() <= index;
        if fresh {
            self.values.resize_with(index + 1, V::default);
            self.position.resize(index + 1, None);
        }
        self.values[index] = value;
        self.heapify_if_active(index);
        fresh
    }

    /// Removes `index` from the heap, if active.
    ///
    /// Returns true if `index` was removed, and false otherwise.
    pub fn remove(&mut self, index: usize) -> bool {
        let Some(heap_index) = self.position.get(index).copied().flatten() else {
            return false;
        };

        let last = self.heap.len() - 1;
        self.swap(heap_index, last);
        self.heap.pop();
        self.position[index] = None;

        if heap_index < self.heap.len() {
            self.sift_down(heap_index);
            self.sift_up(heap_index);
        }
        true
    }

    /// Places `index` on the heap.
    ///
    /// Returns true if `index` was inactive, and false otherwise.
    pub fn activate(&mut self, index: usize) -> bool {
        match self.position.get(index).copied() {
            None => false,

            Some(Some(heap_index)) => {
                self.sift_up(heap_index);
                false
            }

            Some(None) => {
                let heap_index = self.heap.len();
                self.heap.push(index);
                self.position[index] = Some(heap_index);
                self.sift_up(heap_index);
                true
            }
        }
    }

    /// Whether `index` is on the heap.
    pub fn is_active(&self, index: usize) -> bool {
        self.position.get(index).is_some_and(|position| position.is_some())
    }

    /// Restores the heap property around `index`, if active.
    pub fn heapify_if_active(&mut self, index: usize) {
        if let Some(Some(heap_index)) = self.position.get(index).copied() {
            self.sift_up(heap_index);
            self.sift_down(heap_index);
        }
    }

    /// The active index with maximum value.
    pub fn peek_max(&self) -> Option<usize> {
        self.heap.first().copied()
    }

    /// The maximum value of an active index.
    pub fn peek_max_value(&self) -> Option<&V> {
        self.peek_max().map(|index| &self.values[index])
    }

    /// Removes and returns the active index with maximum value.
    pub fn pop_max(&mut self) -> Option<usize> {
        let max = self.peek_max()?;
        self.remove(max);
        Some(max)
    }

    /// Restores the heap property of the whole heap, e.g. after [apply_to_all](IndexHeap::apply_to_all).
    pub fn heapify(&mut self) {
        for heap_index in (0..self.heap.len() / 2).rev() {
            self.sift_down(heap_index)
        }
    }

    /// The value paired with `index`.
    ///
    /// # Panics
    /// If `index` was never added.
    pub fn value_at(&self, index: usize) -> &V {
        &self.values[index]
    }

    /// Applies `f` to all values.
    ///
    /// As `f` may reorder values, a call to [heapify](IndexHeap::heapify) may be required after.
    pub fn apply_to_all(&mut self, f: impl Fn(&V) -> V) {
        for value in self.values.iter_mut() {
            *value = f(value)
        }
    }

    /// Sets the value of `index` to `value`, without restoring the heap property.
    pub fn revalue(&mut self, index: usize, value: V) {
        self.values[index] = value
    }

    /// A count of indicies paired with a value.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// True if no index is active, false otherwise.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    fn value_of(&self, heap_index: usize) -> &V {
        &self.values[self.heap[heap_index]]
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a]] = Some(a);
        self.position[self.heap[b]] = Some(b);
    }

    fn sift_down(&mut self, mut heap_index: usize) {
        loop {
            let left = (2 * heap_index) + 1;
            let right = left + 1;
            let mut largest = heap_index;

            if left < self.heap.len() && self.value_of(left) > self.value_of(largest) {
                largest = left;
            }
            if right < self.heap.len() && self.value_of(right) > self.value_of(largest) {
                largest = right;
            }

            if largest == heap_index {
                break;
            }
            self.swap(heap_index, largest);
            heap_index = largest;
        }
    }

    fn sift_up(&mut self, mut heap_index: usize) {
        while heap_index > 0 {
            let parent = (heap_index - 1) / 2;
            if self.value_of(parent) >= self.value_of(heap_index) {
                break;
            }
            self.swap(heap_index, parent);
            heap_index = parent;
        }
    }
}
