//! A binary-heap priority queue ordered by an injected comparison.
//!
//! Unlike [`std::collections::BinaryHeap`], the order is not tied to the
//! element's [`Ord`] implementation: the queue is built around a predicate
//! `is_ordered(a, b)` that returns `true` when `a` may sit above `b`. The
//! same container therefore serves as a min-heap of plain numbers and as a
//! max-heap of domain objects.
//!
//! Elements that implement [`PartialEq`] additionally get [`contains`],
//! [`update`] and [`remove`]. These locate the element with a linear scan;
//! the queue does not index elements by identity.
//!
//! [`contains`]: PriorityQueue::contains
//! [`update`]: PriorityQueue::update
//! [`remove`]: PriorityQueue::remove

use std::fmt;

/// Comparison function type used by the convenience constructors.
pub type OrderFn<T> = fn(&T, &T) -> bool;

/// A priority queue stored as an implicit binary heap.
///
/// The element at index 0 is the extreme one under the ordering. For every
/// index `i`, the children at `2i + 1` and `2i + 2` never precede it.
pub struct PriorityQueue<T, F = OrderFn<T>> {
    heap: Vec<T>,
    is_ordered: F,
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Create an empty queue ordered by `compare`.
    pub fn new(compare: F) -> Self {
        Self {
            heap: Vec::new(),
            is_ordered: compare,
        }
    }

    /// Create a queue ordered by `compare` and push every item of `values`.
    pub fn with_values<I: IntoIterator<Item = T>>(compare: F, values: I) -> Self {
        let mut queue = Self::new(compare);
        queue.extend(values);
        queue
    }

    /// Number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The extreme element, without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Add an item while maintaining heap order.
    pub fn push(&mut self, item: T) {
        self.heap.push(item);
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the extreme element.
    pub fn pop(&mut self) -> Option<T> {
        match self.heap.len() {
            0 => None,
            1 => self.heap.pop(),
            n => {
                self.heap.swap(0, n - 1);
                let item = self.heap.pop();
                self.sift_down(0);
                item
            }
        }
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Pop every element in queue order, handing each one to `action`.
    pub fn drain_ordered(&mut self, mut action: impl FnMut(T)) {
        while let Some(item) = self.pop() {
            action(item);
        }
    }

    /// Draining iterator that yields elements in queue order.
    ///
    /// Elements not consumed stay in the queue.
    pub fn drain(&mut self) -> Drain<'_, T, F> {
        Drain { queue: self }
    }

    #[inline]
    fn ordered(&self, a: usize, b: usize) -> bool {
        (self.is_ordered)(&self.heap[a], &self.heap[b])
    }

    /// Move the element at `index` toward the root. Returns whether any swap
    /// happened.
    fn sift_up(&mut self, mut index: usize) -> bool {
        let mut swapped = false;
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.ordered(parent, index) {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
            swapped = true;
        }
        swapped
    }

    /// Move the element at `index` toward the leaves, always swapping with the
    /// more extreme child. Returns whether any swap happened.
    fn sift_down(&mut self, mut index: usize) -> bool {
        let len = self.heap.len();
        let mut swapped = false;
        loop {
            let mut best = index;
            let left = index * 2 + 1;
            if left < len && self.ordered(left, best) {
                best = left;
            }
            let right = index * 2 + 2;
            if right < len && self.ordered(right, best) {
                best = right;
            }
            if best == index {
                return swapped;
            }
            self.heap.swap(index, best);
            index = best;
            swapped = true;
        }
    }

    #[cfg(test)]
    fn is_heap(&self) -> bool {
        (1..self.heap.len()).all(|i| self.ordered((i - 1) / 2, i))
    }
}

impl<T, F> PriorityQueue<T, F>
where
    T: PartialEq,
    F: Fn(&T, &T) -> bool,
{
    /// Whether the queue holds an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.heap.contains(value)
    }

    /// Replace the first entry equal to `element` and restore heap order.
    ///
    /// The element's ordering key may have moved in either direction. Returns
    /// the replaced entry, or `None` if nothing matched.
    pub fn update(&mut self, element: T) -> Option<T> {
        let index = self.heap.iter().position(|item| *item == element)?;
        let old = std::mem::replace(&mut self.heap[index], element);
        if !self.sift_down(index) {
            self.sift_up(index);
        }
        Some(old)
    }

    /// Remove one entry equal to `element`. Returns it, or `None` if absent.
    pub fn remove(&mut self, element: &T) -> Option<T> {
        let index = self.heap.iter().position(|item| item == element)?;
        let item = self.heap.swap_remove(index);
        if index < self.heap.len() && !self.sift_down(index) {
            self.sift_up(index);
        }
        Some(item)
    }
}

impl<T: PartialOrd> PriorityQueue<T> {
    /// Ordering that places the largest value first (`a >= b`).
    pub fn max_first(a: &T, b: &T) -> bool {
        a >= b
    }

    /// Ordering that places the smallest value first (`a <= b`).
    pub fn min_first(a: &T, b: &T) -> bool {
        a <= b
    }

    /// Queue that pops the largest value first.
    pub fn max_ordering<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::with_values(Self::max_first, values)
    }

    /// Queue that pops the smallest value first.
    pub fn min_ordering<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::with_values(Self::min_first, values)
    }
}

impl<T: PartialOrd> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new(Self::min_first)
    }
}

impl<T: PartialOrd> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::min_ordering(iter)
    }
}

impl<T, F> Extend<T> for PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for PriorityQueue<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &self.heap)
            .finish()
    }
}

/// Iterator returned by [`PriorityQueue::drain`].
pub struct Drain<'a, T, F> {
    queue: &'a mut PriorityQueue<T, F>,
}

impl<T, F> Iterator for Drain<'_, T, F>
where
    F: Fn(&T, &T) -> bool,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.queue.len();
        (n, Some(n))
    }
}
