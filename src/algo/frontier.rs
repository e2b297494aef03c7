/*!
# Frontiers

A [`Frontier`] holds the pending work of a traversal. Its removal policy is the *only* difference
between the searches of this crate:

- [`Vec`] is a stack: [`Frontier::take_next`] returns the most recently inserted item (**DFS**),
- [`VecDeque`] is a queue: [`Frontier::take_next`] returns the earliest inserted item (**BFS**),
- [`HeapFrontier`] returns the minimum item under an injected [`Comparator`] (**best-first**, e.g. Dijkstra or A*).

```rust
use sgraphs::algo::{Frontier, HeapFrontier, NaturalOrder};

let mut heap = HeapFrontier::new(NaturalOrder);
heap.put(3);
heap.put(1);
heap.put(2);

assert_eq!(heap.take_next(), Some(1));
assert_eq!(heap.count(), 2);
```
*/

use std::{cmp::Ordering, collections::VecDeque};

/// Container of pending items whose removal policy determines the search order.
pub trait Frontier<T> {
    /// Inserts an item
    fn put(&mut self, item: T);

    /// Removes and returns the item chosen by the policy or `None` if the frontier is empty
    fn take_next(&mut self) -> Option<T>;

    /// Returns a reference to the item [`Frontier::take_next`] would return next
    fn peek(&self) -> Option<&T>;

    /// Returns the number of pending items
    fn count(&self) -> usize;

    /// Discards all pending items
    fn clear(&mut self);

    /// Returns *true* if there are no pending items
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl<T> Frontier<T> for Vec<T> {
    fn put(&mut self, item: T) {
        self.push(item);
    }

    fn take_next(&mut self) -> Option<T> {
        self.pop()
    }

    fn peek(&self) -> Option<&T> {
        self.last()
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}

impl<T> Frontier<T> for VecDeque<T> {
    fn put(&mut self, item: T) {
        self.push_back(item);
    }

    fn take_next(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn peek(&self) -> Option<&T> {
        self.front()
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn clear(&mut self) {
        VecDeque::clear(self);
    }
}

/// Total order on frontier items used by [`HeapFrontier`].
/// Closures `Fn(&T, &T) -> Ordering` are comparators as well.
pub trait Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders items by their [`Ord`] implementation
#[derive(Debug, Copy, Clone, Default)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Binary min-heap over an injected [`Comparator`].
///
/// Ties are broken arbitrarily. The comparator may carry state (such as a cost table) that is
/// accessible via [`HeapFrontier::order`] / [`HeapFrontier::order_mut`]; changing it must not
/// change the relative order of items that are already stored.
#[derive(Debug, Clone)]
pub struct HeapFrontier<T, C> {
    data: Vec<T>,
    order: C,
}

impl<T, C: Default> Default for HeapFrontier<T, C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<T, C> HeapFrontier<T, C> {
    /// Creates an empty heap ordered by `order`
    pub fn new(order: C) -> Self {
        Self {
            data: Vec::new(),
            order,
        }
    }

    /// Returns the comparator
    pub fn order(&self) -> &C {
        &self.order
    }

    /// Returns the comparator mutably
    pub fn order_mut(&mut self) -> &mut C {
        &mut self.order
    }

    /// Consumes the heap and returns the comparator
    pub fn into_order(self) -> C {
        self.order
    }
}

impl<T, C: Comparator<T>> HeapFrontier<T, C> {
    fn less(&self, i: usize, j: usize) -> bool {
        self.order.compare(&self.data[i], &self.data[j]) == Ordering::Less
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.less(pos, parent) {
                break;
            }
            self.data.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let child = if right < len && self.less(right, left) {
                right
            } else {
                left
            };

            if !self.less(child, pos) {
                break;
            }
            self.data.swap(pos, child);
            pos = child;
        }
    }
}

impl<T, C: Comparator<T>> Frontier<T> for HeapFrontier<T, C> {
    fn put(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    fn take_next(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let top = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(top)
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn count(&self) -> usize {
        self.data.len()
    }

    fn clear(&mut self) {
        self.data.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn drain<T, F: Frontier<T>>(frontier: &mut F) -> Vec<T> {
        std::iter::from_fn(|| frontier.take_next()).collect_vec()
    }

    #[test]
    fn stack_and_queue() {
        let mut stack = Vec::new();
        let mut queue = VecDeque::new();
        for i in 0..5 {
            stack.put(i);
            queue.put(i);
        }

        assert_eq!(stack.peek(), Some(&4));
        assert_eq!(queue.peek(), Some(&0));
        assert_eq!(drain(&mut stack), vec![4, 3, 2, 1, 0]);
        assert_eq!(drain(&mut queue), vec![0, 1, 2, 3, 4]);
        assert!(Frontier::is_empty(&stack));
        assert_eq!(stack.take_next(), None);
    }

    #[test]
    fn heap_sorts_random_input() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for len in [0, 1, 2, 10, 100] {
            let items = (0..len).map(|_| rng.random_range(0..50u32)).collect_vec();

            let mut heap = HeapFrontier::new(NaturalOrder);
            for &x in &items {
                heap.put(x);
            }
            assert_eq!(heap.count(), len);
            assert_eq!(heap.peek(), items.iter().min());

            assert_eq!(drain(&mut heap), items.into_iter().sorted().collect_vec());
        }
    }

    #[test]
    fn heap_with_closure() {
        let mut heap = HeapFrontier::new(|a: &(u32, f64), b: &(u32, f64)| a.1.total_cmp(&b.1));
        heap.put((0, 2.5));
        heap.put((1, 0.5));
        heap.put((2, 1.5));

        assert_eq!(heap.take_next().map(|x| x.0), Some(1));

        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.take_next(), None);
    }
}
