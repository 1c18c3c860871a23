use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority queue over `BinaryHeap` used by the shortest path search.
///
/// Entries with equal priority come out ordered by the item itself, so when
/// items are node insertion positions the queue breaks ties by insertion order.
/// Stale entries are not removed on decrease-key; callers skip them on pop.
#[derive(Debug)]
pub struct MinPriorityQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> MinPriorityQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinPriorityQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates an empty queue able to hold `capacity` entries without reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        MinPriorityQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Queues `item` with the given priority
    pub fn push(&mut self, item: V, priority: P) {
        self.heap.push(Reverse((priority, item)));
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, item))| (item, priority))
    }
}

impl<V, P> Default for MinPriorityQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
