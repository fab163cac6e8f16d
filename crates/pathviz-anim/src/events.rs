//! Priority event queue keyed by scheduled time.
//!
//! Events are stored in a min-heap keyed by `(rank, insertion_order)`.
//! Lower ranks are popped first; ties are broken by insertion order
//! (FIFO).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// An entry in the event queue.
#[derive(Debug)]
struct Entry<E> {
    event: E,
    rank: u64,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
}

impl<E> PartialEq for Entry<E> {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.seq == other.seq
    }
}

impl<E> Eq for Entry<E> {}

impl<E> PartialOrd for Entry<E> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Entry<E> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Natural order: smaller rank first, then smaller seq. The heap
        // wraps entries in `Reverse`.
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A priority event queue.
///
/// Events with lower rank are dequeued first. Among events with the same
/// rank, those pushed earlier are dequeued first (FIFO).
#[derive(Debug)]
pub struct EventQueue<E> {
    heap: BinaryHeap<Reverse<Entry<E>>>,
    seq: u64,
}

impl<E> EventQueue<E> {
    /// Create an empty event queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Push an event at the given rank.
    pub fn push(&mut self, event: E, rank: u64) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { event, rank, seq }));
    }

    /// Pop the event with the lowest rank (ties broken FIFO).
    pub fn pop(&mut self) -> Option<E> {
        self.heap.pop().map(|Reverse(entry)| entry.event)
    }

    /// Rank of the next event to be popped.
    pub fn peek_rank(&self) -> Option<u64> {
        self.heap.peek().map(|Reverse(entry)| entry.rank)
    }

    /// Pop the next event only if its rank is at most `rank`.
    pub fn pop_due(&mut self, rank: u64) -> Option<E> {
        if self.peek_rank()? <= rank {
            self.pop()
        } else {
            None
        }
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of events in the queue.
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_push_pop() {
        let mut q = EventQueue::new();
        q.push("a", 3);
        q.push("b", 1);
        q.push("c", 2);

        assert_eq!(q.pop(), Some("b"));
        assert_eq!(q.pop(), Some("c"));
        assert_eq!(q.pop(), Some("a"));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn test_fifo_same_rank() {
        let mut q = EventQueue::new();
        q.push("first", 1);
        q.push("second", 1);
        q.push("third", 1);

        assert_eq!(q.pop(), Some("first"));
        assert_eq!(q.pop(), Some("second"));
        assert_eq!(q.pop(), Some("third"));
    }

    #[test]
    fn test_pop_due() {
        let mut q = EventQueue::new();
        q.push('a', 0);
        q.push('b', 40);
        assert_eq!(q.peek_rank(), Some(0));
        assert_eq!(q.pop_due(39), Some('a'));
        assert_eq!(q.pop_due(39), None);
        assert_eq!(q.len(), 1);
        assert_eq!(q.pop_due(40), Some('b'));
        assert!(q.is_empty());
        assert_eq!(q.pop_due(u64::MAX), None);
    }
}
