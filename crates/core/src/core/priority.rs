//! Priority queue for tree merge candidates.
//!
//! This module provides the min-priority structure used while building the
//! merge tree: the lightest node comes out first, and nodes of equal weight
//! come out in the order they were created.

use super::tree::NodeId;
use dary_heap::OctonaryHeap;
use std::cmp::Ordering;

/// A tree node waiting to be merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeCandidate {
    /// The node in the arena
    pub node: NodeId,
    /// The node's weight (sum of the counts below it)
    pub weight: u64,
    /// Creation sequence number, used to break weight ties
    pub sequence: u64,
}

impl MergeCandidate {
    /// Create a new merge candidate.
    pub fn new(node: NodeId, weight: u64, sequence: u64) -> Self {
        Self {
            node,
            weight,
            sequence,
        }
    }
}

// Lower weight = higher priority; the heap is a max-heap, so compare reversed.
impl Ord for MergeCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for MergeCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of merge candidates.
///
/// Uses an 8-ary heap for better cache locality than a binary heap.
/// Sequence numbers are assigned by the queue itself, so two queues fed the
/// same nodes in the same order always pop them in the same order.
pub struct NodePriorityQueue {
    heap: OctonaryHeap<MergeCandidate>,
    next_sequence: u64,
}

impl NodePriorityQueue {
    /// Create a new priority queue with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: OctonaryHeap::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    /// Create a new empty priority queue.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Push a node, stamping it with the next sequence number.
    pub fn push(&mut self, node: NodeId, weight: u64) -> MergeCandidate {
        let candidate = MergeCandidate::new(node, weight, self.next_sequence);
        self.next_sequence += 1;
        self.heap.push(candidate);
        candidate
    }

    /// Pop the lightest candidate (earliest created among equal weights).
    pub fn pop(&mut self) -> Option<MergeCandidate> {
        self.heap.pop()
    }

    /// Pop the two lightest candidates, in removal order.
    ///
    /// Returns None and leaves the queue untouched if fewer than two remain.
    pub fn pop_pair(&mut self) -> Option<(MergeCandidate, MergeCandidate)> {
        if self.heap.len() < 2 {
            return None;
        }
        let first = self.heap.pop()?;
        let second = self.heap.pop()?;
        Some((first, second))
    }

    /// Peek at the lightest candidate without removing it.
    pub fn peek(&self) -> Option<&MergeCandidate> {
        self.heap.peek()
    }

    /// Get the number of queued candidates.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Clear all entries from the queue.
    ///
    /// Sequence numbers keep counting up.
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl Default for NodePriorityQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tree::NodeArena;

    fn ids(n: usize) -> Vec<NodeId> {
        let mut arena = NodeArena::with_leaf_capacity(n);
        (0..n)
            .map(|i| arena.push_leaf(format!("s{i}").into(), 1))
            .collect()
    }

    #[test]
    fn test_push_pop() {
        let nodes = ids(3);
        let mut queue = NodePriorityQueue::new();

        queue.push(nodes[0], 10);
        queue.push(nodes[1], 20);
        queue.push(nodes[2], 15);

        // Lowest weight first
        let first = queue.pop().unwrap();
        assert_eq!(first.node, nodes[0]);
        assert_eq!(first.weight, 10);

        let second = queue.pop().unwrap();
        assert_eq!(second.node, nodes[2]);
        assert_eq!(second.weight, 15);

        let third = queue.pop().unwrap();
        assert_eq!(third.node, nodes[1]);
        assert_eq!(third.weight, 20);

        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_ties_pop_in_insertion_order() {
        let nodes = ids(5);
        let mut queue = NodePriorityQueue::new();

        // Insert in reverse so the arena order and insertion order disagree
        for &node in nodes.iter().rev() {
            queue.push(node, 7);
        }

        let popped: Vec<_> = std::iter::from_fn(|| queue.pop()).map(|c| c.node).collect();
        let expected: Vec<_> = nodes.iter().rev().copied().collect();
        assert_eq!(popped, expected);
    }

    #[test]
    fn test_sequence_numbers_increase() {
        let nodes = ids(2);
        let mut queue = NodePriorityQueue::new();

        let a = queue.push(nodes[0], 1);
        let b = queue.push(nodes[1], 1);
        assert_eq!(a.sequence, 0);
        assert_eq!(b.sequence, 1);

        queue.clear();
        let c = queue.push(nodes[0], 1);
        assert_eq!(c.sequence, 2);
    }

    #[test]
    fn test_pop_pair() {
        let nodes = ids(3);
        let mut queue = NodePriorityQueue::with_capacity(3);

        queue.push(nodes[0], 4);
        assert!(queue.pop_pair().is_none());
        assert_eq!(queue.len(), 1);

        queue.push(nodes[1], 1);
        queue.push(nodes[2], 2);

        let (first, second) = queue.pop_pair().unwrap();
        assert_eq!(first.node, nodes[1]);
        assert_eq!(second.node, nodes[2]);
        assert_eq!(queue.peek().map(|c| c.node), Some(nodes[0]));
    }

    #[test]
    fn test_clear() {
        let nodes = ids(2);
        let mut queue = NodePriorityQueue::new();

        queue.push(nodes[0], 10);
        queue.push(nodes[1], 20);

        assert!(!queue.is_empty());
        assert_eq!(queue.len(), 2);

        queue.clear();

        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }
}
