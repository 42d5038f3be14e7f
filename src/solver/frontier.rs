use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};
use std::hash::Hash;

use fnv::FnvHashMap;

/// Pending nodes of a search.
///
/// `pop` returns `None` once the frontier is exhausted.
pub trait Frontier<T> {
    fn pop(&mut self) -> Option<T>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug)]
pub struct FifoFrontier<T> {
    items: VecDeque<T>,
}

impl<T> FifoFrontier<T> {
    pub fn new() -> Self {
        FifoFrontier {
            items: VecDeque::new(),
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }
}

impl<T> Default for FifoFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for FifoFrontier<T> {
    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

#[derive(Debug)]
struct Entry<T, K> {
    priority: K,
    seq: u64,
    /// Pushed through `update` and therefore replaceable.
    tracked: bool,
    item: T,
}

// only priority and seq take part in the ordering, seq is unique
impl<T, K: Ord> PartialEq for Entry<T, K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, K: Ord> Eq for Entry<T, K> {}

impl<T, K: Ord> PartialOrd for Entry<T, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, K: Ord> Ord for Entry<T, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.priority, self.seq).cmp(&(&other.priority, other.seq))
    }
}

/// Min-priority queue, equal priorities come out in insertion order.
///
/// Items pushed through `update` are tracked by an id (the search state)
/// so that a cheaper entry can replace a pending one. Replaced entries stay
/// in the heap and are skipped when they surface.
#[derive(Debug)]
pub struct PriorityFrontier<T, K, I>
where
    K: Ord,
    I: Hash + Eq,
{
    heap: BinaryHeap<Reverse<Entry<T, K>>>,
    next_seq: u64,
    /// Live (priority, seq) of every pending id.
    pending: FnvHashMap<I, (K, u64)>,
    /// Reverse of `pending`, replaced seqs are missing here.
    live: FnvHashMap<u64, I>,
    stale: usize,
}

impl<T, K, I> PriorityFrontier<T, K, I>
where
    K: Ord + Clone,
    I: Hash + Eq + Clone,
{
    pub fn new() -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            next_seq: 0,
            pending: FnvHashMap::default(),
            live: FnvHashMap::default(),
            stale: 0,
        }
    }

    fn insert(&mut self, item: T, priority: K, tracked: bool) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry {
            priority,
            seq,
            tracked,
            item,
        }));
        seq
    }

    pub fn push(&mut self, item: T, priority: K) {
        self.insert(item, priority, false);
    }

    /// Pushes `item` unless an entry for `id` with lower or equal priority
    /// is already pending. A pending entry with higher priority is replaced.
    ///
    /// Returns whether the item was queued.
    pub fn update(&mut self, id: I, item: T, priority: K) -> bool {
        if let Some((old_priority, old_seq)) = self.pending.get(&id) {
            if *old_priority <= priority {
                return false;
            }
            let old_seq = *old_seq;
            self.live.remove(&old_seq);
            self.stale += 1;
        }
        let seq = self.insert(item, priority.clone(), true);
        self.pending.insert(id.clone(), (priority, seq));
        self.live.insert(seq, id);
        true
    }

    /// Priority of the pending entry for `id`, if any.
    pub fn priority_of(&self, id: &I) -> Option<&K> {
        self.pending.get(id).map(|(priority, _)| priority)
    }
}

impl<T, K, I> Default for PriorityFrontier<T, K, I>
where
    K: Ord + Clone,
    I: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K, I> Frontier<T> for PriorityFrontier<T, K, I>
where
    K: Ord + Clone,
    I: Hash + Eq + Clone,
{
    fn pop(&mut self) -> Option<T> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if !entry.tracked {
                return Some(entry.item);
            }
            match self.live.remove(&entry.seq) {
                Some(id) => {
                    self.pending.remove(&id);
                    return Some(entry.item);
                }
                None => self.stale -= 1,
            }
        }
        None
    }

    fn len(&self) -> usize {
        self.heap.len() - self.stale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order() {
        let mut frontier = FifoFrontier::new();
        assert!(frontier.is_empty());
        frontier.push('a');
        frontier.push('b');
        frontier.push('c');
        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.pop(), Some('a'));
        frontier.push('d');
        assert_eq!(frontier.pop(), Some('b'));
        assert_eq!(frontier.pop(), Some('c'));
        assert_eq!(frontier.pop(), Some('d'));
        assert_eq!(frontier.pop(), None);
        assert!(frontier.is_empty());
    }

    #[test]
    fn min_priority_first() {
        let mut frontier: PriorityFrontier<&str, u32, ()> = PriorityFrontier::new();
        frontier.push("five", 5);
        frontier.push("one", 1);
        frontier.push("three", 3);
        assert_eq!(frontier.pop(), Some("one"));
        assert_eq!(frontier.pop(), Some("three"));
        assert_eq!(frontier.pop(), Some("five"));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn ties_in_insertion_order() {
        let mut frontier: PriorityFrontier<u32, u32, ()> = PriorityFrontier::new();
        for i in 0..20 {
            frontier.push(i, i % 2);
        }
        let popped: Vec<_> = std::iter::from_fn(|| frontier.pop()).collect();
        let mut expected: Vec<_> = (0..20).filter(|i| i % 2 == 0).collect();
        expected.extend((0..20).filter(|i| i % 2 == 1));
        assert_eq!(popped, expected);
    }

    #[test]
    fn update_lowers_priority() {
        let mut frontier = PriorityFrontier::new();
        assert!(frontier.update('x', "x via long path", 10));
        assert!(frontier.update('y', "y", 5));
        assert_eq!(frontier.len(), 2);

        // not better - ignored
        assert!(!frontier.update('x', "x via equal path", 10));
        assert!(!frontier.update('x', "x via longer path", 12));
        assert_eq!(frontier.priority_of(&'x'), Some(&10));

        assert!(frontier.update('x', "x via short path", 3));
        assert_eq!(frontier.priority_of(&'x'), Some(&3));
        assert_eq!(frontier.len(), 2);

        assert_eq!(frontier.pop(), Some("x via short path"));
        assert_eq!(frontier.priority_of(&'x'), None);
        assert_eq!(frontier.pop(), Some("y"));
        assert_eq!(frontier.len(), 0);
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn update_after_pop_queues_again() {
        let mut frontier = PriorityFrontier::new();
        frontier.update(1, "first", 4);
        assert_eq!(frontier.pop(), Some("first"));
        assert!(frontier.update(1, "second", 7));
        assert_eq!(frontier.pop(), Some("second"));
        assert!(frontier.is_empty());
    }
}
