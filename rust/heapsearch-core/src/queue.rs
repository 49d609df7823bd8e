use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::trace;

use crate::errors::QueueError;

/// Slot count a queue starts with when no minimum is requested (a two-slot array).
pub const DEFAULT_MIN_CAPACITY: usize = 1;

/// Most slots reserved up front; a larger minimum capacity is reserved as items arrive.
pub const MAX_PREALLOCATED_SLOTS: usize = 4096;

const ROOT: usize = 1;

/// Ordering capability a [`PriorityQueue`] is built with.
///
/// The queue always hands out the item its comparator ranks highest
/// (see [`QueueOrder`] for the lowest-first mode). Any
/// `Fn(&T, &T) -> Ordering` closure is a comparator.
pub trait Compare<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders items by their `Ord` implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Flips the result of the wrapped comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Which end of the comparator's ordering is dequeued first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QueueOrder {
    /// The comparator-maximum sits at the root.
    #[default]
    HighestFirst,
    /// The comparator-minimum sits at the root. Search fringes use this mode.
    LowestFirst,
}

/// Largest slot count a `Vec<T>` can back, excluding the unused sentinel slot.
fn max_slots<T>() -> usize {
    (isize::MAX as usize / mem::size_of::<T>().max(1)).saturating_sub(1)
}

#[inline]
fn parent(child: usize) -> usize {
    child / 2
}

#[inline]
fn left_child(parent: usize) -> usize {
    parent * 2
}

#[inline]
fn right_child(parent: usize) -> usize {
    parent * 2 + 1
}

/// An array-backed binary heap with a pluggable comparator.
///
/// Slots are addressed 1-based (`parent(i) = i / 2`, children `2i` and
/// `2i + 1`); slot `i` is stored at `items[i - 1]`. For every slot `i` in
/// `2..=len` the parent never compares `Less` than the child under the
/// effective ordering.
///
/// Capacity is tracked separately from the backing vector: it starts at the
/// configured minimum, doubles the logical array length whenever an enqueue
/// would not fit, and never shrinks. Not safe for concurrent mutation.
#[derive(Clone)]
pub struct PriorityQueue<T, C = Natural> {
    items: Vec<T>,
    compare: C,
    order: QueueOrder,
    capacity: usize,
    min_capacity: usize,
    max_capacity: usize,
}

impl<T: Ord> Default for PriorityQueue<T, Natural> {
    fn default() -> Self {
        Self::new(Natural)
    }
}

impl<T, C: Compare<T>> PriorityQueue<T, C> {
    /// Create a highest-first queue with the default minimum capacity.
    pub fn new(compare: C) -> Self {
        Self::with_order(compare, QueueOrder::HighestFirst)
    }

    /// Create a queue dequeuing from the given end of the comparator's ordering.
    pub fn with_order(compare: C, order: QueueOrder) -> Self {
        Self {
            items: Vec::with_capacity(DEFAULT_MIN_CAPACITY),
            compare,
            order,
            capacity: DEFAULT_MIN_CAPACITY,
            min_capacity: DEFAULT_MIN_CAPACITY,
            max_capacity: max_slots::<T>(),
        }
    }

    /// Create a highest-first queue that can hold `min_capacity` items before growing.
    pub fn with_capacity(compare: C, min_capacity: usize) -> Result<Self, QueueError> {
        Self::with_limits(compare, QueueOrder::HighestFirst, min_capacity, max_slots::<T>())
    }

    /// Create a queue with explicit growth bounds.
    ///
    /// Growth that would take the capacity past `max_capacity` fails with
    /// [`QueueError::CapacityExceeded`]; so does a `min_capacity` above it.
    pub fn with_limits(
        compare: C,
        order: QueueOrder,
        min_capacity: usize,
        max_capacity: usize,
    ) -> Result<Self, QueueError> {
        let max_capacity = max_capacity.min(max_slots::<T>());
        if min_capacity > max_capacity {
            return Err(QueueError::CapacityExceeded { requested: min_capacity, max: max_capacity });
        }
        Ok(Self {
            items: Vec::with_capacity(min_capacity.min(MAX_PREALLOCATED_SLOTS)),
            compare,
            order,
            capacity: min_capacity,
            min_capacity,
            max_capacity,
        })
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items the queue holds before its next growth.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn min_capacity(&self) -> usize {
        self.min_capacity
    }

    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    pub fn order(&self) -> QueueOrder {
        self.order
    }

    pub fn comparator(&self) -> &C {
        &self.compare
    }

    /// Insert an item, growing the backing array when it is full. O(log n) amortized.
    pub fn enqueue(&mut self, item: T) -> Result<(), QueueError> {
        if self.items.len() + 1 > self.capacity {
            self.grow()?;
        }
        self.items.push(item);
        self.sift_up(self.items.len());
        Ok(())
    }

    /// Remove and return the highest-priority item.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        let last = self.items.len();
        if last == 0 {
            return Err(QueueError::EmptyCollection);
        }
        self.swap(ROOT, last);
        let removed = self.items.pop().ok_or(QueueError::EmptyCollection)?;
        self.sift_down(ROOT);
        Ok(removed)
    }

    /// The highest-priority item, left in place.
    pub fn peek(&self) -> Result<&T, QueueError> {
        self.items.first().ok_or(QueueError::EmptyCollection)
    }

    /// Restore the heap invariant around the first item comparing `Equal` to
    /// `item`, after its priority changed outside the queue. O(n).
    pub fn requeue(&mut self, item: &T) -> Result<(), QueueError> {
        let index = (ROOT..=self.items.len())
            .find(|&i| self.compare.compare(item, &self.items[i - 1]) == Ordering::Equal)
            .ok_or(QueueError::ItemNotFound)?;
        self.repair(index);
        Ok(())
    }

    /// Locate the first item matching `find`, apply `update` to it in place,
    /// then restore the heap invariant around it. O(n).
    pub fn requeue_by<P, U>(&mut self, mut find: P, update: U) -> Result<(), QueueError>
    where
        P: FnMut(&T) -> bool,
        U: FnOnce(&mut T),
    {
        let pos = self.items.iter().position(|it| find(it)).ok_or(QueueError::ItemNotFound)?;
        update(&mut self.items[pos]);
        self.repair(pos + 1);
        Ok(())
    }

    /// Drop every item; capacity is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Items in slot (heap) order, not priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Whether every parent dominates (or ties) its children.
    pub fn is_heap(&self) -> bool {
        (ROOT + 1..=self.items.len()).all(|i| self.cmp_slots(parent(i), i) != Ordering::Less)
    }

    fn grow(&mut self) -> Result<(), QueueError> {
        let requested = (self.capacity + 1)
            .checked_mul(2)
            .map(|len| len - 1)
            .unwrap_or(usize::MAX);
        if requested > self.max_capacity {
            return Err(QueueError::CapacityExceeded { requested, max: self.max_capacity });
        }
        self.items
            .try_reserve_exact(requested - self.items.len())
            .map_err(|_| QueueError::CapacityExceeded { requested, max: self.max_capacity })?;
        trace!(old_capacity = self.capacity, new_capacity = requested, "priority_queue_grow");
        self.capacity = requested;
        Ok(())
    }

    fn repair(&mut self, index: usize) {
        self.sift_up(index);
        self.sift_down(index);
    }

    #[inline]
    fn cmp_slots(&self, a: usize, b: usize) -> Ordering {
        let ord = self.compare.compare(&self.items[a - 1], &self.items[b - 1]);
        match self.order {
            QueueOrder::HighestFirst => ord,
            QueueOrder::LowestFirst => ord.reverse(),
        }
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a - 1, b - 1);
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > ROOT {
            let up = parent(index);
            if self.cmp_slots(index, up) != Ordering::Greater {
                break;
            }
            self.swap(index, up);
            index = up;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let count = self.items.len();
        loop {
            let left = left_child(index);
            if left > count {
                break;
            }
            let right = right_child(index);
            let mut down = left;
            if right <= count && self.cmp_slots(right, left) == Ordering::Greater {
                down = right;
            }
            if self.cmp_slots(down, index) == Ordering::Less {
                break;
            }
            self.swap(index, down);
            index = down;
        }
    }
}

impl<'a, T, C> IntoIterator for &'a PriorityQueue<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("order", &self.order)
            .field("capacity", &self.capacity)
            .field("items", &self.items)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn drain<T, C: Compare<T>>(q: &mut PriorityQueue<T, C>) -> Vec<T> {
        let mut out = Vec::with_capacity(q.len());
        while let Ok(item) = q.dequeue() {
            out.push(item);
        }
        out
    }

    #[test]
    fn test_basic_operations() {
        let mut q = PriorityQueue::default();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);

        q.enqueue(5).unwrap();
        assert!(!q.is_empty());
        assert_eq!(q.len(), 1);
        assert_eq!(q.peek(), Ok(&5));

        assert_eq!(q.dequeue(), Ok(5));
        assert!(q.is_empty());
    }

    #[test]
    fn test_empty_queue_errors() {
        let mut q: PriorityQueue<i32> = PriorityQueue::default();
        assert_eq!(q.dequeue(), Err(QueueError::EmptyCollection));
        assert_eq!(q.peek(), Err(QueueError::EmptyCollection));
    }

    #[test]
    fn test_dequeues_comparator_maximum_first() {
        let mut q = PriorityQueue::default();
        for v in [4, 9, 1, 7, 3, 8] {
            q.enqueue(v).unwrap();
        }
        assert!(q.is_heap());
        assert_eq!(drain(&mut q), vec![9, 8, 7, 4, 3, 1]);
    }

    #[test]
    fn test_lowest_first_mode() {
        let mut q = PriorityQueue::with_order(Natural, QueueOrder::LowestFirst);
        for v in [4, 9, 1, 7, 3, 8] {
            q.enqueue(v).unwrap();
        }
        assert_eq!(q.peek(), Ok(&1));
        assert_eq!(drain(&mut q), vec![1, 3, 4, 7, 8, 9]);
    }

    #[test]
    fn test_closure_and_reversed_comparators() {
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        let mut q = PriorityQueue::new(by_len);
        for s in ["ccc", "a", "dddd", "bb"] {
            q.enqueue(s).unwrap();
        }
        assert_eq!(drain(&mut q), vec!["dddd", "ccc", "bb", "a"]);

        let mut r = PriorityQueue::new(Reversed(Natural));
        for v in [2, 5, 1] {
            r.enqueue(v).unwrap();
        }
        assert_eq!(drain(&mut r), vec![1, 2, 5]);
    }

    #[test]
    fn test_growth_doubles_array_length() {
        let mut q = PriorityQueue::default();
        assert_eq!(q.capacity(), 1);
        q.enqueue(1).unwrap();
        assert_eq!(q.capacity(), 1);
        q.enqueue(2).unwrap();
        assert_eq!(q.capacity(), 3);
        q.enqueue(3).unwrap();
        q.enqueue(4).unwrap();
        assert_eq!(q.capacity(), 7);
        for v in 5..=20 {
            q.enqueue(v).unwrap();
        }
        assert_eq!(q.capacity(), 31);
        assert_eq!(q.len(), 20);
        assert!(q.is_heap());
    }

    #[test]
    fn test_capacity_exceeded_leaves_queue_intact() {
        let mut q = PriorityQueue::with_limits(Natural, QueueOrder::HighestFirst, 1, 4).unwrap();
        q.enqueue(1).unwrap();
        q.enqueue(2).unwrap();
        q.enqueue(3).unwrap();
        assert_eq!(q.capacity(), 3);
        assert_eq!(q.enqueue(4), Err(QueueError::CapacityExceeded { requested: 7, max: 4 }));
        assert_eq!(q.len(), 3);
        assert_eq!(q.capacity(), 3);
        assert_eq!(drain(&mut q), vec![3, 2, 1]);
    }

    #[test]
    fn test_min_capacity_above_max_is_rejected() {
        let res = PriorityQueue::<i32>::with_limits(Natural, QueueOrder::HighestFirst, 10, 4);
        assert!(matches!(res, Err(QueueError::CapacityExceeded { requested: 10, max: 4 })));
    }

    #[test]
    fn test_with_capacity_delays_growth() {
        let mut q = PriorityQueue::with_capacity(Natural, 8).unwrap();
        for v in 0..8 {
            q.enqueue(v).unwrap();
        }
        assert_eq!(q.capacity(), 8);
        q.enqueue(8).unwrap();
        assert_eq!(q.capacity(), 17);
        assert_eq!(q.min_capacity(), 8);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut q = PriorityQueue::default();
        for v in 0..10 {
            q.enqueue(v).unwrap();
        }
        let cap = q.capacity();
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.capacity(), cap);
        assert_eq!(q.dequeue(), Err(QueueError::EmptyCollection));
    }

    #[test]
    fn test_iteration_is_slot_order_and_restartable() {
        let mut q = PriorityQueue::default();
        for v in [1, 2, 3] {
            q.enqueue(v).unwrap();
        }
        // 1 -> [1]; 2 sifts above 1 -> [2, 1]; 3 sifts above 2 -> [3, 1, 2]
        assert_eq!(q.to_vec(), vec![3, 1, 2]);
        let first: Vec<i32> = q.iter().copied().collect();
        let second: Vec<i32> = (&q).into_iter().copied().collect();
        assert_eq!(first, second);
    }

    #[derive(Clone, Debug)]
    struct Job {
        id: u32,
        priority: i32,
    }

    #[test]
    fn test_requeue_after_priority_change() {
        let by_priority = |a: &Job, b: &Job| a.priority.cmp(&b.priority);
        let mut q = PriorityQueue::new(by_priority);
        for (id, priority) in [(1, 10), (2, 20), (3, 30)] {
            q.enqueue(Job { id, priority }).unwrap();
        }
        q.requeue_by(|j| j.id == 1, |j| j.priority = 99).unwrap();
        assert!(q.is_heap());
        assert_eq!(q.peek().unwrap().id, 1);

        // comparator-equal lookup: any item with priority 20
        q.requeue(&Job { id: 0, priority: 20 }).unwrap();
        assert!(q.is_heap());
    }

    #[derive(Clone, Debug)]
    struct Task {
        id: u32,
        priority: Cell<i32>,
    }

    fn task(id: u32, priority: i32) -> Task {
        Task { id, priority: Cell::new(priority) }
    }

    #[test]
    fn test_requeue_repairs_externally_changed_priority() {
        let by_priority = |a: &Task, b: &Task| a.priority.get().cmp(&b.priority.get());
        let mut q = PriorityQueue::new(by_priority);
        for (id, priority) in [(1, 10), (2, 20), (3, 30), (4, 40)] {
            q.enqueue(task(id, priority)).unwrap();
        }
        assert_eq!(q.peek().unwrap().id, 4);

        // raise a buried item above the root
        q.iter().find(|t| t.id == 1).unwrap().priority.set(99);
        assert!(!q.is_heap());
        q.requeue(&task(0, 99)).unwrap();
        assert!(q.is_heap());
        assert_eq!(q.peek().unwrap().id, 1);

        // sink the root below everything
        q.iter().find(|t| t.id == 1).unwrap().priority.set(-5);
        assert!(!q.is_heap());
        q.requeue(&task(0, -5)).unwrap();
        assert!(q.is_heap());
        assert_eq!(q.peek().unwrap().id, 4);

        let order: Vec<u32> = drain(&mut q).into_iter().map(|t| t.id).collect();
        assert_eq!(order, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_large_min_capacity_is_not_reserved_up_front() {
        let mut q = PriorityQueue::<u64>::with_limits(Natural, QueueOrder::LowestFirst, 1 << 40, usize::MAX).unwrap();
        assert_eq!(q.capacity(), 1 << 40);
        q.enqueue(7).unwrap();
        assert_eq!(q.dequeue(), Ok(7));

        let too_big = PriorityQueue::<u64>::with_limits(Natural, QueueOrder::LowestFirst, usize::MAX, usize::MAX);
        assert!(matches!(too_big, Err(QueueError::CapacityExceeded { requested: usize::MAX, .. })));
    }

    #[test]
    fn test_accessors_report_configuration() {
        let q: PriorityQueue<i32, _> =
            PriorityQueue::with_limits(Reversed(Natural), QueueOrder::LowestFirst, 4, 64).unwrap();
        assert_eq!(*q.comparator(), Reversed(Natural));
        assert_eq!(q.order(), QueueOrder::LowestFirst);
        assert_eq!(q.min_capacity(), 4);
        assert_eq!(q.max_capacity(), 64);
    }

    #[test]
    fn test_requeue_missing_item() {
        let mut q = PriorityQueue::default();
        q.enqueue(1).unwrap();
        assert_eq!(q.requeue(&42), Err(QueueError::ItemNotFound));
        assert_eq!(q.requeue_by(|v| *v == 42, |_| {}), Err(QueueError::ItemNotFound));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut q = PriorityQueue::default();
        q.enqueue(3).unwrap();
        q.enqueue(1).unwrap();
        let mut c = q.clone();
        c.enqueue(10).unwrap();
        assert_eq!(q.len(), 2);
        assert_eq!(c.peek(), Ok(&10));
        assert_eq!(q.peek(), Ok(&3));
    }
}
