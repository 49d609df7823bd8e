//! Property-based checks of the heap invariant and queue bookkeeping.

use heapsearch_core::{Natural, PriorityQueue, QueueError, QueueOrder};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Enqueue(i32),
    Dequeue,
    Bump(i32, i32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i32>().prop_map(Op::Enqueue),
        2 => Just(Op::Dequeue),
        1 => (any::<i32>(), any::<i32>()).prop_map(|(a, b)| Op::Bump(a, b)),
    ]
}

proptest! {
    #[test]
    fn invariant_holds_after_any_operation_sequence(ops in prop::collection::vec(op_strategy(), 0..200)) {
        for order in [QueueOrder::HighestFirst, QueueOrder::LowestFirst] {
            let mut q = PriorityQueue::with_order(Natural, order);
            let mut enqueued = 0usize;
            let mut dequeued = 0usize;
            for op in &ops {
                match *op {
                    Op::Enqueue(v) => {
                        q.enqueue(v).unwrap();
                        enqueued += 1;
                    }
                    Op::Dequeue => match q.dequeue() {
                        Ok(_) => dequeued += 1,
                        Err(e) => {
                            prop_assert_eq!(e, QueueError::EmptyCollection);
                        }
                    },
                    Op::Bump(seed, to) => {
                        if !q.is_empty() {
                            let target = q.as_slice()[seed.unsigned_abs() as usize % q.len()];
                            q.requeue_by(|v| *v == target, |v| *v = to).unwrap();
                        }
                    }
                }
                prop_assert!(q.is_heap());
                prop_assert_eq!(q.len(), enqueued - dequeued);
            }
        }
    }

    #[test]
    fn distinct_values_dequeue_strictly_descending(values in prop::collection::hash_set(any::<i64>(), 1..150)) {
        let mut q = PriorityQueue::default();
        for v in &values {
            q.enqueue(*v).unwrap();
        }
        let mut out = Vec::with_capacity(values.len());
        while let Ok(v) = q.dequeue() {
            out.push(v);
        }
        prop_assert_eq!(out.len(), values.len());
        prop_assert!(out.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn growth_never_loses_or_duplicates(values in prop::collection::vec(-1000i32..1000, 0..300)) {
        let mut q = PriorityQueue::with_capacity(Natural, 2).unwrap();
        for v in &values {
            q.enqueue(*v).unwrap();
        }
        prop_assert!(q.capacity() >= values.len());
        let mut out = Vec::new();
        while let Ok(v) = q.dequeue() {
            out.push(v);
        }
        let mut expected = values.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(out, expected);
    }
}

#[test]
fn enqueue_beyond_initial_capacity_resizes() {
    let mut q = PriorityQueue::with_capacity(Natural, 4).unwrap();
    for v in 0..100 {
        q.enqueue(v).unwrap();
    }
    assert!(q.capacity() > 4);
    assert_eq!(q.len(), 100);
    let mut seen: Vec<i32> = q.iter().copied().collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..100).collect::<Vec<_>>());
}
