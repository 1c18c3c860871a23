use graph_engine::data_structures::MinPriorityQueue;
use ordered_float::OrderedFloat;

#[test]
fn test_priority_queue_pops_smallest_first() {
    let mut pq: MinPriorityQueue<usize, OrderedFloat<f64>> = MinPriorityQueue::new();
    pq.push(1, OrderedFloat(10.0));
    pq.push(2, OrderedFloat(5.0));
    pq.push(3, OrderedFloat(7.5));
    assert_eq!(pq.len(), 3);

    assert_eq!(pq.pop(), Some((2, OrderedFloat(5.0))));
    assert_eq!(pq.pop(), Some((3, OrderedFloat(7.5))));
    assert_eq!(pq.pop(), Some((1, OrderedFloat(10.0))));
    assert!(pq.is_empty());
    assert_eq!(pq.pop(), None);
}

#[test]
fn test_priority_queue_breaks_ties_by_item() {
    let mut pq: MinPriorityQueue<usize, OrderedFloat<f64>> = MinPriorityQueue::with_capacity(4);
    pq.push(4, OrderedFloat(1.0));
    pq.push(0, OrderedFloat(1.0));
    pq.push(2, OrderedFloat(1.0));
    // a stale entry for an item already queued
    pq.push(0, OrderedFloat(3.0));

    let order: Vec<usize> = std::iter::from_fn(|| pq.pop()).map(|(item, _)| item).collect();
    assert_eq!(order, vec![0, 2, 4, 0]);
}
