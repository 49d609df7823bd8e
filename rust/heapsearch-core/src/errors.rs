#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    #[error("attempted to remove from or peek at an empty priority queue")]
    EmptyCollection,
    #[error("attempted to requeue an item that is not in the priority queue")]
    ItemNotFound,
    #[error("priority queue cannot grow to {requested} slots (maximum {max})")]
    CapacityExceeded { requested: usize, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Queue(#[from] QueueError),
}
