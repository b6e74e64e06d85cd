use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;

/// FIFO of directories awaiting a file scan.
///
/// Written by the single discovery pass, drained by the worker pool. One
/// mutex guards the deque and is held only for the push or pop itself —
/// never across filesystem I/O.
///
/// The crawl is two-phase: discovery finishes before any worker starts, so
/// an empty queue means "no more work", not "wait for the producer".
/// [`pop_front`](WorkQueue::pop_front) therefore never blocks.
#[derive(Debug, Default)]
pub struct WorkQueue {
    items: Mutex<VecDeque<PathBuf>>,
}

impl WorkQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a directory path at the tail.
    pub fn push(&self, path: PathBuf) {
        self.items.lock().expect("work queue poisoned").push_back(path);
    }

    /// Remove and return the head, or `None` immediately if the queue is
    /// empty. Each pushed item is returned to exactly one caller.
    pub fn pop_front(&self) -> Option<PathBuf> {
        self.items.lock().expect("work queue poisoned").pop_front()
    }

    pub fn len(&self) -> usize {
        self.items.lock().expect("work queue poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
