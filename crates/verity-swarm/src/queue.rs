//! Stable priority task queue.
//!
//! One FIFO bucket per priority, scanned highest-first. The bucket design
//! makes the stable-ordering contract structural: equal-priority tasks
//! leave in enqueue order with no reliance on sort stability.

use std::collections::VecDeque;

use verity_core::models::{TaskId, TaskPriority};

/// Priority queue of pending task ids.
#[derive(Debug, Default)]
pub struct TaskQueue {
    critical: VecDeque<TaskId>,
    high: VecDeque<TaskId>,
    medium: VecDeque<TaskId>,
    low: VecDeque<TaskId>,
}

impl TaskQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a task at the back of its priority bucket.
    pub fn push(&mut self, id: TaskId, priority: TaskPriority) {
        self.bucket_mut(priority).push_back(id);
    }

    /// The id at the head of the queue: front of the highest non-empty
    /// bucket. The head is the only assignment candidate — the queue
    /// never searches ahead past it.
    pub fn front(&self) -> Option<&TaskId> {
        TaskPriority::DESCENDING
            .iter()
            .find_map(|p| self.bucket(*p).front())
    }

    /// Remove and return the head of the queue.
    pub fn pop_front(&mut self) -> Option<TaskId> {
        for priority in TaskPriority::DESCENDING {
            if let Some(id) = self.bucket_mut(priority).pop_front() {
                return Some(id);
            }
        }
        None
    }

    /// Total queued tasks across all buckets.
    pub fn len(&self) -> usize {
        TaskPriority::DESCENDING
            .iter()
            .map(|p| self.bucket(*p).len())
            .sum()
    }

    /// Whether no tasks are queued.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn bucket(&self, priority: TaskPriority) -> &VecDeque<TaskId> {
        match priority {
            TaskPriority::Critical => &self.critical,
            TaskPriority::High => &self.high,
            TaskPriority::Medium => &self.medium,
            TaskPriority::Low => &self.low,
        }
    }

    fn bucket_mut(&mut self, priority: TaskPriority) -> &mut VecDeque<TaskId> {
        match priority {
            TaskPriority::Critical => &mut self.critical,
            TaskPriority::High => &mut self.high,
            TaskPriority::Medium => &mut self.medium,
            TaskPriority::Low => &mut self.low,
        }
    }
}
