use super::model::QueueStats;
use std::fmt::{self, Debug};

// TwoStackQueue - FIFO on top of two LIFO stacks
//
// `in_stack` holds the newest elements, most recent on top.
// `out_stack` holds the front of the queue, next to dequeue on top.
// Elements move from `in_stack` to `out_stack` only when `out_stack` runs dry,
// so every element is moved at most once: amortized O(1) per operation.

pub struct TwoStackQueue<T> {
    in_stack: Vec<T>,
    out_stack: Vec<T>,
    count: usize,
}

impl<T> Default for TwoStackQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TwoStackQueue<T> {
    // Constructors

    pub fn new() -> Self {
        Self {
            in_stack: Vec::new(),
            out_stack: Vec::new(),
            count: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            in_stack: Vec::with_capacity(capacity),
            out_stack: Vec::with_capacity(capacity),
            count: 0,
        }
    }

    // Mutations

    pub fn enqueue(&mut self, item: T) {
        self.in_stack.push(item);
        self.count += 1;
        self.check_count();
    }

    pub fn dequeue(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        if self.out_stack.is_empty() {
            self.transfer();
        }
        let item = self.out_stack.pop()?;
        self.count -= 1;
        self.check_count();
        Some(item)
    }

    pub fn clear(&mut self) {
        self.in_stack.clear();
        self.out_stack.clear();
        self.count = 0;
    }

    // Reverses `in_stack` onto `out_stack`, the oldest element ends on top
    fn transfer(&mut self) {
        while let Some(item) = self.in_stack.pop() {
            self.out_stack.push(item);
        }
    }

    // Accessors

    #[inline]
    pub fn length(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    // Front element without moving anything between stacks
    pub fn peek(&self) -> Option<&T> {
        match self.out_stack.last() {
            Some(front) => Some(front),
            None => self.in_stack.first(),
        }
    }

    pub fn stats(&self) -> QueueStats {
        QueueStats {
            len: self.count,
            in_stack_len: self.in_stack.len(),
            out_stack_len: self.out_stack.len(),
            in_capacity: self.in_stack.capacity(),
            out_capacity: self.out_stack.capacity(),
        }
    }

    // Front to back: `out_stack` top-down, then `in_stack` bottom-up
    fn iter_ordered(&self) -> impl Iterator<Item = &T> {
        self.out_stack.iter().rev().chain(self.in_stack.iter())
    }

    #[inline]
    fn check_count(&self) {
        debug_assert_eq!(self.count, self.in_stack.len() + self.out_stack.len());
    }
}

impl<T> Extend<T> for TwoStackQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> FromIterator<T> for TwoStackQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T: Debug> Debug for TwoStackQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter_ordered()).finish()
    }
}
