#[derive(Debug, Clone, PartialEq)]
pub struct QueueStats {
    pub len: usize,
    pub in_stack_len: usize,
    pub out_stack_len: usize,
    pub in_capacity: usize,
    pub out_capacity: usize,
}

impl QueueStats {
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // Share of elements already sitting in dequeue order
    pub fn out_ratio(&self) -> f64 {
        if self.len == 0 {
            return 1.0;
        }
        self.out_stack_len as f64 / self.len as f64
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeStats {
    pub len: usize,
    pub leaf_count: usize,
    pub node_count: usize,
    pub padding_leaves: usize, // leaves holding the absent value
}

impl TreeStats {
    // No padding when the element count is an exact power of two
    pub fn is_perfect(&self) -> bool {
        self.padding_leaves == 0
    }

    pub fn padding_ratio(&self) -> f64 {
        if self.leaf_count == 0 {
            return 0.0;
        }
        self.padding_leaves as f64 / self.leaf_count as f64
    }
}
