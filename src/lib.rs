pub mod errors;
pub mod result;
pub mod model;
pub mod queue;
pub mod segtree;

pub use errors::SegmentTreeError;
pub use queue::TwoStackQueue;
pub use segtree::SegmentTree;
