use std::fmt::Display;

#[derive(Debug,Clone,PartialEq,Eq)]
pub enum SegmentTreeError {
    QueryRange{
        left: isize,
        right: isize,
        len: usize,
    },
    IndexOutOfRange{
        index: isize,
        len: usize,
    },
}

impl Display for SegmentTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QueryRange { left, right, len } => write!(
                f,"query range [{left},{right}) is invalid, segment tree only has {len} elements"
            ),
            Self::IndexOutOfRange { index, len } => write!(
                f,"index {index} out of range for segment tree of {len} elements"
            ),
        }
    }
}

impl std::error::Error for SegmentTreeError {}
