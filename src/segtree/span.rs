use std::ops::Range;

// Half-open interval [left, right) of the underlying array covered by a node
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub(crate) struct Span {
    pub left: usize,
    pub right: usize,
}

impl Span {
    #[inline]
    pub(crate) fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }

    // Span of a padding leaf: the empty interval at the end of the array
    #[inline]
    pub(crate) fn empty_at(len: usize) -> Self {
        Self { left: len, right: len }
    }

    #[inline]
    pub(crate) fn cover(left: Span, right: Span) -> Self {
        Self { left: left.left, right: right.right }
    }

    #[inline]
    pub(crate) fn matches(&self, left: usize, right: usize) -> bool {
        self.left == left && self.right == right
    }

    #[inline]
    pub(crate) fn to_range(self) -> Range<usize> {
        self.left..self.right
    }
}
