mod join;
mod span;

use super::{
    errors::SegmentTreeError,
    model::TreeStats,
    result::SegmentTreeResult,
};
use join::{Aggregate, leaf_count};
use smallvec::SmallVec;
use span::Span;
use std::{
    fmt::{self, Debug},
    ops::Range,
};

// SegmentTree
//
// Complete binary tree stored as a heap: root at 0, children of i at 2i+1 and 2i+2.
// Leaves start at `node_count / 2`; leaves past `len` hold the absent value (`None`)
// and the empty span [len, len).
//
// An empty input builds a single absent node, every query and index is rejected.

pub struct SegmentTree<T, F> {
    len: usize,
    aggregate: Aggregate<F>,
    node_count: usize,
    tree: Vec<Option<T>>,
    span: Vec<Span>,
}

// Which way the range decomposition goes from a node
enum Route {
    Covered,
    Left,
    Right,
    Split(usize),
}

impl<T, F> SegmentTree<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    // Constructors

    // `join` must be associative, it does not have to be commutative
    pub fn build(array: impl Into<Vec<T>>, join: F) -> Self {
        let array = array.into();
        let len = array.len();
        let leaves = leaf_count(len);
        let node_count = 2 * leaves - 1;
        let first_leaf = leaves - 1;
        let aggregate = Aggregate::new(join);

        let mut tree: Vec<Option<T>> = Vec::with_capacity(node_count);
        tree.resize_with(first_leaf, || None);
        tree.extend(array.into_iter().map(Some));
        tree.resize_with(node_count, || None);

        let mut span = vec![Span::empty_at(len); node_count];
        for i in 0..len {
            span[first_leaf + i] = Span::new(i, i + 1);
        }

        for i in (0..first_leaf).rev() {
            tree[i] = aggregate.combine(tree[2 * i + 1].as_ref(), tree[2 * i + 2].as_ref());
            span[i] = Span::cover(span[2 * i + 1], span[2 * i + 2]);
        }

        Self {
            len,
            aggregate,
            node_count,
            tree,
            span,
        }
    }

    pub fn from_slice(array: &[T], join: F) -> Self {
        Self::build(array.to_vec(), join)
    }

    // Queries

    // join over [left, right), requires 0 <= left < right <= len
    pub fn query(&self, left: isize, right: isize) -> SegmentTreeResult<T> {
        let (l, r) = self.check_range(left, right)?;
        self.query_node(l, r, 0)
            .ok_or(SegmentTreeError::QueryRange { left, right, len: self.len })
    }

    // Spans of the nodes `query` joins, left to right
    pub fn covering_spans(
        &self,
        left: isize,
        right: isize,
    ) -> SegmentTreeResult<SmallVec<[Range<usize>; 32]>> {
        let (l, r) = self.check_range(left, right)?;
        let mut spans = SmallVec::new();
        self.collect_spans(l, r, 0, &mut spans);
        Ok(spans)
    }

    // Negative index counts from the back
    pub fn get(&self, index: isize) -> SegmentTreeResult<T> {
        let position = self.normalize(index)?;
        self.tree[self.first_leaf() + position]
            .clone()
            .ok_or(SegmentTreeError::IndexOutOfRange { index, len: self.len })
    }

    pub fn to_array(&self) -> Vec<T> {
        self.leaves().cloned().collect()
    }

    // Mutations

    pub fn update(&mut self, index: isize, value: T) -> SegmentTreeResult<()> {
        let position = self.normalize(index)?;
        let mut node = self.first_leaf() + position;
        self.tree[node] = Some(value);
        while node > 0 {
            node = (node - 1) / 2;
            self.tree[node] = self
                .aggregate
                .combine(self.tree[2 * node + 1].as_ref(), self.tree[2 * node + 2].as_ref());
        }
        Ok(())
    }

    // Decomposition

    // [left, right) always lies inside the span of `node`.
    // Exact match wins, then left child, then right child, then split at the border.
    fn route(&self, left: usize, right: usize, node: usize) -> Route {
        if self.span[node].matches(left, right) {
            return Route::Covered;
        }
        debug_assert!(node < self.first_leaf(), "leaf {node} reached without exact match");
        let mid = self.span[2 * node + 1].right;
        if right <= mid {
            Route::Left
        } else if left >= mid {
            Route::Right
        } else {
            Route::Split(mid)
        }
    }

    fn query_node(&self, left: usize, right: usize, node: usize) -> Option<T> {
        match self.route(left, right, node) {
            Route::Covered => self.tree[node].clone(),
            Route::Left => self.query_node(left, right, 2 * node + 1),
            Route::Right => self.query_node(left, right, 2 * node + 2),
            Route::Split(mid) => {
                let from_left = self.query_node(left, mid, 2 * node + 1);
                let from_right = self.query_node(mid, right, 2 * node + 2);
                self.aggregate.merge(from_left, from_right)
            }
        }
    }

    fn collect_spans(
        &self,
        left: usize,
        right: usize,
        node: usize,
        spans: &mut SmallVec<[Range<usize>; 32]>,
    ) {
        match self.route(left, right, node) {
            Route::Covered => spans.push(self.span[node].to_range()),
            Route::Left => self.collect_spans(left, right, 2 * node + 1, spans),
            Route::Right => self.collect_spans(left, right, 2 * node + 2, spans),
            Route::Split(mid) => {
                self.collect_spans(left, mid, 2 * node + 1, spans);
                self.collect_spans(mid, right, 2 * node + 2, spans);
            }
        }
    }
}

impl<T, F> SegmentTree<T, F> {
    // Accessors

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // Span of a node by heap index
    pub fn span(&self, node: usize) -> Option<Range<usize>> {
        self.span.get(node).map(|span| span.to_range())
    }

    pub fn stats(&self) -> TreeStats {
        let leaf_count = self.first_leaf() + 1;
        TreeStats {
            len: self.len,
            leaf_count,
            node_count: self.node_count,
            padding_leaves: leaf_count - self.len,
        }
    }

    #[inline]
    fn first_leaf(&self) -> usize {
        self.node_count / 2
    }

    fn leaves(&self) -> impl Iterator<Item = &T> {
        let first = self.first_leaf();
        self.tree[first..first + self.len].iter().flatten()
    }

    // Bounds checks run before any mutation

    fn check_range(&self, left: isize, right: isize) -> SegmentTreeResult<(usize, usize)> {
        let error = || SegmentTreeError::QueryRange { left, right, len: self.len };
        let l = usize::try_from(left).map_err(|_| error())?;
        let r = usize::try_from(right).map_err(|_| error())?;
        if r > self.len || l >= r {
            return Err(error());
        }
        Ok((l, r))
    }

    fn normalize(&self, index: isize) -> SegmentTreeResult<usize> {
        let len = self.len as isize;
        let shifted = if index < 0 { index + len } else { index };
        if shifted < 0 || shifted >= len {
            return Err(SegmentTreeError::IndexOutOfRange { index, len: self.len });
        }
        Ok(shifted as usize)
    }
}

impl<T: Debug, F> Debug for SegmentTree<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentTree")
            .field("len", &self.len)
            .field("node_count", &self.node_count)
            .field("leaves", &self.leaves().collect::<Vec<_>>())
            .finish()
    }
}
