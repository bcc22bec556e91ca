use super::errors::SegmentTreeError;

pub type SegmentTreeResult<T> = Result<T,SegmentTreeError>;
