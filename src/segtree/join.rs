// Aggregate - join operation extended with the absent value
//
// absent ⋈ absent = absent
// absent ⋈ x      = x
// x      ⋈ absent = x
// x      ⋈ y      = join(x, y)

pub(crate) struct Aggregate<F> {
    join: F,
}

impl<F> Aggregate<F> {
    pub(crate) fn new(join: F) -> Self {
        Self { join }
    }

    // Borrowed operands, used while rebuilding internal nodes
    #[inline]
    pub(crate) fn combine<T>(&self, left: Option<&T>, right: Option<&T>) -> Option<T>
    where
        T: Clone,
        F: Fn(&T, &T) -> T,
    {
        match (left, right) {
            (None, None) => None,
            (Some(value), None) | (None, Some(value)) => Some(value.clone()),
            (Some(l), Some(r)) => Some((self.join)(l, r)),
        }
    }

    // Owned operands, used for partial query results
    #[inline]
    pub(crate) fn merge<T>(&self, left: Option<T>, right: Option<T>) -> Option<T>
    where
        F: Fn(&T, &T) -> T,
    {
        match (left, right) {
            (None, None) => None,
            (Some(value), None) | (None, Some(value)) => Some(value),
            (Some(l), Some(r)) => Some((self.join)(&l, &r)),
        }
    }
}

// ceil(log2(n)) by repeated right shift.
// Any 1 bit shifted off below the top bit means n is not a power of two
// and needs one more doubling. n = 0 and n = 1 both give 0.
pub(crate) fn ceil_log2(mut n: usize) -> u32 {
    let mut bits = 0;
    let mut exact = true;
    while n > 1 {
        if n & 1 == 1 {
            exact = false;
        }
        bits += 1;
        n >>= 1;
    }
    if exact { bits } else { bits + 1 }
}

// Padded leaf count: smallest power of two >= n, at least 1
#[inline]
pub(crate) fn leaf_count(n: usize) -> usize {
    1usize << ceil_log2(n)
}
