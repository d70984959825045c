//! Identifiers for pooled vectors
//!
//! Every vector set pre-allocates its vectors; a `VectorId` is the index of
//! a slot in that pool. Ids are stable for the lifetime of the set.

use std::fmt;

/// Index of a vector slot inside a vector set's pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VectorId(usize);

impl VectorId {
    /// Create an id from a pool index
    #[inline]
    pub const fn new(index: usize) -> Self {
        VectorId(index)
    }

    /// Get the pool index
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for VectorId {
    fn from(index: usize) -> Self {
        VectorId(index)
    }
}

impl fmt::Display for VectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Index of a vector set within a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VectorSetId(usize);

impl VectorSetId {
    #[inline]
    pub const fn new(index: usize) -> Self {
        VectorSetId(index)
    }

    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VectorSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "set{}", self.0)
    }
}
