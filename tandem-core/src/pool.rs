//! Size-keyed pool of reusable scratch buffers
//!
//! Every matrix operation computes into a scratch buffer borrowed from the
//! pool and commits it into the destination only once the result is
//! complete. A destination that is also an operand therefore never sees a
//! half-written state, and hot loops stop allocating after the first pass.
//!
//! Buffers are never cleared. A fresh buffer is zero-filled, a recycled one
//! holds whatever its previous user left behind, so consumers must fully
//! overwrite what they acquire before reading it.
//!
//! The pool grows without eviction. It is not shared: operations take it by
//! `&mut`, and concurrent callers each own one.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Serialize;
use tracing::trace;

use crate::scalar::Scalar;

/// LIFO stacks of retired buffers, keyed by buffer length
#[derive(Debug)]
pub struct BufferPool<S> {
    stacks: HashMap<usize, Vec<Vec<S>>>,
}

impl<S: Scalar> BufferPool<S> {
    pub fn new() -> Self {
        Self { stacks: HashMap::new() }
    }

    /// Pop a retired buffer of exactly `len` elements, or allocate a zeroed one
    pub fn acquire(&mut self, len: usize) -> Vec<S> {
        match self.stacks.get_mut(&len).and_then(Vec::pop) {
            Some(buf) => buf,
            None => {
                trace!(scalar = S::NAME, len, "allocating scratch buffer");
                vec![S::zero(); len]
            }
        }
    }

    /// Acquire a buffer holding a copy of `src`
    pub fn acquire_copy(&mut self, src: &[S]) -> Vec<S> {
        let mut buf = self.acquire(src.len());
        buf.clone_from_slice(src);
        buf
    }

    /// Retire a buffer; it must not be used afterwards
    pub fn release(&mut self, buf: Vec<S>) {
        self.stacks.entry(buf.len()).or_default().push(buf);
    }

    /// Commit `buf` into `dest` and retire it
    ///
    /// Elements are moved, not cloned: `dest` receives the computed values and
    /// the retired buffer keeps `dest`'s previous contents as stale scratch.
    pub fn release_into(&mut self, mut buf: Vec<S>, dest: &mut [S]) {
        debug_assert_eq!(buf.len(), dest.len());
        trace!(scalar = S::NAME, len = buf.len(), "committing scratch buffer");
        dest.swap_with_slice(&mut buf);
        self.release(buf);
    }

    /// Number of retired buffers of length `len`
    pub fn retained(&self, len: usize) -> usize {
        self.stacks.get(&len).map_or(0, Vec::len)
    }

    /// Occupancy snapshot for diagnostics; sizes with no retired buffer are omitted
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            buffers: self
                .stacks
                .iter()
                .filter(|(_, stack)| !stack.is_empty())
                .map(|(len, stack)| (*len, stack.len()))
                .collect(),
        }
    }
}

impl<S: Scalar> Default for BufferPool<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Buffer length → number of retired buffers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PoolStats {
    pub buffers: BTreeMap<usize, usize>,
}

impl PoolStats {
    /// Total retired buffers across all sizes
    pub fn total(&self) -> usize {
        self.buffers.values().sum()
    }
}

impl fmt::Display for PoolStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (len, count) in &self.buffers {
            writeln!(f, "Size {} matrices: {} buffer(s)", len, count)?;
        }
        Ok(())
    }
}
