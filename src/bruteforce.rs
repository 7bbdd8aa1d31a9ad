//! Brute-force exact index — scans every stored vector at query time.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::distance::{DistanceFn, DistanceMetric};
use crate::error::{Result, VectorDbError};
use crate::index::{check_dim, check_k, Index, SearchResult};
use crate::topk::TopK;

/// The simplest possible index: score all N stored vectors per query.
/// Exact by construction. Slow at large N.
///
/// Cost per search: O(N * dim) distance work plus O(N log k) queue
/// maintenance.
///
/// A reader/writer lock allows concurrent searches while adds and deletes
/// take the lock exclusively.
#[derive(Debug)]
pub struct BruteForceIndex {
    dim: usize,
    metric: DistanceMetric,
    dist: DistanceFn,
    vectors: RwLock<HashMap<String, Vec<f32>>>,
}

impl BruteForceIndex {
    /// Create an empty index for vectors of length `dim`.
    pub fn new(dim: usize, metric: DistanceMetric) -> Result<Self> {
        if dim == 0 {
            return Err(VectorDbError::InvalidDimension);
        }

        Ok(Self {
            dim,
            metric,
            dist: metric.distance_fn(),
            vectors: RwLock::new(HashMap::new()),
        })
    }
}

impl Index for BruteForceIndex {
    fn dimension(&self) -> usize {
        self.dim
    }

    fn metric(&self) -> DistanceMetric {
        self.metric
    }

    fn size(&self) -> usize {
        self.vectors.read().len()
    }

    fn add(&self, id: &str, vector: &[f32]) -> Result<()> {
        if id.is_empty() {
            return Err(VectorDbError::EmptyPointId);
        }
        check_dim(self.dim, vector)?;

        // to_vec copies, so later mutation of the caller's buffer cannot
        // corrupt stored state.
        self.vectors.write().insert(id.to_string(), vector.to_vec());
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<()> {
        if id.is_empty() {
            return Ok(());
        }
        self.vectors.write().remove(id);
        Ok(())
    }

    fn search(&self, query: &[f32], k: usize) -> Result<Vec<SearchResult>> {
        check_k(k)?;
        check_dim(self.dim, query)?;

        let vectors = self.vectors.read();
        if vectors.is_empty() {
            return Ok(Vec::new());
        }

        let mut best = TopK::new(k);
        for (id, vec) in vectors.iter() {
            best.push(id, (self.dist)(query, vec));
        }

        Ok(best.into_sorted_results())
    }
}
