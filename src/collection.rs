//! Collection: one index plus the authoritative point store.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde_json::{Map, Value};

use crate::bruteforce::BruteForceIndex;
use crate::distance::DistanceMetric;
use crate::error::{Result, VectorDbError};
use crate::index::{check_dim, check_k, Index};

/// Metadata attached to a point: string keys to arbitrary JSON values.
pub type Metadata = Map<String, Value>;

/// The stored record for an id.
/// The index only needs the vector; the collection keeps metadata too.
#[derive(Debug, Clone)]
pub struct Point {
    pub id: String,
    pub vector: Vec<f32>,
    pub metadata: Option<Metadata>,
}

/// A search hit. Vector and metadata are attached only when the caller
/// asked for them.
#[derive(Debug, Clone)]
pub struct ScoredPoint {
    pub id: String,
    pub score: f32,
    pub vector: Option<Vec<f32>>,
    pub metadata: Option<Metadata>,
}

/// A named, dimensioned, metric-fixed dataset of points.
///
/// Holds an `Index` (nearest-neighbor engine) and a point store
/// (authoritative vectors + metadata). The point store is the source of
/// truth for metadata; the index is the source of truth for ranking.
/// Upsert and delete hold the write lock across both updates, so no
/// reader ever observes one structure without the matching change in the
/// other.
pub struct Collection {
    name: String,
    dim: usize,
    metric: DistanceMetric,
    index: Box<dyn Index>,
    points: RwLock<HashMap<String, Point>>,
}

impl Collection {
    /// Create an empty collection. Name, dimension, and metric are fixed
    /// for the collection's lifetime.
    pub fn new(name: &str, dim: usize, metric: DistanceMetric) -> Result<Self> {
        if name.is_empty() {
            return Err(VectorDbError::EmptyCollectionName);
        }

        // Swap for other index algorithms later (IVF, HNSW); everything
        // below here depends only on the Index trait.
        let index = BruteForceIndex::new(dim, metric)?;

        Ok(Self {
            name: name.to_string(),
            dim,
            metric,
            index: Box::new(index),
            points: RwLock::new(HashMap::new()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimension(&self) -> usize {
        self.dim
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    pub fn size(&self) -> usize {
        self.points.read().len()
    }

    /// Insert or overwrite a point.
    pub fn upsert(&self, id: &str, vector: &[f32], metadata: Option<Metadata>) -> Result<()> {
        if id.is_empty() {
            return Err(VectorDbError::EmptyPointId);
        }
        check_dim(self.dim, vector)?;

        // Copy once; both the point store and the index keep their own
        // data, so the caller's buffer can't mutate internal state.
        let copied = vector.to_vec();

        let mut points = self.points.write();
        points.insert(
            id.to_string(),
            Point {
                id: id.to_string(),
                vector: copied.clone(),
                metadata,
            },
        );

        // Still holding the write lock: the index update lands before any
        // other caller can observe the new point.
        self.index.add(id, &copied)
    }

    /// Remove a point. No-op if the id is empty or absent.
    pub fn delete(&self, id: &str) -> Result<()> {
        if id.is_empty() {
            return Ok(());
        }

        let mut points = self.points.write();
        points.remove(id);
        self.index.delete(id)
    }

    /// Nearest-neighbor search, optionally attaching vectors/metadata.
    ///
    /// Metadata filtering is not implemented yet; the request layer accepts
    /// a filter and ignores it.
    pub fn search(
        &self,
        query: &[f32],
        k: usize,
        include_vectors: bool,
        include_metadata: bool,
    ) -> Result<Vec<ScoredPoint>> {
        check_dim(self.dim, query)?;
        check_k(k)?;

        // Step 1: ask the index for nearest ids + scores.
        let raw = self.index.search(query, k)?;
        if raw.is_empty() {
            return Ok(Vec::new());
        }

        // Step 2: attach stored data from the point store.
        let points = self.points.read();
        let mut out = Vec::with_capacity(raw.len());
        for r in raw {
            let Some(p) = points.get(&r.id) else {
                // Only possible if store and index got out of sync; skip.
                continue;
            };

            out.push(ScoredPoint {
                id: r.id,
                score: r.score,
                vector: include_vectors.then(|| p.vector.clone()),
                metadata: if include_metadata {
                    p.metadata.clone()
                } else {
                    None
                },
            });
        }

        Ok(out)
    }
}
