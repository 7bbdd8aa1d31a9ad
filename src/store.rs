//! Store: the registry of collections.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::collection::Collection;
use crate::distance::DistanceMetric;
use crate::error::{Result, VectorDbError};

/// Process-lifetime registry mapping collection names to collections.
///
/// Collections are never deleted or renamed, so an `Arc<Collection>`
/// handed out here stays valid for as long as the caller holds it. The
/// registry lock is only held for the lookup itself, never across a
/// collection operation, which keeps cross-collection traffic concurrent.
#[derive(Default)]
pub struct Store {
    cols: RwLock<HashMap<String, Arc<Collection>>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and register a collection. Fails if the name is taken or if
    /// collection construction rejects the parameters.
    pub fn create_collection(
        &self,
        name: &str,
        dim: usize,
        metric: DistanceMetric,
    ) -> Result<Arc<Collection>> {
        let mut cols = self.cols.write();

        if cols.contains_key(name) {
            return Err(VectorDbError::CollectionExists {
                name: name.to_string(),
            });
        }

        let col = Arc::new(Collection::new(name, dim, metric)?);
        cols.insert(name.to_string(), Arc::clone(&col));
        Ok(col)
    }

    pub fn get_collection(&self, name: &str) -> Result<Arc<Collection>> {
        self.cols
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| VectorDbError::CollectionNotFound {
                name: name.to_string(),
            })
    }

    /// Registered collection names, in no particular order.
    pub fn list_collections(&self) -> Vec<String> {
        self.cols.read().keys().cloned().collect()
    }
}
