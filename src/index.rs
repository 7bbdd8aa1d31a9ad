//! Index trait for pluggable nearest-neighbor engines

use crate::distance::DistanceMetric;
use crate::error::{Result, VectorDbError};

/// A scored neighbor returned by an `Index`.
/// Score must be comparable such that higher means better.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub id: String,
    pub score: f32,
}

/// A nearest-neighbor engine over one collection's vectors.
///
/// Implementations are internally synchronized: every method takes `&self`,
/// so a single instance can serve concurrent searches while mutations
/// serialize behind the implementation's own lock. That is what lets
/// `Collection` keep one boxed instance and share it across request tasks.
pub trait Index: Send + Sync {
    /// The vector length this index accepts, fixed for its lifetime.
    fn dimension(&self) -> usize;

    /// The distance metric, fixed for its lifetime.
    fn metric(&self) -> DistanceMetric;

    /// The number of stored vectors.
    fn size(&self) -> usize;

    /// Insert or overwrite the vector stored under `id`.
    fn add(&self, id: &str, vector: &[f32]) -> Result<()>;

    /// Remove the vector stored under `id`. Not an error if it doesn't exist.
    fn delete(&self, id: &str) -> Result<()>;

    /// Search for up to `k` nearest neighbors of `query`, best-first.
    fn search(&self, query: &[f32], k: usize) -> Result<Vec<SearchResult>>;
}

/// Validate a vector length against the expected dimension.
pub fn check_dim(expected: usize, vector: &[f32]) -> Result<()> {
    if vector.len() != expected {
        return Err(VectorDbError::DimensionMismatch {
            expected,
            actual: vector.len(),
        });
    }
    Ok(())
}

/// Validate k for searches.
pub fn check_k(k: usize) -> Result<()> {
    if k == 0 {
        return Err(VectorDbError::InvalidK);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_dim() {
        assert!(check_dim(3, &[1.0, 2.0, 3.0]).is_ok());
        assert!(matches!(
            check_dim(3, &[1.0, 2.0]),
            Err(VectorDbError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_check_k() {
        assert!(check_k(1).is_ok());
        assert!(matches!(check_k(0), Err(VectorDbError::InvalidK)));
    }
}
