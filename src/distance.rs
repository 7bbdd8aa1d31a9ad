//! Distance metrics for vector similarity

use crate::error::{Result, VectorDbError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scoring function where HIGHER is always better, regardless of metric.
pub type DistanceFn = fn(&[f32], &[f32]) -> f32;

/// Supported distance metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Cosine similarity: dot(a,b) / (|a|*|b|), range [-1, 1]
    Cosine,
    /// Dot product, unbounded
    Dot,
    /// Negated squared Euclidean distance (closer = higher)
    L2,
}

impl DistanceMetric {
    /// Parse a user-supplied metric name. Whitespace is trimmed and the
    /// name is case-folded, so " Cosine " parses fine.
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "cosine" => Ok(DistanceMetric::Cosine),
            "dot" => Ok(DistanceMetric::Dot),
            "l2" => Ok(DistanceMetric::L2),
            _ => Err(VectorDbError::UnknownMetric {
                name: name.to_string(),
            }),
        }
    }

    /// The canonical wire name of this metric.
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceMetric::Cosine => "cosine",
            DistanceMetric::Dot => "dot",
            DistanceMetric::L2 => "l2",
        }
    }

    /// The scoring function for this metric.
    pub fn distance_fn(&self) -> DistanceFn {
        match self {
            DistanceMetric::Cosine => cosine_similarity,
            DistanceMetric::Dot => dot_product,
            DistanceMetric::L2 => neg_squared_l2,
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// The scoring functions do NOT check length equality, for speed.
// The index/collection boundary enforces a consistent dimension.

/// Compute sum(a[i] * b[i]). Higher is better.
pub fn dot_product(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Compute dot(a,b) / (|a|*|b|). Range [-1, 1], higher is better.
/// If either vector is all zeros, returns 0 (never NaN).
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let mut dot = 0.0f32;
    let mut na = 0.0f32;
    let mut nb = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        na += x * x;
        nb += y * y;
    }

    if na == 0.0 || nb == 0.0 {
        return 0.0;
    }

    let denom = ((na as f64) * (nb as f64)).sqrt() as f32;
    if denom == 0.0 {
        return 0.0;
    }
    dot / denom
}

/// Compute -sum((a[i]-b[i])^2). Squared L2 ranks the same as true L2
/// (sqrt is monotonic), and negating it makes higher better.
pub fn neg_squared_l2(a: &[f32], b: &[f32]) -> f32 {
    let mut sum = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        let diff = x - y;
        sum += diff * diff;
    }
    -sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dot_product() {
        let dot = dot_product(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]);
        assert_relative_eq!(dot, 32.0, epsilon = 1e-6);
    }

    #[test]
    fn test_cosine_same_vector() {
        let v = [1.0, 2.0, 3.0];
        let sim = cosine_similarity(&v, &v);
        assert_relative_eq!(sim, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_cosine_orthogonal() {
        let sim = cosine_similarity(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]);
        assert_relative_eq!(sim, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_cosine_opposite() {
        let sim = cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]);
        assert_relative_eq!(sim, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_cosine_zero_vector() {
        // Zero vectors score 0, never NaN and never an error.
        let sim = cosine_similarity(&[0.0, 0.0, 0.0], &[1.0, 2.0, 3.0]);
        assert_eq!(sim, 0.0);
        let sim = cosine_similarity(&[1.0, 2.0, 3.0], &[0.0, 0.0, 0.0]);
        assert_eq!(sim, 0.0);
    }

    #[test]
    fn test_neg_squared_l2() {
        let score = neg_squared_l2(&[1.0, 2.0], &[4.0, 6.0]);
        assert_relative_eq!(score, -25.0, epsilon = 1e-6);
    }

    #[test]
    fn test_neg_squared_l2_same_vector() {
        let v = [1.0, 2.0, 3.0];
        assert_relative_eq!(neg_squared_l2(&v, &v), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_parse_normalizes() {
        assert_eq!(DistanceMetric::parse("cosine").unwrap(), DistanceMetric::Cosine);
        assert_eq!(DistanceMetric::parse(" Dot ").unwrap(), DistanceMetric::Dot);
        assert_eq!(DistanceMetric::parse("L2").unwrap(), DistanceMetric::L2);
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            DistanceMetric::parse("euclidean"),
            Err(VectorDbError::UnknownMetric { .. })
        ));
        assert!(matches!(
            DistanceMetric::parse(""),
            Err(VectorDbError::UnknownMetric { .. })
        ));
    }

    #[test]
    fn test_distance_fn_dispatch() {
        let f = DistanceMetric::Dot.distance_fn();
        assert_relative_eq!(f(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0, epsilon = 1e-6);

        let f = DistanceMetric::L2.distance_fn();
        assert_relative_eq!(f(&[1.0, 2.0], &[4.0, 6.0]), -25.0, epsilon = 1e-6);
    }
}
