//! # vectordb-server
//!
//! An in-memory vector similarity search engine.
//!
//! This library provides:
//! - Named collections with a fixed dimension and distance metric
//! - Distance metrics (cosine, dot product, negated squared L2)
//! - Exact brute-force top-k search behind a pluggable `Index` trait
//! - An HTTP API layer
//!
//! ## Example
//!
//! ```rust
//! use vectordb_server::{DistanceMetric, Store};
//!
//! let store = Store::new();
//! let users = store.create_collection("users", 3, DistanceMetric::Dot).unwrap();
//!
//! users.upsert("a", &[1.0, 0.0, 0.0], None).unwrap();
//! users.upsert("b", &[0.0, 1.0, 0.0], None).unwrap();
//!
//! let hits = users.search(&[1.0, 0.0, 0.0], 1, false, false).unwrap();
//! assert_eq!(hits[0].id, "a");
//! ```

pub mod bruteforce;
pub mod collection;
pub mod distance;
pub mod error;
pub mod index;
pub mod server;
pub mod store;
pub mod topk;

pub use bruteforce::BruteForceIndex;
pub use collection::{Collection, Metadata, Point, ScoredPoint};
pub use distance::DistanceMetric;
pub use error::{Result, VectorDbError};
pub use index::{Index, SearchResult};
pub use store::Store;
