//! Project scoring and diversity-aware selection engine.
//!
//! Ranks a collection of projects by normalizing heterogeneous metrics onto a
//! common scale, combining them with configurable weights and optional
//! skill-match / semantic-similarity boosts, and greedily selecting a bounded,
//! skill-diverse top-k subset. Pure, synchronous, and in-memory — callers own
//! all I/O, persistence, and presentation.

pub mod errors;
pub mod importance;
pub mod models;
pub mod ranking;

pub use errors::RankerError;
pub use models::{NormalizedMetrics, ProjectInput, ProjectRecord, ScoredProject};
pub use ranking::{MetricWeights, ProjectRanker, RankRequest, RankResult, RankerConfig};
