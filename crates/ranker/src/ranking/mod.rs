// Deterministic in-memory ranking pipeline.
// Implements: min-max metric normalization, weighted score combination with
// optional skill-match and semantic boosts, and greedy diversity-aware top-k
// selection. No I/O, no async — one invocation runs to completion on
// engine-owned copies of the input.

pub mod inference;
pub mod normalize;
pub mod ranker;
pub mod scoring;
pub mod selection;
pub mod similarity;
pub mod summary;

// Re-export the public API consumed by embedding applications.
pub use ranker::{ProjectRanker, RankRequest, RankResult, RankerConfig};
pub use scoring::{MetricWeights, SCORE_CEILING};
