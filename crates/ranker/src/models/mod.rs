// Data models for the ranking pipeline.
// Input records arrive loosely shaped (scanner output, database rows);
// everything downstream operates on engine-owned typed copies.

pub mod project;

pub use project::{NormalizedMetrics, ProjectInput, ProjectRecord, ScoredProject};
