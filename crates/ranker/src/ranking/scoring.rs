use serde::{Deserialize, Serialize};

use crate::models::NormalizedMetrics;
use crate::ranking::similarity::cosine_similarity;

/// Weights applied to the normalized metrics.
///
/// The combiner performs a literal weighted sum — weights are not validated
/// to sum to 1; callers own the sanity of their weight maps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricWeights {
    pub time: f64,
    pub success: f64,
    pub contribution: f64,
}

impl Default for MetricWeights {
    fn default() -> Self {
        Self {
            time: 0.4,
            success: 0.3,
            contribution: 0.3,
        }
    }
}

/// Upper clamp for a combined score. Boosts are additive on top of the [0, 1]
/// weighted baseline, so 1.0 is the baseline maximum, not an absolute ceiling.
pub const SCORE_CEILING: f64 = 1.5;

/// Combines normalized metrics and boosts into one scalar, clamped to
/// `[0, SCORE_CEILING]`.
pub fn combine_score(
    normalized: &NormalizedMetrics,
    weights: &MetricWeights,
    skill_boost: f64,
    semantic_boost: f64,
) -> f64 {
    let base = weights.time * normalized.time
        + weights.success * normalized.success
        + weights.contribution * normalized.contribution;
    (base + skill_boost + semantic_boost).clamp(0.0, SCORE_CEILING)
}

/// Flat skill-match boost: any overlap with the target skills earns the full
/// constant, regardless of overlap size. The bonus is intentionally not
/// proportional to the overlap.
pub fn skill_match_boost(skills: &[String], target_skills: &[String], skill_alpha: f64) -> f64 {
    if target_skills.is_empty() {
        return 0.0;
    }
    let overlaps = skills.iter().any(|s| target_skills.iter().any(|t| t == s));
    if overlaps {
        skill_alpha
    } else {
        0.0
    }
}

/// Semantic boost: `semantic_alpha * cosine(embedding, target)`, applied only
/// when both embeddings are present.
pub fn semantic_boost(
    embedding: Option<&[f64]>,
    target_embedding: Option<&[f64]>,
    semantic_alpha: f64,
) -> f64 {
    match (embedding, target_embedding) {
        (Some(embedding), Some(target)) => semantic_alpha * cosine_similarity(embedding, target),
        _ => 0.0,
    }
}
