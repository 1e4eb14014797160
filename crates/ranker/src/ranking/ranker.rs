use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::errors::RankerError;
use crate::models::{NormalizedMetrics, ProjectInput, ProjectRecord, ScoredProject};
use crate::ranking::inference::infer_structural_metrics;
use crate::ranking::normalize::min_max_normalize;
use crate::ranking::scoring::{combine_score, semantic_boost, skill_match_boost, MetricWeights};
use crate::ranking::selection::select_diverse;
use crate::ranking::summary::{average_score, build_summary};

/// Engine configuration. An engine instance holds nothing else, so
/// independent instances are safe to run from parallel callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankerConfig {
    pub weights: MetricWeights,
    /// Flat boost applied when a project shares any skill with the target list.
    pub skill_alpha: f64,
    /// Scale on cosine similarity between project and target embeddings.
    pub semantic_alpha: f64,
    /// Strength of the new-skill coverage bonus during selection.
    pub diversity_alpha: f64,
    /// Infer zero-valued metrics from structural stats (LOC, files, contributors).
    pub infer_metrics: bool,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            weights: MetricWeights::default(),
            skill_alpha: 0.25,
            semantic_alpha: 0.35,
            diversity_alpha: 0.15,
            infer_metrics: false,
        }
    }
}

/// One ranking request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RankRequest {
    /// Number of projects to select; may exceed the candidate count, in which
    /// case every candidate is selected.
    pub top_k: usize,
    /// Skills rewarded with the flat match boost. Empty disables the boost.
    pub target_skills: Vec<String>,
    /// Embedding rewarded with the semantic boost. Absent disables the boost.
    pub target_embedding: Option<Vec<f64>>,
}

/// Result of one ranking call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResult {
    /// Chosen projects in selection order, which is also presentation order.
    pub selected: Vec<ScoredProject>,
    /// Every candidate with derived fields attached, in input order.
    pub all_scored: Vec<ScoredProject>,
    /// Union of skills across the selected projects, sorted.
    pub covered_skills: Vec<String>,
    /// Mean selected score, rounded to 4 decimals.
    pub average_score: f64,
    /// Deterministic counts-and-coverage overview.
    pub summary: String,
}

impl RankResult {
    fn empty() -> Self {
        Self {
            selected: Vec::new(),
            all_scored: Vec::new(),
            covered_skills: Vec::new(),
            average_score: 0.0,
            summary: build_summary(0, &[], 0.0, false),
        }
    }
}

/// The scoring and diversity-aware selection engine.
///
/// Stateless across calls: every invocation copies its input, normalizes the
/// metric columns across the candidate set, combines them with the configured
/// weights and boosts, and runs greedy selection to completion. Caller-owned
/// input is never mutated.
#[derive(Debug, Clone, Default)]
pub struct ProjectRanker {
    config: RankerConfig,
}

impl ProjectRanker {
    pub fn new(config: RankerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Ranks typed project records.
    ///
    /// Infallible: missing data was defaulted at construction and every
    /// degenerate shape (empty input, zero-variance metrics, empty skill
    /// universe) has defined behavior.
    pub fn rank(&self, projects: &[ProjectInput], request: &RankRequest) -> RankResult {
        if projects.is_empty() {
            return RankResult::empty();
        }

        // Engine-owned copies; skill hygiene applied at construction.
        let mut records: Vec<ProjectRecord> =
            projects.iter().map(ProjectRecord::from).collect();
        if self.config.infer_metrics {
            for (record, input) in records.iter_mut().zip(projects) {
                infer_structural_metrics(record, input);
            }
        }

        // Normalize each metric column across the whole candidate set.
        let time_norm = min_max_normalize(&metric_column(&records, |r| r.time_spent));
        let success_norm = min_max_normalize(&metric_column(&records, |r| r.success_score));
        let contribution_norm =
            min_max_normalize(&metric_column(&records, |r| r.contribution_score));

        let all_scored: Vec<ScoredProject> = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| {
                let normalized = NormalizedMetrics {
                    time: time_norm[i],
                    success: success_norm[i],
                    contribution: contribution_norm[i],
                };
                let skill = skill_match_boost(
                    &record.skills,
                    &request.target_skills,
                    self.config.skill_alpha,
                );
                let semantic = semantic_boost(
                    record.embedding.as_deref(),
                    request.target_embedding.as_deref(),
                    self.config.semantic_alpha,
                );
                let score = combine_score(&normalized, &self.config.weights, skill, semantic);
                ScoredProject {
                    record,
                    normalized,
                    score,
                }
            })
            .collect();

        let (selected, coverage) =
            select_diverse(all_scored.clone(), request.top_k, self.config.diversity_alpha);

        let covered_skills = coverage.into_sorted();
        let average = average_score(&selected);
        let summary = build_summary(selected.len(), &covered_skills, average, true);

        debug!(
            candidates = all_scored.len(),
            top_k = request.top_k,
            selected = selected.len(),
            covered_skills = covered_skills.len(),
            "ranking complete"
        );

        RankResult {
            selected,
            all_scored,
            covered_skills,
            average_score: average,
            summary,
        }
    }

    /// Ranks loosely-shaped records (JSON values).
    ///
    /// Missing fields default; the only failure is a record field carrying a
    /// fundamentally wrong type, which is reported with its record index.
    pub fn rank_values(
        &self,
        projects: &[Value],
        request: &RankRequest,
    ) -> Result<RankResult, RankerError> {
        let inputs = projects
            .iter()
            .enumerate()
            .map(|(index, value)| ProjectInput::from_value(value, index))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.rank(&inputs, request))
    }
}

fn metric_column(records: &[ProjectRecord], metric: impl Fn(&ProjectRecord) -> f64) -> Vec<f64> {
    records.iter().map(metric).collect()
}
