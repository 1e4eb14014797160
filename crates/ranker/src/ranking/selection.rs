use std::collections::BTreeSet;

use crate::models::ScoredProject;

/// Running union of skills represented by the selection so far.
///
/// The set only grows across selection steps; sorted iteration backs the
/// `covered_skills` output contract.
#[derive(Debug, Clone, Default)]
pub struct SkillCoverage {
    covered: BTreeSet<String>,
}

impl SkillCoverage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of the given skills not yet represented.
    pub fn novel_count(&self, skills: &[String]) -> usize {
        skills
            .iter()
            .filter(|skill| !self.covered.contains(skill.as_str()))
            .count()
    }

    /// Unions every skill into the covered set.
    pub fn absorb(&mut self, skills: &[String]) {
        for skill in skills {
            self.covered.insert(skill.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.covered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.covered.is_empty()
    }

    /// Covered skills in sorted order.
    pub fn into_sorted(self) -> Vec<String> {
        self.covered.into_iter().collect()
    }
}

/// Greedy diversity-aware top-k selection — an approximate weighted
/// maximum-coverage heuristic.
///
/// Algorithm:
/// 1. Count the distinct skills across the entire candidate set once
///    (floored at 1 to keep the diversity denominator safe)
/// 2. Stable-sort the pool descending by score, so candidates with equal
///    marginal value resolve to score order, then original input order
/// 3. Each round, score every remaining candidate as
///    `score + diversity_alpha * new_skills / total_distinct_skills` and take
///    the strictly greatest; ties keep the earliest candidate in pool order
/// 4. Union the chosen candidate's skills into coverage and repeat, up to
///    `top_k` picks or pool exhaustion
///
/// Not globally optimal; deterministic, O(k · n · s).
pub fn select_diverse(
    candidates: Vec<ScoredProject>,
    top_k: usize,
    diversity_alpha: f64,
) -> (Vec<ScoredProject>, SkillCoverage) {
    let total_distinct_skills = {
        let all: BTreeSet<&str> = candidates
            .iter()
            .flat_map(|c| c.record.skills.iter().map(String::as_str))
            .collect();
        all.len().max(1)
    };

    let mut pool = candidates;
    pool.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut selected = Vec::new();
    let mut coverage = SkillCoverage::new();

    for _ in 0..top_k.min(pool.len()) {
        let mut best_idx = 0usize;
        let mut best_val = f64::NEG_INFINITY;

        for (idx, candidate) in pool.iter().enumerate() {
            let novel = coverage.novel_count(&candidate.record.skills);
            let diversity = novel as f64 / total_distinct_skills as f64;
            let marginal = candidate.score + diversity_alpha * diversity;
            if marginal > best_val {
                best_val = marginal;
                best_idx = idx;
            }
        }

        let chosen = pool.remove(best_idx);
        coverage.absorb(&chosen.record.skills);
        selected.push(chosen);
    }

    (selected, coverage)
}
