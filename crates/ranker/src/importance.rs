//! Importance scoring for text and media projects.
//!
//! Produces the 0–100 quality score that feeds the success metric for
//! projects without code-level signals. Text scoring leans on content volume
//! and keyword richness; media scoring leans on file complexity and tool
//! proficiency. Coding projects are scored by a separate analyzer and are out
//! of scope here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Project family, detected from the free-form type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectKind {
    Text,
    Media,
}

impl ProjectKind {
    /// Type strings containing `media` or `visual` map to Media; anything
    /// else is scored as Text.
    pub fn from_type_str(project_type: &str) -> Self {
        let lowered = project_type.to_lowercase();
        if lowered.contains("media") || lowered.contains("visual") {
            ProjectKind::Media
        } else {
            ProjectKind::Text
        }
    }
}

/// Structural stats backing an importance score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectStats {
    pub project_type: String,
    pub word_count: f64,
    pub total_size_bytes: f64,
    pub file_count: f64,
    pub keyword_count: usize,
    pub skill_count: usize,
    /// Media projects store their software/tooling here.
    pub software_count: usize,
    pub tag_count: usize,
    pub date_modified: Option<DateTime<Utc>>,
}

/// Importance score in [0, 100], rounded to 2 decimals.
///
/// `now` is the evaluation instant for the recency component — passed in so
/// the computation stays deterministic.
pub fn importance_score(stats: &ProjectStats, now: DateTime<Utc>) -> f64 {
    match ProjectKind::from_type_str(&stats.project_type) {
        ProjectKind::Media => score_media_project(stats, now),
        ProjectKind::Text => score_text_project(stats, now),
    }
}

/// Text formula: content volume 45%, keyword richness 20%, skill diversity
/// 15%, file structure 10%, recency 10%.
fn score_text_project(stats: &ProjectStats, now: DateTime<Utc>) -> f64 {
    let total_size_mb = stats.total_size_bytes / (1024.0 * 1024.0);

    // Content volume: word_count primary, size-based fallback.
    // Word scale: 12000+ words = 100%.
    let word_volume = (stats.word_count / 12_000.0).min(1.0) * 100.0;
    // Piecewise logarithmic size scale: 0-1 MB ramps to ~70%, 1-20 MB to 100%.
    let size_volume = if total_size_mb <= 1.0 {
        (total_size_mb.ln_1p() / 1.0f64.ln_1p()).min(1.0) * 70.0
    } else {
        70.0 + ((total_size_mb - 1.0).ln_1p() / 19.0f64.ln_1p()).min(1.0) * 30.0
    };
    // The stronger signal wins — word_count is not always populated.
    let mut content_volume = word_volume.max(size_volume);
    // Content floor for real text collections.
    if total_size_mb >= 0.2 || stats.word_count >= 500.0 {
        content_volume = content_volume.max(40.0);
    }

    // Keyword richness: 35+ keywords = 100%.
    let keyword_richness = (stats.keyword_count as f64 / 35.0).min(1.0) * 100.0;
    // Skill diversity: 9+ skills = 100%.
    let skill_diversity = (stats.skill_count as f64 / 9.0).min(1.0) * 100.0;
    // File structure: 12+ files = 100%.
    let file_structure = (stats.file_count / 12.0).min(1.0) * 100.0;
    // Recency: linear 2-year window.
    let recency = recency_score(stats.date_modified, now, 730.0);

    round2(
        content_volume * 0.45
            + keyword_richness * 0.20
            + skill_diversity * 0.15
            + file_structure * 0.10
            + recency * 0.10,
    )
}

/// Media formula: file complexity 55%, tool proficiency 20%, keyword richness
/// 10%, skill diversity 10%, recency 5%.
fn score_media_project(stats: &ProjectStats, now: DateTime<Utc>) -> f64 {
    let total_size_mb = stats.total_size_bytes / (1024.0 * 1024.0);

    // File complexity: 30+ files = 100%; 500+ MB = 100%.
    let file_complexity = (stats.file_count / 30.0).min(1.0) * 100.0;
    let size_complexity = (total_size_mb / 500.0).min(1.0) * 100.0;
    let complexity = file_complexity * 0.7 + size_complexity * 0.3;

    // Tool proficiency: software + tags, 8+ = 100%.
    let tool_proficiency =
        ((stats.software_count + stats.tag_count) as f64 / 8.0).min(1.0) * 100.0;
    // Keyword richness: 25+ keywords = 100%.
    let keyword_richness = (stats.keyword_count as f64 / 25.0).min(1.0) * 100.0;
    // Skill diversity: 6+ skills = 100%.
    let skill_diversity = (stats.skill_count as f64 / 6.0).min(1.0) * 100.0;
    // Recency: linear 3-year window, less critical for creative work.
    let recency = recency_score(stats.date_modified, now, 1095.0);

    round2(
        complexity * 0.55
            + tool_proficiency * 0.20
            + keyword_richness * 0.10
            + skill_diversity * 0.10
            + recency * 0.05,
    )
}

/// Linear decay inside the window, 0 outside; 0 when the date is unknown.
fn recency_score(date_modified: Option<DateTime<Utc>>, now: DateTime<Utc>, window_days: f64) -> f64 {
    let modified = match date_modified {
        Some(d) => d,
        None => return 0.0,
    };
    let days_since = (now - modified).num_days() as f64;
    ((window_days - days_since) / window_days).clamp(0.0, 1.0) * 100.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
