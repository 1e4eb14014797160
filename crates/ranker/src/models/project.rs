use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::RankerError;

fn default_name() -> String {
    "<unnamed>".to_string()
}

/// A project as supplied by callers.
///
/// Every field except `name` defaults when absent; unknown fields are
/// ignored. A field of the wrong type is an error — see
/// [`ProjectInput::from_value`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInput {
    #[serde(alias = "project_name")]
    pub name: String,
    pub time_spent: f64,
    pub success_score: f64,
    pub contribution_score: f64,
    pub skills: Vec<String>,
    /// Structural stats, consulted only when metric inference is enabled.
    pub lines_of_code: f64,
    pub file_count: f64,
    pub contributors: Vec<String>,
    /// Present only when the caller requests semantic scoring.
    pub embedding: Option<Vec<f64>>,
}

impl Default for ProjectInput {
    fn default() -> Self {
        Self {
            name: default_name(),
            time_spent: 0.0,
            success_score: 0.0,
            contribution_score: 0.0,
            skills: Vec::new(),
            lines_of_code: 0.0,
            file_count: 0.0,
            contributors: Vec::new(),
            embedding: None,
        }
    }
}

impl ProjectInput {
    /// Parses one loosely-shaped record. `index` identifies the record in
    /// error messages so callers can point at the offending input.
    pub fn from_value(value: &Value, index: usize) -> Result<Self, RankerError> {
        serde_json::from_value(value.clone())
            .map_err(|source| RankerError::MalformedRecord { index, source })
    }
}

/// Engine-owned copy of a project, with skill hygiene applied at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    pub time_spent: f64,
    pub success_score: f64,
    pub contribution_score: f64,
    pub skills: Vec<String>,
    pub embedding: Option<Vec<f64>>,
}

impl From<&ProjectInput> for ProjectRecord {
    fn from(input: &ProjectInput) -> Self {
        Self {
            name: input.name.clone(),
            time_spent: input.time_spent,
            success_score: input.success_score,
            contribution_score: input.contribution_score,
            skills: dedup_skills(&input.skills),
            embedding: input.embedding.clone(),
        }
    }
}

/// Trims each skill, drops empties, and removes duplicates case-sensitively
/// while preserving first-occurrence order.
pub fn dedup_skills(skills: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for skill in skills {
        let trimmed = skill.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_string()) {
            out.push(trimmed.to_string());
        }
    }
    out
}

/// Per-metric min-max normalized values, each in [0, 1].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct NormalizedMetrics {
    pub time: f64,
    pub success: f64,
    pub contribution: f64,
}

/// A candidate with its derived scoring fields attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredProject {
    pub record: ProjectRecord,
    pub normalized: NormalizedMetrics,
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_default() {
        let input = ProjectInput::from_value(&json!({ "project_name": "X" }), 0).unwrap();
        assert_eq!(input.name, "X");
        assert_eq!(input.time_spent, 0.0);
        assert_eq!(input.success_score, 0.0);
        assert_eq!(input.contribution_score, 0.0);
        assert!(input.skills.is_empty());
        assert!(input.embedding.is_none());
    }

    #[test]
    fn test_unnamed_record_gets_placeholder_name() {
        let input = ProjectInput::from_value(&json!({ "time_spent": 3.0 }), 0).unwrap();
        assert_eq!(input.name, "<unnamed>");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let value = json!({
            "name": "scanner-output",
            "id": 42,
            "languages": ["Python"],
            "is_hidden": false
        });
        let input = ProjectInput::from_value(&value, 0).unwrap();
        assert_eq!(input.name, "scanner-output");
    }

    #[test]
    fn test_wrong_typed_metric_is_an_error() {
        let value = json!({ "name": "bad", "time_spent": "lots" });
        let err = ProjectInput::from_value(&value, 7).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("index 7"), "Error should name the record: {msg}");
    }

    #[test]
    fn test_dedup_skills_preserves_first_occurrence_order() {
        let skills = vec![
            "Python".to_string(),
            "SQL".to_string(),
            "Python".to_string(),
            "React".to_string(),
        ];
        assert_eq!(dedup_skills(&skills), vec!["Python", "SQL", "React"]);
    }

    #[test]
    fn test_dedup_skills_is_case_sensitive() {
        let skills = vec!["python".to_string(), "Python".to_string()];
        assert_eq!(dedup_skills(&skills), vec!["python", "Python"]);
    }

    #[test]
    fn test_dedup_skills_trims_and_drops_empties() {
        let skills = vec!["  Rust ".to_string(), "".to_string(), "   ".to_string()];
        assert_eq!(dedup_skills(&skills), vec!["Rust"]);
    }

    #[test]
    fn test_record_construction_applies_hygiene() {
        let input = ProjectInput {
            skills: vec!["Go".to_string(), "Go".to_string(), " ".to_string()],
            ..ProjectInput::default()
        };
        let record = ProjectRecord::from(&input);
        assert_eq!(record.skills, vec!["Go"]);
    }
}
