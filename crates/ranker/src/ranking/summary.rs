use crate::models::ScoredProject;

/// Mean combined score of the selected projects, rounded to 4 decimals.
/// 0.0 when nothing is selected.
pub fn average_score(selected: &[ScoredProject]) -> f64 {
    if selected.is_empty() {
        return 0.0;
    }
    let sum: f64 = selected.iter().map(|p| p.score).sum();
    round_to(sum / selected.len() as f64, 4)
}

/// Builds the human-readable overview for a ranking result. Deterministic —
/// derived only from counts, coverage, and the average score.
pub fn build_summary(
    selected_count: usize,
    covered_skills: &[String],
    average: f64,
    had_candidates: bool,
) -> String {
    if !had_candidates {
        return "No projects provided. No summary generated.".to_string();
    }
    if selected_count == 0 {
        return "No projects selected.".to_string();
    }

    let project_plural = if selected_count == 1 { "" } else { "s" };
    let skill_plural = if covered_skills.len() == 1 { "" } else { "s" };
    let skill_list = if covered_skills.is_empty() {
        String::new()
    } else {
        format!(": {}", covered_skills.join(", "))
    };

    format!(
        "Across {selected_count} key project{project_plural}, the user demonstrates \
         balanced strengths in effort, impact, and collaboration. The selected \
         projects showcase {} distinct skill{skill_plural}{skill_list}. The average \
         project score is {average:.2}, reflecting consistent performance and broad \
         skill coverage.",
        covered_skills.len()
    )
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NormalizedMetrics, ProjectRecord, ScoredProject};

    fn make_scored(score: f64) -> ScoredProject {
        ScoredProject {
            record: ProjectRecord {
                name: "p".to_string(),
                time_spent: 0.0,
                success_score: 0.0,
                contribution_score: 0.0,
                skills: Vec::new(),
                embedding: None,
            },
            normalized: NormalizedMetrics::default(),
            score,
        }
    }

    #[test]
    fn test_average_of_empty_selection_is_zero() {
        assert_eq!(average_score(&[]), 0.0);
    }

    #[test]
    fn test_average_rounded_to_four_decimals() {
        let selected = vec![make_scored(0.3), make_scored(0.3), make_scored(0.4)];
        assert_eq!(average_score(&selected), 0.3333);
    }

    #[test]
    fn test_summary_no_candidates() {
        assert_eq!(
            build_summary(0, &[], 0.0, false),
            "No projects provided. No summary generated."
        );
    }

    #[test]
    fn test_summary_nothing_selected() {
        assert_eq!(build_summary(0, &[], 0.0, true), "No projects selected.");
    }

    #[test]
    fn test_summary_singular_forms() {
        let skills = vec!["Python".to_string()];
        let summary = build_summary(1, &skills, 0.75, true);
        assert!(summary.contains("1 key project,"), "Got: {summary}");
        assert!(summary.contains("1 distinct skill:"), "Got: {summary}");
        assert!(summary.contains("Python"));
        assert!(summary.contains("0.75"));
    }

    #[test]
    fn test_summary_plural_forms_and_skill_list() {
        let skills = vec!["Python".to_string(), "SQL".to_string()];
        let summary = build_summary(3, &skills, 0.5, true);
        assert!(summary.contains("3 key projects"), "Got: {summary}");
        assert!(summary.contains("2 distinct skills: Python, SQL"), "Got: {summary}");
    }

    #[test]
    fn test_summary_without_skills_omits_list() {
        let summary = build_summary(2, &[], 0.25, true);
        assert!(summary.contains("0 distinct skills."), "Got: {summary}");
    }
}
